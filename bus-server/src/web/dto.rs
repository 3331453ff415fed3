//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::BusArrival;
use crate::domain::TimeOfDay;

/// Query parameters shared by the page and fragment endpoints.
///
/// Everything is optional; absent values fall back to the defaults the page
/// first loads with. Present-but-invalid values are rejected, not defaulted.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Viewing location key (defaults to the origin, Neluwa).
    pub location: Option<String>,

    /// Filter key: `all`, a route, or an operator.
    pub filter: Option<String>,

    /// Whether arrival notifications are switched on.
    pub notify: Option<bool>,

    /// Notification lead time in minutes (5, 10 or 15).
    pub lead: Option<u16>,

    /// Time in HH:MM format (defaults to now). Lets the board be rendered
    /// for an arbitrary clock reading.
    pub time: Option<String>,
}

/// One upcoming bus in the JSON API.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Route key
    pub route: String,

    /// Operator label ("CTB" or "Private")
    pub operator: String,

    /// Posted departure time at Neluwa, "HH:MM"
    pub departure: String,

    /// Arrival time at the requested location, "HH:MM" (wrapped for display)
    pub arrival: String,

    /// Signed minutes until departure from Neluwa
    pub departs_in_mins: i32,

    /// Signed minutes until arrival at the requested location
    pub arrives_in_mins: i32,
}

impl ArrivalResult {
    /// Build from a projected arrival at a given clock reading.
    pub fn from_arrival(bus: &BusArrival, now: TimeOfDay) -> Self {
        use crate::board::minutes_until;

        Self {
            route: bus.route.as_str().to_string(),
            operator: bus.operator.display_name().to_string(),
            departure: bus.departure.to_string(),
            arrival: TimeOfDay::wrap_to_day(bus.arrival_minutes).to_string(),
            departs_in_mins: minutes_until(bus.departure.minutes() as i32, now),
            arrives_in_mins: minutes_until(bus.arrival_minutes, now),
        }
    }
}

/// Response for the upcoming-buses endpoint.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Clock reading the board was computed for, "HH:MM"
    pub time: String,

    /// Viewing location key
    pub location: String,

    /// Active filter key
    pub filter: String,

    /// Upcoming buses, ascending by arrival
    pub buses: Vec<ArrivalResult>,
}

/// One cell of the full-timetable grid.
#[derive(Debug, Serialize)]
pub struct TimetableCell {
    /// Posted departure time, "HH:MM"
    pub time: String,

    /// Operator label
    pub operator: String,
}

/// One row of the full-timetable grid: one optional cell per route, in
/// route order. Shorter routes yield `None` cells.
#[derive(Debug, Serialize)]
pub struct TimetableRowResult {
    pub cells: Vec<Option<TimetableCell>>,
}

/// Response for the full-timetable endpoint.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    /// Route keys, in column order
    pub routes: Vec<String>,

    pub rows: Vec<TimetableRowResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
