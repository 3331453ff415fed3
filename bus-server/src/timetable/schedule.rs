//! The static village timetable.
//!
//! Departure times are as posted at the Neluwa stand. The tables are written
//! as "HH:MM" strings and parsed once at startup, so a typo in the data fails
//! construction loudly instead of rendering a wrong board.

use crate::domain::{Operator, Route, TimeError, TimeOfDay};

/// Error returned when the built-in schedule data is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// A departure time string failed to parse.
    #[error("bad departure time {time:?} on route {route}: {source}")]
    BadDeparture {
        route: Route,
        time: &'static str,
        source: TimeError,
    },

    /// A route has no trips at all.
    #[error("route {route} has no trips")]
    EmptyRoute { route: Route },
}

/// One scheduled trip: when it leaves Neluwa and who runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub departure: TimeOfDay,
    pub operator: Operator,
}

use Operator::{Ctb, Private};

const GALLE: &[(&str, Operator)] = &[
    ("04:10", Private),
    ("04:40", Ctb),
    ("05:40", Ctb),
    ("06:10", Ctb),
    ("06:35", Ctb),
    ("07:00", Ctb),
    ("07:45", Private),
    ("08:25", Private),
    ("10:30", Ctb),
    ("11:20", Ctb),
    ("11:50", Private),
    ("12:45", Private),
    ("13:25", Ctb),
    ("15:05", Private),
    ("16:40", Ctb),
];

const UDUGAMA: &[(&str, Operator)] = &[
    ("04:55", Private),
    ("05:15", Private),
    ("07:20", Ctb),
    ("08:05", Ctb),
    ("08:45", Ctb),
    ("09:10", Private),
    ("09:35", Ctb),
    ("10:00", Private),
    ("10:55", Private),
    ("12:20", Ctb),
    ("13:10", Ctb),
    ("13:40", Ctb),
    ("14:10", Private),
    ("14:40", Ctb),
    ("15:30", Private),
    ("15:55", Ctb),
    ("16:10", Ctb),
    ("17:05", Private),
    ("17:35", Ctb),
    ("18:20", Ctb),
];

const DELLAWA: &[(&str, Operator)] = &[
    ("06:30", Private),
    ("06:50", Ctb),
    ("07:30", Private),
    ("07:50", Ctb),
    ("08:15", Private),
    ("08:40", Ctb),
    ("09:05", Private),
    ("09:50", Ctb),
    ("10:10", Private),
    ("11:10", Private),
    ("11:50", Private),
    ("12:20", Ctb),
    ("13:10", Private),
    ("13:40", Ctb),
    ("14:05", Ctb),
    ("14:25", Private),
    ("14:40", Private),
    ("15:05", Ctb),
    ("15:30", Ctb),
    ("15:50", Private),
    ("16:20", Ctb),
    ("16:45", Private),
    ("17:10", Ctb),
    ("17:35", Private),
    ("18:35", Ctb),
    ("19:25", Ctb),
    ("20:20", Ctb),
    ("21:40", Ctb),
];

/// The full per-route schedule.
///
/// Trips are stored in posted (source) order per route. The departure board
/// must not rely on that order after applying location offsets; only the
/// full-timetable grid renders trips as stored.
#[derive(Debug, Clone)]
pub struct Timetable {
    routes: [Vec<Trip>; 3],
}

impl Timetable {
    /// Build the village timetable from the built-in tables.
    pub fn village() -> Result<Self, TimetableError> {
        Ok(Self {
            routes: [
                parse_route(Route::Galle, GALLE)?,
                parse_route(Route::Udugama, UDUGAMA)?,
                parse_route(Route::Dellawa, DELLAWA)?,
            ],
        })
    }

    /// Trips on one route, in posted order.
    pub fn trips(&self, route: Route) -> &[Trip] {
        &self.routes[route.index()]
    }

    /// Number of trips on the route with the most trips.
    ///
    /// The full-timetable grid has this many rows; shorter routes leave
    /// their remaining cells blank.
    pub fn longest_route_len(&self) -> usize {
        Route::ALL
            .iter()
            .map(|r| self.trips(*r).len())
            .max()
            .unwrap_or(0)
    }
}

fn parse_route(
    route: Route,
    table: &[(&'static str, Operator)],
) -> Result<Vec<Trip>, TimetableError> {
    if table.is_empty() {
        return Err(TimetableError::EmptyRoute { route });
    }

    table
        .iter()
        .map(|&(time, operator)| {
            let departure = TimeOfDay::parse_hhmm(time).map_err(|source| {
                TimetableError::BadDeparture {
                    route,
                    time,
                    source,
                }
            })?;
            Ok(Trip {
                departure,
                operator,
            })
        })
        .collect()
}
