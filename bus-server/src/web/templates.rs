//! Askama templates for the bus board frontend.

use askama::Template;

use crate::board::{BusArrival, format_countdown, minutes_until};
use crate::domain::{Filter, LeadTime, Location, Preferences, Route, TimeOfDay};
use crate::timetable::{Timetable, Trip};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The single-screen board page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Clock reading the page was rendered for, "HH:MM".
    pub clock: String,
    /// Human-readable date line.
    pub date_line: String,
    /// Selected location display name, for arrival labels.
    pub location_name: String,
    /// Preference state echoed into the form controls.
    pub locations: Vec<ChoiceView>,
    pub filters: Vec<ChoiceView>,
    pub leads: Vec<ChoiceView>,
    pub notify: bool,
    /// Hidden-field values carried across form submissions.
    pub location_key: String,
    pub filter_key: String,
    pub lead_minutes: u16,
    /// Upcoming buses under the active preferences.
    pub buses: Vec<ArrivalView>,
    /// Full-timetable grid.
    pub columns: Vec<RouteColumnView>,
    pub rows: Vec<TimetableRowView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Upcoming-buses fragment.
#[derive(Template)]
#[template(path = "board_fragment.html")]
pub struct BoardTemplate {
    pub location_name: String,
    pub buses: Vec<ArrivalView>,
}

/// Full-timetable fragment.
#[derive(Template)]
#[template(path = "timetable_fragment.html")]
pub struct TimetableTemplate {
    pub columns: Vec<RouteColumnView>,
    pub rows: Vec<TimetableRowView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One option in a select control or filter chip row.
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

impl ChoiceView {
    /// Location options with the active one marked.
    pub fn locations(selected: Location) -> Vec<Self> {
        Location::ALL
            .iter()
            .map(|loc| Self {
                key: loc.as_str().to_string(),
                label: loc.display_name().to_string(),
                selected: *loc == selected,
            })
            .collect()
    }

    /// Filter chips in board order: all routes, then the two operators.
    pub fn filters(selected: Filter) -> Vec<Self> {
        let mut all = vec![Filter::All];
        all.extend(Route::ALL.iter().map(|r| Filter::Route(*r)));
        all.extend(
            crate::domain::Operator::ALL
                .iter()
                .map(|o| Filter::Operator(*o)),
        );

        all.into_iter()
            .map(|f| Self {
                key: f.as_str().to_string(),
                label: f.to_string(),
                selected: f == selected,
            })
            .collect()
    }

    /// Notification lead-time options.
    pub fn leads(selected: LeadTime) -> Vec<Self> {
        LeadTime::ALL
            .iter()
            .map(|lead| Self {
                key: lead.minutes().to_string(),
                label: format!("{} minutes before arrival", lead.minutes()),
                selected: *lead == selected,
            })
            .collect()
    }
}

/// One upcoming bus as rendered on the board.
#[derive(Debug, Clone)]
pub struct ArrivalView {
    pub route_name: String,
    pub route_class: &'static str,
    pub operator_name: String,
    pub operator_class: &'static str,
    /// Posted departure time at Neluwa, "HH:MM".
    pub departure: String,
    /// Arrival time at the viewing location, wrapped for display.
    pub arrival: String,
    /// Countdown line for departure ("Departs in 10 min" / "En route").
    pub departs_line: String,
    /// Countdown line for arrival ("Arrives in 1h 5m" / "Arrived").
    pub arrives_line: String,
}

impl ArrivalView {
    /// Build from a projected arrival at a given clock reading.
    pub fn from_arrival(bus: &BusArrival, now: TimeOfDay) -> Self {
        let departs = minutes_until(bus.departure.minutes() as i32, now);
        let departs_line = if departs <= 0 {
            "En route".to_string()
        } else {
            format!("Departs in {}", format_countdown(departs, "En route"))
        };

        let arrives = minutes_until(bus.arrival_minutes, now);
        let arrives_line = if arrives <= 0 {
            "Arrived".to_string()
        } else {
            format!("Arrives in {}", format_countdown(arrives, "Arrived"))
        };

        Self {
            route_name: bus.route.display_name().to_string(),
            route_class: bus.route.badge_class(),
            operator_name: bus.operator.display_name().to_string(),
            operator_class: bus.operator.badge_class(),
            departure: bus.departure.to_string(),
            arrival: TimeOfDay::wrap_to_day(bus.arrival_minutes).to_string(),
            departs_line,
            arrives_line,
        }
    }
}

/// Header of one timetable column.
#[derive(Debug, Clone)]
pub struct RouteColumnView {
    pub name: String,
    pub class: &'static str,
}

impl RouteColumnView {
    pub fn all() -> Vec<Self> {
        Route::ALL
            .iter()
            .map(|route| Self {
                name: route.display_name().to_string(),
                class: route.badge_class(),
            })
            .collect()
    }
}

/// One cell of the timetable grid.
#[derive(Debug, Clone)]
pub struct TripCellView {
    pub time: String,
    pub operator_name: String,
    pub operator_class: &'static str,
}

impl TripCellView {
    fn from_trip(trip: &Trip) -> Self {
        Self {
            time: trip.departure.to_string(),
            operator_name: trip.operator.display_name().to_string(),
            operator_class: trip.operator.badge_class(),
        }
    }
}

/// One row of the timetable grid: one optional cell per route.
#[derive(Debug, Clone)]
pub struct TimetableRowView {
    pub cells: Vec<Option<TripCellView>>,
}

/// Build the grid rows: row index up to the longest route, blank cells where
/// a route has run out of trips.
pub fn timetable_rows(timetable: &Timetable) -> Vec<TimetableRowView> {
    (0..timetable.longest_route_len())
        .map(|i| TimetableRowView {
            cells: Route::ALL
                .iter()
                .map(|route| timetable.trips(*route).get(i).map(TripCellView::from_trip))
                .collect(),
        })
        .collect()
}

impl IndexTemplate {
    /// Assemble the full page for one render.
    pub fn build(
        board: &crate::board::DepartureBoard,
        now: TimeOfDay,
        date_line: String,
        prefs: &Preferences,
    ) -> Self {
        let buses = board
            .next_buses(now, prefs.location, prefs.filter)
            .iter()
            .map(|bus| ArrivalView::from_arrival(bus, now))
            .collect();

        Self {
            clock: now.to_string(),
            date_line,
            location_name: prefs.location.display_name().to_string(),
            locations: ChoiceView::locations(prefs.location),
            filters: ChoiceView::filters(prefs.filter),
            leads: ChoiceView::leads(prefs.lead_time),
            notify: prefs.notifications_enabled,
            location_key: prefs.location.as_str().to_string(),
            filter_key: prefs.filter.as_str().to_string(),
            lead_minutes: prefs.lead_time.minutes(),
            buses,
            columns: RouteColumnView::all(),
            rows: timetable_rows(board.timetable()),
        }
    }
}
