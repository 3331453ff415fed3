//! Board filter type.

use std::fmt;

use super::{Operator, Route};

/// Error returned when parsing an unknown filter key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter: {key}")]
pub struct UnknownFilter {
    key: String,
}

/// What the upcoming-buses board is restricted to.
///
/// The filter is applied per trip: a trip qualifies when its own route or
/// operator matches, regardless of what else runs on the route.
///
/// # Examples
///
/// ```
/// use bus_server::domain::{Filter, Operator, Route};
///
/// let filter = Filter::parse("ctb").unwrap();
/// assert!(filter.matches(Route::Galle, Operator::Ctb));
/// assert!(!filter.matches(Route::Galle, Operator::Private));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Every trip on every route.
    All,
    /// Trips on one route only.
    Route(Route),
    /// Trips run by one operator class, on any route.
    Operator(Operator),
}

impl Filter {
    /// Parse a filter from its lowercase query key.
    ///
    /// Route keys and operator keys share one namespace on the board's filter
    /// chips, so this accepts `all`, any route key, and any operator key.
    pub fn parse(s: &str) -> Result<Self, UnknownFilter> {
        if s == "all" {
            return Ok(Filter::All);
        }
        if let Ok(route) = Route::parse(s) {
            return Ok(Filter::Route(route));
        }
        if let Ok(operator) = Operator::parse(s) {
            return Ok(Filter::Operator(operator));
        }
        Err(UnknownFilter { key: s.to_string() })
    }

    /// The lowercase key used in query strings and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Route(route) => route.as_str(),
            Filter::Operator(operator) => operator.as_str(),
        }
    }

    /// Whether a trip with this route and operator passes the filter.
    pub fn matches(&self, route: Route, operator: Operator) -> bool {
        match self {
            Filter::All => true,
            Filter::Route(wanted) => route == *wanted,
            Filter::Operator(wanted) => operator == *wanted,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All Routes"),
            Filter::Route(route) => f.write_str(route.display_name()),
            Filter::Operator(operator) => {
                write!(f, "{} Only", operator.display_name())
            }
        }
    }
}
