//! Bus route type.

use std::fmt;

/// Error returned when parsing an unknown route key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {key}")]
pub struct UnknownRoute {
    key: String,
}

/// One of the three fixed bus lines serving the village.
///
/// Every route departs from the Neluwa origin stand. The set is closed: any
/// route value is valid by construction, and lookups keyed by `Route` can be
/// exhaustive.
///
/// # Examples
///
/// ```
/// use bus_server::domain::Route;
///
/// let route = Route::parse("galle").unwrap();
/// assert_eq!(route, Route::Galle);
/// assert_eq!(route.display_name(), "Galle");
///
/// assert!(Route::parse("colombo").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Galle,
    Udugama,
    Dellawa,
}

impl Route {
    /// All routes, in timetable column order.
    pub const ALL: [Route; 3] = [Route::Galle, Route::Udugama, Route::Dellawa];

    /// Parse a route from its lowercase query key.
    pub fn parse(s: &str) -> Result<Self, UnknownRoute> {
        match s {
            "galle" => Ok(Route::Galle),
            "udugama" => Ok(Route::Udugama),
            "dellawa" => Ok(Route::Dellawa),
            _ => Err(UnknownRoute { key: s.to_string() }),
        }
    }

    /// The lowercase key used in query strings and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Galle => "galle",
            Route::Udugama => "udugama",
            Route::Dellawa => "dellawa",
        }
    }

    /// Human-readable route name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Galle => "Galle",
            Route::Udugama => "Udugama",
            Route::Dellawa => "Dellawa",
        }
    }

    /// CSS class used for the route's badge colour.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Route::Galle => "route-galle",
            Route::Udugama => "route-udugama",
            Route::Dellawa => "route-dellawa",
        }
    }

    /// Index of this route in [`Route::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Route::Galle => 0,
            Route::Udugama => 1,
            Route::Dellawa => 2,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_routes() {
        assert_eq!(Route::parse("galle").unwrap(), Route::Galle);
        assert_eq!(Route::parse("udugama").unwrap(), Route::Udugama);
        assert_eq!(Route::parse("dellawa").unwrap(), Route::Dellawa);
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(Route::parse("").is_err());
        assert!(Route::parse("Galle").is_err());
        assert!(Route::parse("colombo").is_err());
        assert!(Route::parse("galle ").is_err());
    }

    #[test]
    fn parse_as_str_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.as_str()).unwrap(), route);
        }
    }

    #[test]
    fn all_order_matches_index() {
        for (i, route) in Route::ALL.iter().enumerate() {
            assert_eq!(route.index(), i);
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Route::Galle.to_string(), "Galle");
        assert_eq!(Route::Dellawa.to_string(), "Dellawa");
    }
}
