//! Time-of-day handling for the bus timetable.
//!
//! The timetable stores times as "HH:MM" strings. This module provides a
//! validated minutes-since-midnight type plus the arrival projection used by
//! the departure board. Arrival projection works on an absolute minute axis:
//! a location offset can push an arrival past midnight (>= 1440) or before it
//! (< 0), and those values must stay unwrapped for ordering. Wrapping into a
//! displayable time of day is a separate, explicit step.

use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Minutes since midnight of the local day, always in `0..=1439`.
///
/// # Examples
///
/// ```
/// use bus_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("06:10").unwrap();
/// assert_eq!(t.minutes(), 370);
/// assert_eq!(t.to_string(), "06:10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay(u16);

/// Minutes in a day; `TimeOfDay` values are strictly below this.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

impl TimeOfDay {
    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("610").is_err());
    /// assert!(TimeOfDay::parse_hhmm("6:10").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Construct from raw minutes since midnight, if in range.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if (minutes as i32) < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Construct from hour and minute components, if in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Returns the raw minutes since midnight (0-1439).
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Wrap an absolute minute value into a displayable time of day.
    ///
    /// Arrival projection leaves values unwrapped so comparisons against "now"
    /// stay on one axis; call this only at the display boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::TimeOfDay;
    ///
    /// // Spilled into the next day
    /// assert_eq!(TimeOfDay::wrap_to_day(1455).to_string(), "00:15");
    /// // Spilled into the previous day
    /// assert_eq!(TimeOfDay::wrap_to_day(-10).to_string(), "23:50");
    /// ```
    pub fn wrap_to_day(minutes: i32) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }
}

/// Project a departure to an arrival on the absolute minute axis.
///
/// Pure addition: the result may be negative (the location lies before the
/// origin on the route) or >= 1440 (arrival after midnight). Callers decide
/// when, if ever, to normalize for display.
pub fn arrival_minutes(departure: TimeOfDay, offset_mins: i32) -> i32 {
    departure.minutes() as i32 + offset_mins
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
