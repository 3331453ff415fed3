//! Session preferences supplied by the page controls.

use super::{Filter, Location};

/// Error returned for a lead time outside the offered set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid lead time: {minutes} (expected 5, 10 or 15)")]
pub struct InvalidLeadTime {
    minutes: u16,
}

/// How far ahead of arrival a notification would fire.
///
/// The page offers a fixed set of three values. The preference is captured
/// and echoed back into the form, but no alerting is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTime {
    Five,
    Ten,
    Fifteen,
}

impl LeadTime {
    /// The offered values, in menu order.
    pub const ALL: [LeadTime; 3] = [LeadTime::Five, LeadTime::Ten, LeadTime::Fifteen];

    /// Parse a lead time from its minute value.
    pub fn from_minutes(minutes: u16) -> Result<Self, InvalidLeadTime> {
        match minutes {
            5 => Ok(LeadTime::Five),
            10 => Ok(LeadTime::Ten),
            15 => Ok(LeadTime::Fifteen),
            _ => Err(InvalidLeadTime { minutes }),
        }
    }

    /// The lead time in minutes.
    pub fn minutes(&self) -> u16 {
        match self {
            LeadTime::Five => 5,
            LeadTime::Ten => 10,
            LeadTime::Fifteen => 15,
        }
    }
}

impl Default for LeadTime {
    fn default() -> Self {
        LeadTime::Ten
    }
}

/// One user's board settings for a single render.
///
/// Read as a whole at the start of each selection pass so the location and
/// filter cannot disagree mid-computation. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Where the user is watching from.
    pub location: Location,
    /// Active board filter.
    pub filter: Filter,
    /// Whether the user asked for arrival alerts. Captured only.
    pub notifications_enabled: bool,
    /// Alert lead time. Captured only.
    pub lead_time: LeadTime,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            location: Location::Neluwa,
            filter: Filter::All,
            notifications_enabled: false,
            lead_time: LeadTime::default(),
        }
    }
}
