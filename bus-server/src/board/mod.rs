//! The departure board: next-bus selection and countdown formatting.
//!
//! Everything here is pure and synchronous. The web layer supplies "now" and
//! the user's preferences explicitly, so the same inputs always produce the
//! same board.

mod format;
mod selector;

pub use format::{format_countdown, minutes_until};
pub use selector::{BoardConfig, BusArrival, DepartureBoard};
