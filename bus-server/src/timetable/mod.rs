//! Static timetable data: the per-route schedule and the location offsets.

mod offsets;
mod schedule;

pub use offsets::OffsetTable;
pub use schedule::{Timetable, TimetableError, Trip};
