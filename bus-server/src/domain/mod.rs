//! Domain types for the village bus board.
//!
//! This module contains the core domain model types. The route, operator and
//! location sets are closed enumerations, so invalid combinations are
//! unrepresentable and the timetable and offset tables can be complete by
//! construction. String parsing happens only at the web boundary.

mod filter;
mod location;
mod operator;
mod preferences;
mod route;
mod time;

pub use filter::{Filter, UnknownFilter};
pub use location::{Location, UnknownLocation};
pub use operator::{Operator, UnknownOperator};
pub use preferences::{InvalidLeadTime, LeadTime, Preferences};
pub use route::{Route, UnknownRoute};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay, arrival_minutes};
