//! Web layer for the bus board.
//!
//! Renders the single-screen page and serves the board and timetable as
//! HTML fragments or JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
