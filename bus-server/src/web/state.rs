//! Application state for the web layer.

use std::sync::Arc;

use crate::board::DepartureBoard;

/// Shared application state.
///
/// The board owns the static timetable and offsets, so this is the only
/// handle handlers need.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<DepartureBoard>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(board: DepartureBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
