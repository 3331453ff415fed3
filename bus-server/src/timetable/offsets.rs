//! Per-location arrival offsets.
//!
//! A bus that leaves Neluwa at its posted time passes each viewing location a
//! fixed number of minutes later (or, for locations the Dellawa bus reaches
//! before Neluwa, earlier). The table is dense over (location, route): there
//! is a real entry for every pair, never an implicit zero.

use crate::domain::{Location, Route};

/// Minute offsets from posted departure to arrival, per location and route.
///
/// Indexed `[location][route]` in [`Location::ALL`] / [`Route::ALL`] order.
/// Neluwa is the origin, so its row is all zeros by definition.
#[derive(Debug, Clone)]
pub struct OffsetTable {
    offsets: [[i32; 3]; 5],
}

impl OffsetTable {
    /// The measured offsets for the village routes.
    pub fn village() -> Self {
        Self {
            //        galle  udugama  dellawa
            offsets: [
                [0, 0, 0],     // neluwa (origin)
                [5, 10, -5],   // mawanana
                [15, 20, -10], // suduallawa
                [20, 25, -20], // habarkada
                [30, 35, -30], // thawalama
            ],
        }
    }

    /// Offset in minutes for a route as seen from a location.
    pub fn offset(&self, location: Location, route: Route) -> i32 {
        self.offsets[location.index()][route.index()]
    }
}
