//! Device fixes reported by the browser.

use crate::domain::Coordinate;

/// A single device fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
    /// Reported accuracy radius in metres, if known.
    pub accuracy_m: Option<f64>,
}

impl Position {
    pub fn new(coordinate: Coordinate, accuracy_m: Option<f64>) -> Self {
        Self {
            coordinate,
            accuracy_m,
        }
    }
}
