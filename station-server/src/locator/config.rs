//! Result-size and radius settings for the nearest-station search.

/// Configuration parameters for station lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    /// Stations farther than this (miles) are dropped. `None` disables the cutoff.
    pub radius_miles: Option<f64>,

    /// Number of stations shown for a fresh location.
    pub initial_limit: usize,

    /// Number of stations shown after "show more".
    pub expanded_limit: usize,
}

impl LocatorConfig {
    pub fn new(radius_miles: Option<f64>, initial_limit: usize, expanded_limit: usize) -> Self {
        Self {
            radius_miles,
            initial_limit,
            expanded_limit,
        }
    }

    /// The result cap for the requested disclosure tier.
    pub fn limit(&self, expanded: bool) -> usize {
        if expanded {
            self.expanded_limit
        } else {
            self.initial_limit
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            radius_miles: Some(25.0),
            initial_limit: 4,
            expanded_limit: 8,
        }
    }
}
