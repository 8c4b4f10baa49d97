//! Per-request lookup context.
//!
//! A `Session` carries the station snapshot, the user's position and how
//! many results have been disclosed, so each step receives its inputs
//! explicitly instead of reading shared globals.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Coordinate, RankedStation, Station};

use super::config::LocatorConfig;
use super::nearest::{count_within, find_nearest};
use super::region::{RegionStatus, classify_region};

/// Stations found near a served location.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStations {
    /// Nearest stations, closest first.
    pub stations: Vec<RankedStation>,

    /// More stations are within the radius than are shown, and the
    /// expanded tier has not been requested yet.
    pub has_more: bool,
}

/// Result of looking up stations for a location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// At least one station is within range.
    Nearby(NearbyStations),

    /// On the island, but no station within the radius.
    NoneWithinRadius,

    /// Not on the served island. Carries the classification for messaging.
    OutOfRegion(RegionStatus),
}

impl LocateOutcome {
    /// Ranked stations, empty for the non-listing outcomes.
    pub fn stations(&self) -> &[RankedStation] {
        match self {
            LocateOutcome::Nearby(nearby) => &nearby.stations,
            _ => &[],
        }
    }
}

/// Lookup context for one user's location flow.
#[derive(Debug, Clone)]
pub struct Session {
    stations: Arc<Vec<Station>>,
    config: Arc<LocatorConfig>,
    origin: Option<Coordinate>,
    shown: usize,
}

impl Session {
    pub fn new(stations: Arc<Vec<Station>>, config: Arc<LocatorConfig>) -> Self {
        Self {
            stations,
            config,
            origin: None,
            shown: 0,
        }
    }

    /// The last location passed to `locate`.
    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    /// Number of stations disclosed by the last lookup.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Establish a new location and return the initial result tier.
    ///
    /// Replaces any earlier location and resets the disclosure count.
    pub fn locate(&mut self, origin: Coordinate) -> LocateOutcome {
        self.origin = Some(origin);
        self.shown = 0;

        let region = classify_region(&origin);
        if !region.is_served() {
            debug!(%origin, ?region, "location outside served region");
            return LocateOutcome::OutOfRegion(region);
        }

        self.disclose(origin, self.config.limit(false))
    }

    /// Expand to the second tier for the current location.
    ///
    /// Returns `None` if no location has been established or it is
    /// outside the served region.
    pub fn show_more(&mut self) -> Option<LocateOutcome> {
        let origin = self.origin?;
        if !classify_region(&origin).is_served() {
            return None;
        }

        Some(self.disclose(origin, self.config.limit(true)))
    }

    fn disclose(&mut self, origin: Coordinate, limit: usize) -> LocateOutcome {
        let radius = self.config.radius_miles;
        let stations = find_nearest(&self.stations, &origin, limit, radius);

        if stations.is_empty() {
            debug!(%origin, ?radius, "no stations within radius");
            return LocateOutcome::NoneWithinRadius;
        }

        self.shown = limit;
        let has_more = limit < self.config.expanded_limit
            && count_within(&self.stations, &origin, radius) > stations.len();

        debug!(%origin, shown = stations.len(), has_more, "stations disclosed");
        LocateOutcome::Nearby(NearbyStations { stations, has_more })
    }
}
