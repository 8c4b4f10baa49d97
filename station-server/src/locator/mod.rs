//! Station lookup around a location.
//!
//! This module answers: "Is this point on the Big Island, and if so, which
//! stations are closest?" Results are disclosed in two tiers (4, then 8)
//! within a radius cutoff.

mod config;
mod nearest;
mod region;
mod session;


pub use config::LocatorConfig;
pub use nearest::{count_within, find_nearest};
pub use region::{RegionStatus, classify_region, guess_island};
pub use session::{LocateOutcome, NearbyStations, Session};
