//! Station dataset loading.
//!
//! Fetches the statewide inspection-station dataset, keeps the served
//! county's rows, snapshots them to disk, and falls back to an embedded
//! list when the dataset is unreachable.

mod cache;
mod catalog;
mod client;
mod error;
mod fallback;

pub use cache::{StationCache, StationCacheConfig};
pub use catalog::{CatalogSource, StationCatalog};
pub use client::{SERVED_COUNTY, StationClient, StationClientConfig, StationRecord, stations_in_county};
pub use error::StationError;
pub use fallback::{fallback_records, fallback_stations};
