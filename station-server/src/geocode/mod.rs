//! Address lookup.
//!
//! Free-text addresses and ZIP codes are resolved to coordinates by an
//! external geocoder. Queries are biased toward the served region by
//! appending a region qualifier (e.g. ", Hawaii") when the text does not
//! already mention it.

mod client;
mod error;
mod mock;
mod types;

pub use client::{GeocoderConfig, HttpGeocoder};
pub use error::GeocodeError;
pub use mock::MockGeocoder;
pub use types::{GeocodeMatch, PlaceDto};

use futures::future::BoxFuture;
use tracing::info;

/// Anything that can turn address text into a coordinate.
///
/// `Ok(None)` means the geocoder answered but found nothing.
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<GeocodeMatch>, GeocodeError>>;
}

/// Append `qualifier` to `query` unless it already mentions it.
///
/// The check is case-insensitive.
pub fn qualify_query(query: &str, qualifier: &str) -> String {
    let query = query.trim();
    let qualifier = qualifier.trim();

    if qualifier.is_empty() || query.to_lowercase().contains(&qualifier.to_lowercase()) {
        query.to_string()
    } else {
        format!("{query}, {qualifier}")
    }
}

/// Validate, qualify and look up an address.
pub async fn resolve_address(
    geocoder: &dyn Geocoder,
    query: &str,
    qualifier: &str,
) -> Result<Option<GeocodeMatch>, GeocodeError> {
    if query.trim().is_empty() {
        return Err(GeocodeError::EmptyQuery);
    }

    let qualified = qualify_query(query, qualifier);
    info!(query = %qualified, "geocoding address");
    geocoder.geocode(&qualified).await
}
