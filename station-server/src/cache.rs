//! Caching layer for geocoder lookups.
//!
//! Address text repeats a lot (ZIP codes, town names), and public
//! geocoders rate-limit aggressively. Only successful matches are cached;
//! misses and failures go back to the geocoder next time.

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::geocode::{GeocodeError, GeocodeMatch, Geocoder};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Geocoder with an in-memory cache in front of it.
pub struct CachedGeocoder<G> {
    inner: G,
    matches: MokaCache<String, GeocodeMatch>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, config: &GeocodeCacheConfig) -> Self {
        let matches = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, matches }
    }

    async fn lookup(&self, query: &str) -> Result<Option<GeocodeMatch>, GeocodeError> {
        let key = cache_key(query);

        if let Some(cached) = self.matches.get(&key).await {
            debug!(query = %key, "geocode cache hit");
            return Ok(Some(cached));
        }

        let found = self.inner.geocode(query).await?;
        if let Some(found) = &found {
            self.matches.insert(key, found.clone()).await;
        }

        Ok(found)
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    fn geocode<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<GeocodeMatch>, GeocodeError>> {
        self.lookup(query).boxed()
    }
}

/// Lowercased, whitespace-collapsed query text.
fn cache_key(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
