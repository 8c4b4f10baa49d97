//! In-memory geocoder for tests and offline runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::{BoxFuture, FutureExt};

use super::Geocoder;
use super::error::GeocodeError;
use super::types::GeocodeMatch;

/// Geocoder that answers from a fixed table of queries.
///
/// Lookups are case-insensitive and ignore surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    places: HashMap<String, GeocodeMatch>,
    unavailable: bool,
    calls: Arc<AtomicUsize>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `found`.
    pub fn with_place(mut self, query: &str, found: GeocodeMatch) -> Self {
        self.places.insert(normalize(query), found);
        self
    }

    /// Fail every lookup as if the service were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for MockGeocoder {
    fn geocode<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<GeocodeMatch>, GeocodeError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.unavailable {
            Err(GeocodeError::Api {
                status: 503,
                message: "mock geocoder unavailable".to_string(),
            })
        } else {
            Ok(self.places.get(&normalize(query)).cloned())
        };
        futures::future::ready(result).boxed()
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
