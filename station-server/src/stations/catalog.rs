//! Shared in-memory station list.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::domain::Station;

use super::cache::StationCache;
use super::client::{StationClient, stations_in_county};
use super::error::StationError;
use super::fallback::fallback_stations;

/// Where the current station list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Freshly fetched from the dataset URL.
    Dataset,
    /// Read from the disk snapshot of an earlier fetch.
    Cache,
    /// The embedded list; the dataset could not be loaded.
    Fallback,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CatalogSource::Dataset => "dataset",
            CatalogSource::Cache => "cache",
            CatalogSource::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

struct Loaded {
    stations: Arc<Vec<Station>>,
    source: CatalogSource,
}

/// Thread-safe station list with background refresh.
///
/// Starts out holding the embedded fallback list, so lookups work before
/// the first refresh completes and whenever the dataset is unreachable.
#[derive(Clone)]
pub struct StationCatalog {
    inner: Arc<RwLock<Loaded>>,
    client: Option<StationClient>,
    cache: Option<StationCache>,
    county: Arc<str>,
}

impl StationCatalog {
    /// Create a catalog for `county`, seeded with the fallback list.
    pub fn new(
        client: Option<StationClient>,
        cache: Option<StationCache>,
        county: impl Into<String>,
    ) -> Self {
        let loaded = Loaded {
            stations: Arc::new(fallback_stations()),
            source: CatalogSource::Fallback,
        };

        Self {
            inner: Arc::new(RwLock::new(loaded)),
            client,
            cache,
            county: Arc::from(county.into()),
        }
    }

    /// Create a fixed catalog with no dataset behind it.
    pub fn from_stations(stations: Vec<Station>, source: CatalogSource) -> Self {
        let loaded = Loaded {
            stations: Arc::new(stations),
            source,
        };

        Self {
            inner: Arc::new(RwLock::new(loaded)),
            client: None,
            cache: None,
            county: Arc::from(""),
        }
    }

    /// Cheap snapshot of the current list.
    pub async fn stations(&self) -> Arc<Vec<Station>> {
        self.inner.read().await.stations.clone()
    }

    pub async fn source(&self) -> CatalogSource {
        self.inner.read().await.source
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.stations.len()
    }

    /// Reload the list: fresh snapshot first, then the dataset.
    ///
    /// If neither yields stations, the current list is kept (the fallback
    /// list if nothing was ever loaded). Never fails; returns the source
    /// now in effect.
    pub async fn refresh(&self) -> CatalogSource {
        let Some(client) = &self.client else {
            return self.source().await;
        };

        if let Some(cache) = &self.cache
            && let Some(records) = cache.load(client.url())
        {
            let stations = stations_in_county(&records, &self.county);
            if !stations.is_empty() {
                info!(count = stations.len(), path = %cache.path().display(), "loaded stations from snapshot");
                return self.replace(stations, CatalogSource::Cache).await;
            }
        }

        match self.fetch(client).await {
            Ok(stations) => {
                info!(count = stations.len(), "loaded stations from dataset");
                self.replace(stations, CatalogSource::Dataset).await
            }
            Err(e) => {
                let current = self.source().await;
                warn!(error = %e, keeping = %current, "station dataset unavailable");
                current
            }
        }
    }

    /// Refresh every `period` on a background task.
    ///
    /// The first refresh happens one period from now; call `refresh`
    /// directly for an initial load.
    pub fn spawn_periodic_refresh(&self, period: Duration) -> JoinHandle<()> {
        let catalog = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                let source = catalog.refresh().await;
                let count = catalog.len().await;
                info!(count, %source, "refreshed stations");
            }
        })
    }

    async fn fetch(&self, client: &StationClient) -> Result<Vec<Station>, StationError> {
        let records = client.fetch_all().await?;
        let stations = stations_in_county(&records, &self.county);

        if stations.is_empty() {
            return Err(StationError::NoStations {
                county: self.county.to_string(),
            });
        }

        if let Some(cache) = &self.cache
            && let Err(e) = cache.save(client.url(), &records)
        {
            warn!(error = %e, "failed to write station snapshot");
        }

        Ok(stations)
    }

    async fn replace(&self, stations: Vec<Station>, source: CatalogSource) -> CatalogSource {
        let mut guard = self.inner.write().await;
        *guard = Loaded {
            stations: Arc::new(stations),
            source,
        };
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::{StationCacheConfig, StationClientConfig, fallback_records};
    use tempfile::tempdir;

    #[tokio::test]
    async fn starts_with_fallback() {
        let catalog = StationCatalog::new(None, None, "Hawaii");
        assert_eq!(catalog.source().await, CatalogSource::Fallback);
        assert_eq!(catalog.len().await, 4);
    }

    #[tokio::test]
    async fn refresh_without_client_keeps_current() {
        let catalog = StationCatalog::new(None, None, "Hawaii");
        assert_eq!(catalog.refresh().await, CatalogSource::Fallback);
        assert_eq!(catalog.len().await, 4);
    }

    #[tokio::test]
    async fn refresh_prefers_fresh_snapshot() {
        let dir = tempdir().unwrap();
        let url = "http://127.0.0.1:9/stations.json";
        let cache = StationCache::new(StationCacheConfig::new(dir.path().join("s.json")));

        let mut records = fallback_records();
        records.truncate(2);
        cache.save(url, &records).unwrap();

        let client = StationClient::new(StationClientConfig::new(url)).unwrap();
        let catalog = StationCatalog::new(Some(client), Some(cache), "Hawaii");

        assert_eq!(catalog.refresh().await, CatalogSource::Cache);
        assert_eq!(catalog.len().await, 2);
    }

    #[tokio::test]
    async fn unreachable_dataset_falls_back() {
        // Port 9 (discard) is not listening; the request fails fast.
        let config = StationClientConfig::new("http://127.0.0.1:9/stations.json").with_timeout(2);
        let client = StationClient::new(config).unwrap();
        let catalog = StationCatalog::new(Some(client), None, "Hawaii");

        assert_eq!(catalog.refresh().await, CatalogSource::Fallback);
        assert_eq!(catalog.len().await, 4);
    }

    #[tokio::test]
    async fn snapshot_for_other_county_is_skipped() {
        let dir = tempdir().unwrap();
        let url = "http://127.0.0.1:9/stations.json";
        let cache = StationCache::new(StationCacheConfig::new(dir.path().join("s.json")));
        cache.save(url, &fallback_records()).unwrap();

        let config = StationClientConfig::new(url).with_timeout(2);
        let client = StationClient::new(config).unwrap();
        let catalog = StationCatalog::new(Some(client), Some(cache), "Maui");

        assert_eq!(catalog.refresh().await, CatalogSource::Fallback);
    }

    #[tokio::test]
    async fn fixed_catalog() {
        let catalog = StationCatalog::from_stations(Vec::new(), CatalogSource::Dataset);
        assert_eq!(catalog.len().await, 0);
        assert_eq!(catalog.source().await, CatalogSource::Dataset);
        assert!(catalog.stations().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_refresh_keeps_running() {
        let catalog = StationCatalog::new(None, None, "Hawaii");
        let handle = catalog.spawn_periodic_refresh(Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(150)).await;
        assert!(!handle.is_finished());
        assert_eq!(catalog.source().await, CatalogSource::Fallback);
        assert_eq!(catalog.len().await, 4);

        handle.abort();
    }

    #[test]
    fn source_display() {
        assert_eq!(CatalogSource::Fallback.to_string(), "fallback");
        let json = serde_json::to_string(&CatalogSource::Cache).unwrap();
        assert_eq!(json, "\"cache\"");
    }
}
