//! Disk snapshot of the last successfully fetched dataset.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::StationRecord;
use super::error::StationError;

/// Default snapshot TTL: 24 hours.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Snapshot file contents.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    /// Dataset URL the records came from.
    source_url: String,
    /// Unix timestamp when the snapshot was written.
    written_at_secs: u64,
    records: Vec<StationRecord>,
}

/// Configuration for the station snapshot.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,
    /// How long a snapshot stays usable.
    pub ttl: Duration,
}

impl StationCacheConfig {
    /// Create a config with the given path and the default TTL (24 hours).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        Self::new("stations_cache.json")
    }
}

/// Disk snapshot of dataset records.
#[derive(Debug, Clone)]
pub struct StationCache {
    config: StationCacheConfig,
}

impl StationCache {
    pub fn new(config: StationCacheConfig) -> Self {
        Self { config }
    }

    /// Load records written for `source_url`.
    ///
    /// Returns `None` if the file is missing, unreadable, expired, or was
    /// written for a different dataset.
    pub fn load(&self, source_url: &str) -> Option<Vec<StationRecord>> {
        let contents = std::fs::read_to_string(&self.config.path).ok()?;
        let snapshot: Snapshot = serde_json::from_str(&contents).ok()?;

        if snapshot.source_url != source_url {
            debug!(
                cached = %snapshot.source_url,
                wanted = %source_url,
                "station snapshot is for another dataset"
            );
            return None;
        }

        let age_secs = unix_now().ok()?.saturating_sub(snapshot.written_at_secs);
        if age_secs >= self.config.ttl.as_secs() {
            debug!(age_secs, "station snapshot expired");
            return None;
        }

        Some(snapshot.records)
    }

    /// Write records fetched from `source_url`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, source_url: &str, records: &[StationRecord]) -> Result<(), StationError> {
        let snapshot = Snapshot {
            source_url: source_url.to_string(),
            written_at_secs: unix_now()?,
            records: records.to_vec(),
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StationError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string(&snapshot).map_err(|e| StationError::Cache {
            message: format!("failed to serialize snapshot: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| StationError::Cache {
            message: format!("failed to write snapshot: {}", e),
        })?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

fn unix_now() -> Result<u64, StationError> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| StationError::Cache {
            message: "system time before unix epoch".to_string(),
        })
}
