//! Station dataset client.
//!
//! The dataset is a JSON array covering every county in the state. Only
//! rows for the served county with both coordinates become `Station`s.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Coordinate, Station};

use super::error::StationError;

/// County whose stations are listed; dataset rows are filtered to it.
pub const SERVED_COUNTY: &str = "Hawaii";

/// One row of the statewide dataset, with the publisher's column names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "Station Name")]
    pub name: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<f64>,
}

impl StationRecord {
    /// Convert to a `Station`, or `None` if the coordinates are missing or invalid.
    pub fn to_station(&self) -> Option<Station> {
        let coordinate = Coordinate::new(self.latitude?, self.longitude?).ok()?;
        let city = self.city.clone().filter(|c| !c.trim().is_empty());
        Some(Station::new(
            self.name.clone(),
            self.address.clone(),
            self.phone.clone(),
            city,
            coordinate,
        ))
    }
}

/// Keep the rows for `county` that have usable coordinates.
pub fn stations_in_county(records: &[StationRecord], county: &str) -> Vec<Station> {
    records
        .iter()
        .filter(|r| r.county == county)
        .filter_map(StationRecord::to_station)
        .collect()
}

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Full URL of the JSON dataset
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config for the dataset at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the station dataset.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The dataset URL this client reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every record in the dataset.
    pub async fn fetch_all(&self) -> Result<Vec<StationRecord>, StationError> {
        debug!(url = %self.url, "fetching station dataset");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_records(&body)
    }
}

fn parse_records(body: &str) -> Result<Vec<StationRecord>, StationError> {
    serde_json::from_str(body).map_err(|e| StationError::Json {
        message: e.to_string(),
    })
}
