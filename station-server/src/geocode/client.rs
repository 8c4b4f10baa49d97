//! HTTP client for a Nominatim-compatible geocoder.

use futures::future::{BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use super::Geocoder;
use super::error::GeocodeError;
use super::types::{GeocodeMatch, PlaceDto};

/// Default geocoder: the public OpenStreetMap Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying user agent.
const DEFAULT_USER_AGENT: &str = concat!("station-finder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Value for the User-Agent header
    pub user_agent: String,
    /// ISO country codes to restrict results to, comma separated
    pub country_codes: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            country_codes: Some("us".to_string()),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Geocoder backed by an HTTP `/search` endpoint.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    http: reqwest::Client,
    base_url: String,
    country_codes: Option<String>,
}

impl HttpGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
            status: 0,
            message: "Invalid user agent".to_string(),
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_codes: config.country_codes,
        })
    }

    /// Look up `query` and return the first match.
    pub async fn search(&self, query: &str) -> Result<Option<GeocodeMatch>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let mut params = vec![("q", query), ("format", "json"), ("limit", "1")];
        if let Some(codes) = &self.country_codes {
            params.push(("countrycodes", codes.as_str()));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let first = first_match(&body)?;

        debug!(query, found = first.is_some(), "geocoder responded");
        Ok(first)
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<GeocodeMatch>, GeocodeError>> {
        self.search(query).boxed()
    }
}

/// First usable place in a response body.
fn first_match(body: &str) -> Result<Option<GeocodeMatch>, GeocodeError> {
    let places: Vec<PlaceDto> = serde_json::from_str(body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })?;

    Ok(places.iter().find_map(PlaceDto::to_match))
}
