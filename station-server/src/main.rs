use std::net::SocketAddr;
use std::time::Duration;

use station_server::cache::{CachedGeocoder, GeocodeCacheConfig};
use station_server::geocode::{GeocoderConfig, HttpGeocoder};
use station_server::geolocation::GeolocationConfig;
use station_server::locator::LocatorConfig;
use station_server::stations::{
    SERVED_COUNTY, StationCache, StationCacheConfig, StationCatalog, StationClient,
    StationClientConfig,
};
use station_server::web::{AppState, DEFAULT_REGION_QUALIFIER, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How often to refresh the station list (24 hours).
const STATION_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("station_server=info")),
        )
        .init();

    // Station dataset is optional; without it we serve the embedded list
    let station_client = match std::env::var("STATION_DATASET_URL") {
        Ok(url) => Some(
            StationClient::new(StationClientConfig::new(url))
                .expect("Failed to create station client"),
        ),
        Err(_) => {
            warn!("STATION_DATASET_URL not set, using the embedded station list");
            None
        }
    };

    let cache_path = env_or("STATION_CACHE_PATH", "stations_cache.json");
    let station_cache = StationCache::new(StationCacheConfig::new(cache_path));

    let catalog = StationCatalog::new(station_client, Some(station_cache), SERVED_COUNTY);
    let source = catalog.refresh().await;
    let count = catalog.len().await;
    info!(count, %source, "stations loaded");

    // Refresh the station list daily in the background
    catalog.spawn_periodic_refresh(STATION_REFRESH_INTERVAL);

    // Geocoder with an in-memory cache in front
    let mut geocoder_config = GeocoderConfig::new();
    if let Ok(url) = std::env::var("GEOCODER_BASE_URL") {
        geocoder_config = geocoder_config.with_base_url(url);
    }
    let geocoder = HttpGeocoder::new(geocoder_config).expect("Failed to create geocoder");
    let geocoder = CachedGeocoder::new(geocoder, &GeocodeCacheConfig::default());

    let state = AppState::new(
        catalog,
        geocoder,
        LocatorConfig::default(),
        GeolocationConfig::default(),
    )
    .with_region_qualifier(env_or("GEOCODER_REGION_QUALIFIER", DEFAULT_REGION_QUALIFIER));

    let static_dir = env_or("STATIC_DIR", "static");
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = env_or("STATION_FINDER_ADDR", "127.0.0.1:3000")
        .parse()
        .expect("STATION_FINDER_ADDR must be a socket address");
    info!("Station finder listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET /health                 - Health check");
    info!("  GET /api/stations           - All stations");
    info!("  GET /api/stations/nearest   - Nearest to a device position");
    info!("  GET /api/stations/search    - Nearest to an address");
    info!("  GET /api/map                - Map center and markers");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
