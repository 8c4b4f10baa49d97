//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::Geocoder;
use crate::geolocation::GeolocationConfig;
use crate::locator::LocatorConfig;
use crate::stations::StationCatalog;

/// Appended to address queries that don't already name the state.
pub const DEFAULT_REGION_QUALIFIER: &str = "Hawaii";

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station list, refreshed in the background
    pub catalog: StationCatalog,

    /// Address lookup
    pub geocoder: Arc<dyn Geocoder>,

    /// Radius and result-tier settings
    pub locator: Arc<LocatorConfig>,

    /// Device position settings
    pub geolocation: Arc<GeolocationConfig>,

    /// Region appended to address queries
    pub region_qualifier: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: StationCatalog,
        geocoder: impl Geocoder + 'static,
        locator: LocatorConfig,
        geolocation: GeolocationConfig,
    ) -> Self {
        Self {
            catalog,
            geocoder: Arc::new(geocoder),
            locator: Arc::new(locator),
            geolocation: Arc::new(geolocation),
            region_qualifier: Arc::from(DEFAULT_REGION_QUALIFIER),
        }
    }

    pub fn with_region_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.region_qualifier = Arc::from(qualifier.into());
        self
    }
}
