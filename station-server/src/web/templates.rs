//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{LookupResponse, LookupStatus, NearbyStationResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the locate button and address form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_count: usize,
    /// Shown when running on the embedded station list
    pub degraded: bool,
    /// Browser geolocation timeout
    pub geo_timeout_ms: u128,
    /// Oldest cached fix the browser may return
    pub geo_max_age_ms: u128,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Lookup results fragment.
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub is_served: bool,
    /// Empty when there is nothing to say
    pub message: String,
    /// Empty unless the lookup was by address
    pub display_address: String,
    pub stations: Vec<StationCardView>,
    /// Fragment URL for the expanded tier; empty when there is no more
    pub more_url: String,
}

impl StationListTemplate {
    /// Build from a lookup response. `more_url` is used only when the
    /// response says more stations are available.
    pub fn from_response(response: &LookupResponse, more_url: String) -> Self {
        Self {
            is_served: response.status == LookupStatus::Served,
            message: response.message.clone().unwrap_or_default(),
            display_address: response.display_address.clone().unwrap_or_default(),
            stations: response
                .stations
                .iter()
                .map(StationCardView::from_result)
                .collect(),
            more_url: if response.has_more {
                more_url
            } else {
                String::new()
            },
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One station card.
#[derive(Debug, Clone)]
pub struct StationCardView {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_label: String,
    pub maps_url: String,
    pub phone_url: String,
}

impl StationCardView {
    pub fn from_result(result: &NearbyStationResult) -> Self {
        Self {
            name: result.station.name.clone(),
            address: result.station.address.clone(),
            phone: result.station.phone.clone(),
            distance_label: result.distance_label.clone(),
            maps_url: result.station.maps_url.clone(),
            phone_url: result.station.phone_url.clone(),
        }
    }
}
