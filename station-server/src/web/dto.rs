//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Island, RankedStation, Station};
use crate::locator::{LocateOutcome, RegionStatus};
use crate::stations::CatalogSource;

use super::links::{maps_search_url, phone_url};

/// Device position reported by the browser.
///
/// Either `lat`/`lng` are present, or `error` names why the browser could
/// not produce a fix.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    /// Accuracy radius in metres
    pub accuracy: Option<f64>,

    /// Browser geolocation failure: a name such as "permission_denied"
    /// or a raw numeric code
    pub error: Option<String>,

    /// Show the second tier of results
    #[serde(default)]
    pub expanded: bool,
}

/// Request to look up stations near an address.
#[derive(Debug, Deserialize)]
pub struct AddressSearchRequest {
    /// Street address, town or ZIP code
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub expanded: bool,
}

/// Request for map markers around a point.
#[derive(Debug, Deserialize)]
pub struct MapRequest {
    pub lat: f64,
    pub lng: f64,

    #[serde(default)]
    pub expanded: bool,
}

/// A station in the full catalog listing.
#[derive(Debug, Serialize)]
pub struct StationInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub maps_url: String,
    pub phone_url: String,
}

impl StationInfo {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            address: station.address.clone(),
            phone: station.phone.clone(),
            city: station.city.clone(),
            lat: station.coordinate.lat(),
            lng: station.coordinate.lng(),
            maps_url: maps_search_url(&station.address),
            phone_url: phone_url(&station.phone),
        }
    }
}

/// Response listing every station in the catalog.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Where the list came from
    pub source: CatalogSource,
    pub count: usize,
    pub stations: Vec<StationInfo>,
}

/// A station in lookup results, with its distance from the query point.
#[derive(Debug, Serialize)]
pub struct NearbyStationResult {
    #[serde(flatten)]
    pub station: StationInfo,

    pub distance_miles: f64,

    /// Distance for display, e.g. "12.3 mi"
    pub distance_label: String,
}

impl NearbyStationResult {
    pub fn from_ranked(ranked: &RankedStation) -> Self {
        Self {
            station: StationInfo::from_station(&ranked.station),
            distance_miles: ranked.distance_miles,
            distance_label: ranked.distance_label(),
        }
    }
}

/// Outcome tag for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// Stations were found
    Served,
    /// On another Hawaiian island
    WrongIsland,
    /// Outside the Hawaiian Islands
    OutsideArea,
    /// On the island (or address unknown) but nothing to show
    NoneFound,
}

/// Response for a nearest-station or address lookup.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub status: LookupStatus,

    /// Guidance for the user; absent when stations were found
    pub message: Option<String>,

    /// Best guess at the island, for `wrong_island`
    pub island: Option<Island>,

    /// Geocoded address, for address searches
    pub display_address: Option<String>,

    pub stations: Vec<NearbyStationResult>,

    /// More stations are available via `expanded=true`
    pub has_more: bool,
}

impl LookupResponse {
    /// Build from a locator outcome. `radius_miles` is only used for the
    /// empty-result message.
    pub fn from_outcome(outcome: &LocateOutcome, radius_miles: Option<f64>) -> Self {
        match outcome {
            LocateOutcome::Nearby(nearby) => Self {
                status: LookupStatus::Served,
                message: None,
                island: None,
                display_address: None,
                stations: nearby
                    .stations
                    .iter()
                    .map(NearbyStationResult::from_ranked)
                    .collect(),
                has_more: nearby.has_more,
            },
            LocateOutcome::NoneWithinRadius => Self::none_found(none_within_message(radius_miles)),
            LocateOutcome::OutOfRegion(region) => Self::out_of_region(region),
        }
    }

    fn out_of_region(region: &RegionStatus) -> Self {
        let status = match region {
            RegionStatus::WrongIsland(_) => LookupStatus::WrongIsland,
            _ => LookupStatus::OutsideArea,
        };

        Self {
            status,
            message: region.message(),
            island: region.island(),
            display_address: None,
            stations: Vec::new(),
            has_more: false,
        }
    }

    /// An empty result carrying `message`.
    pub fn none_found(message: impl Into<String>) -> Self {
        Self {
            status: LookupStatus::NoneFound,
            message: Some(message.into()),
            island: None,
            display_address: None,
            stations: Vec::new(),
            has_more: false,
        }
    }

    /// The geocoder answered but had no match for the address.
    pub fn unknown_address() -> Self {
        Self::none_found("We couldn't find that address. Please check it and try again.")
    }

    pub fn with_display_address(mut self, address: impl Into<String>) -> Self {
        self.display_address = Some(address.into());
        self
    }
}

fn none_within_message(radius_miles: Option<f64>) -> String {
    match radius_miles {
        Some(radius) => format!(
            "No safety check stations found within {radius} miles of this location."
        ),
        None => "No safety check stations found near this location.".to_string(),
    }
}

/// A point on the map.
#[derive(Debug, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A station marker on the map.
#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_label: String,
}

impl MapMarker {
    pub fn from_ranked(ranked: &RankedStation) -> Self {
        Self {
            name: ranked.station.name.clone(),
            address: ranked.station.address.clone(),
            lat: ranked.station.coordinate.lat(),
            lng: ranked.station.coordinate.lng(),
            distance_label: ranked.distance_label(),
        }
    }
}

/// Map view: the query point plus markers for the shown stations.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub status: LookupStatus,
    pub message: Option<String>,
    pub center: MapPoint,
    pub markers: Vec<MapMarker>,
    pub has_more: bool,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::locator::NearbyStations;

    fn ranked(name: &str, miles: f64) -> RankedStation {
        let station = Station::new(
            name,
            "1095 Kilauea Avenue., Hilo HI 96720",
            "(808) 985-8473",
            Some("Hilo".to_string()),
            Coordinate::new(19.7123553, -155.0768369).unwrap(),
        );
        RankedStation::new(station, miles)
    }

    #[test]
    fn nearby_result_carries_links() {
        let result = NearbyStationResult::from_ranked(&ranked("Lex Brodie's", 12.345));
        assert_eq!(result.distance_label, "12.3 mi");
        assert_eq!(result.station.phone_url, "tel:8089858473");
        assert!(result.station.maps_url.contains("1095%20Kilauea%20Avenue."));
    }

    #[test]
    fn nearby_result_serializes_flat() {
        let result = NearbyStationResult::from_ranked(&ranked("Lex Brodie's", 0.0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "Lex Brodie's");
        assert_eq!(json["distance_label"], "0.0 mi");
        assert_eq!(json["lat"], 19.7123553);
    }

    #[test]
    fn served_outcome() {
        let outcome = LocateOutcome::Nearby(NearbyStations {
            stations: vec![ranked("A", 1.0), ranked("B", 2.0)],
            has_more: true,
        });
        let response = LookupResponse::from_outcome(&outcome, Some(25.0));
        assert_eq!(response.status, LookupStatus::Served);
        assert!(response.message.is_none());
        assert_eq!(response.stations.len(), 2);
        assert!(response.has_more);
    }

    #[test]
    fn empty_outcome_mentions_radius() {
        let response = LookupResponse::from_outcome(&LocateOutcome::NoneWithinRadius, Some(25.0));
        assert_eq!(response.status, LookupStatus::NoneFound);
        assert_eq!(
            response.message.as_deref(),
            Some("No safety check stations found within 25 miles of this location.")
        );
    }

    #[test]
    fn wrong_island_outcome() {
        let outcome = LocateOutcome::OutOfRegion(RegionStatus::WrongIsland(Island::Oahu));
        let response = LookupResponse::from_outcome(&outcome, Some(25.0));
        assert_eq!(response.status, LookupStatus::WrongIsland);
        assert_eq!(response.island, Some(Island::Oahu));
        assert!(response.message.unwrap().contains("Oahu"));

        let json = serde_json::to_value(LookupResponse::from_outcome(&outcome, None)).unwrap();
        assert_eq!(json["status"], "wrong_island");
        assert_eq!(json["island"], "oahu");
    }

    #[test]
    fn outside_area_outcome() {
        let outcome = LocateOutcome::OutOfRegion(RegionStatus::OutsideArea);
        let response = LookupResponse::from_outcome(&outcome, Some(25.0));
        assert_eq!(response.status, LookupStatus::OutsideArea);
        assert!(response.island.is_none());
        assert!(response.message.unwrap().contains("outside of the Hawaiian Islands"));
    }

    #[test]
    fn unknown_address_response() {
        let response = LookupResponse::unknown_address().with_display_address("Atlantis");
        assert_eq!(response.status, LookupStatus::NoneFound);
        assert_eq!(response.display_address.as_deref(), Some("Atlantis"));
    }
}
