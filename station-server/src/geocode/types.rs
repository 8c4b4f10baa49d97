//! Geocoder request/response types.

use serde::Deserialize;

use crate::domain::Coordinate;

/// A resolved address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub coordinate: Coordinate,
    /// Address as formatted by the geocoder.
    pub display_address: String,
}

impl GeocodeMatch {
    pub fn new(coordinate: Coordinate, display_address: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_address: display_address.into(),
        }
    }
}

/// One place in a Nominatim-style `/search` response.
///
/// Nominatim sends coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl PlaceDto {
    /// Parse into a match, or `None` if the coordinates are unusable.
    pub fn to_match(&self) -> Option<GeocodeMatch> {
        let lat = self.lat.trim().parse().ok()?;
        let lng = self.lon.trim().parse().ok()?;
        let coordinate = Coordinate::new(lat, lng).ok()?;
        Some(GeocodeMatch::new(coordinate, self.display_name.clone()))
    }
}
