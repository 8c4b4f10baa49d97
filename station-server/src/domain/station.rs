//! Inspection station types.

use serde::Serialize;

use super::Coordinate;

/// A safety-check station. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub coordinate: Coordinate,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        city: Option<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            city,
            coordinate,
        }
    }

    /// Distance from `origin` to this station, in miles.
    pub fn distance_from(&self, origin: &Coordinate) -> f64 {
        origin.distance_to(&self.coordinate)
    }
}

/// A station annotated with its distance from one query point.
///
/// Built per request and discarded once rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    pub station: Station,
    pub distance_miles: f64,
}

impl RankedStation {
    pub fn new(station: Station, distance_miles: f64) -> Self {
        Self {
            station,
            distance_miles,
        }
    }

    /// Distance rounded to one decimal place, e.g. "12.3 mi".
    pub fn distance_label(&self) -> String {
        format!("{:.1} mi", self.distance_miles)
    }
}
