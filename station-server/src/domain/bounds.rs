//! Rectangular latitude/longitude regions.

use serde::Serialize;

use super::Coordinate;

/// An axis-aligned box in degrees. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// The Island of Hawaii, from South Point to Upolu Point.
pub const BIG_ISLAND: BoundingBox = BoundingBox::new(20.3, 18.9, -154.8, -156.1);

/// The main Hawaiian island chain, Kauai to the Big Island.
pub const HAWAIIAN_ISLANDS: BoundingBox = BoundingBox::new(22.3, 18.8, -154.7, -160.3);

impl BoundingBox {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Whether `lat` is in `[south, north]` and `lng` is in `[west, east]`.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    pub fn contains_coordinate(&self, coordinate: &Coordinate) -> bool {
        self.contains(coordinate.lat(), coordinate.lng())
    }

    /// Whether `other` lies entirely within this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.north, other.east) && self.contains(other.south, other.west)
    }
}
