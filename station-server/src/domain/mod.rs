//! Domain types for the station finder.
//!
//! Coordinates, regions and stations are plain values. `Coordinate`
//! enforces its range at construction time, so code that receives one can
//! trust it.

mod bounds;
mod coordinate;
mod island;
mod station;

pub use bounds::{BIG_ISLAND, BoundingBox, HAWAIIAN_ISLANDS};
pub use coordinate::{Coordinate, EARTH_RADIUS_MILES, InvalidCoordinate, distance};
pub use island::Island;
pub use station::{RankedStation, Station};
