//! Nearest-station selection.

use crate::domain::{Coordinate, RankedStation, Station};

/// Rank `stations` by distance from `origin`.
///
/// Every station is measured, those beyond `radius_miles` (when given) are
/// dropped, the rest are stable-sorted ascending and capped at `limit`.
/// Stations at equal distance keep their input order. Returns an empty
/// vector when nothing is in range.
pub fn find_nearest(
    stations: &[Station],
    origin: &Coordinate,
    limit: usize,
    radius_miles: Option<f64>,
) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = stations
        .iter()
        .map(|station| (station, station.distance_from(origin)))
        .filter(|(_, miles)| within(*miles, radius_miles))
        .map(|(station, miles)| RankedStation::new(station.clone(), miles))
        .collect();

    // `sort_by` is stable, which gives the input-order tie-break.
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked.truncate(limit);
    ranked
}

/// Number of stations within `radius_miles` of `origin` (all of them if `None`).
pub fn count_within(stations: &[Station], origin: &Coordinate, radius_miles: Option<f64>) -> usize {
    stations
        .iter()
        .filter(|station| within(station.distance_from(origin), radius_miles))
        .count()
}

fn within(miles: f64, radius_miles: Option<f64>) -> bool {
    radius_miles.is_none_or(|radius| miles <= radius)
}
