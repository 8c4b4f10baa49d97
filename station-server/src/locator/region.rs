//! Service-region classification and out-of-region guidance.

use crate::domain::{BIG_ISLAND, Coordinate, HAWAIIAN_ISLANDS, Island};

/// Where a coordinate sits relative to the served island.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    /// On the Big Island; stations can be listed.
    Served,
    /// In the island chain but on a different island (best guess).
    WrongIsland(Island),
    /// Outside the Hawaiian Islands entirely.
    OutsideArea,
}

/// Classify a coordinate against the narrow and wide regions.
pub fn classify_region(coordinate: &Coordinate) -> RegionStatus {
    if BIG_ISLAND.contains_coordinate(coordinate) {
        RegionStatus::Served
    } else if HAWAIIAN_ISLANDS.contains_coordinate(coordinate) {
        RegionStatus::WrongIsland(guess_island(coordinate.lat(), coordinate.lng()))
    } else {
        RegionStatus::OutsideArea
    }
}

/// Rough guess at which other island a point is on.
///
/// The boxes overlap; the first matching rule wins, so the order matters.
/// This is not a reverse geocode.
pub fn guess_island(lat: f64, lng: f64) -> Island {
    if lat > 21.2 && lng > -158.3 {
        Island::Oahu
    } else if lat > 20.5 && lng < -156.7 {
        Island::Maui
    } else if lat > 21.8 {
        Island::Kauai
    } else if lat > 21.0 && lng < -156.8 {
        Island::MolokaiOrLanai
    } else {
        Island::Other
    }
}

impl RegionStatus {
    pub fn is_served(&self) -> bool {
        matches!(self, RegionStatus::Served)
    }

    /// The neighbouring island, when the point is in the chain but off-island.
    pub fn island(&self) -> Option<Island> {
        match self {
            RegionStatus::WrongIsland(island) => Some(*island),
            _ => None,
        }
    }

    /// Guidance shown to the user, or `None` when the point is served.
    pub fn message(&self) -> Option<String> {
        match self {
            RegionStatus::Served => None,
            RegionStatus::OutsideArea => Some(
                "This safety check finder is designed for Hawaii's Big Island residents and \
                 visitors. It appears you're currently outside of the Hawaiian Islands. When you \
                 visit the Big Island, this tool will help you find the nearest safety check \
                 stations."
                    .to_string(),
            ),
            RegionStatus::WrongIsland(island) => Some(format!(
                "You appear to be on {island} (this is an approximate guess). This safety check \
                 finder is specifically designed for Hawaii's Big Island (Island of Hawaii). When \
                 you travel to the Big Island, this tool will help you find the nearest safety \
                 check stations."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn big_island_points_are_served() {
        assert_eq!(classify_region(&coord(19.7123553, -155.0768369)), RegionStatus::Served);
        assert_eq!(classify_region(&coord(19.6462868, -156.0011803)), RegionStatus::Served);
        assert_eq!(
            classify_region(&coord(BIG_ISLAND.north, BIG_ISLAND.west)),
            RegionStatus::Served
        );
    }

    #[test]
    fn other_islands_are_identified() {
        // Honolulu
        assert_eq!(
            classify_region(&coord(21.3069, -157.8583)),
            RegionStatus::WrongIsland(Island::Oahu)
        );
        // Kahului falls east of the coarse Maui box
        assert_eq!(
            classify_region(&coord(20.8893, -156.4729)),
            RegionStatus::WrongIsland(Island::Other)
        );
        // Lihue is caught by the Maui rule before the Kauai rule
        assert_eq!(
            classify_region(&coord(21.9811, -159.3711)),
            RegionStatus::WrongIsland(Island::Maui)
        );
    }

    #[test]
    fn outside_the_chain() {
        assert_eq!(classify_region(&coord(37.7749, -122.4194)), RegionStatus::OutsideArea);
        assert_eq!(classify_region(&coord(0.0, 0.0)), RegionStatus::OutsideArea);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Satisfies rules 2 and 4; rule 2 is listed first.
        assert_eq!(guess_island(21.5, -158.5), Island::Maui);
        // Satisfies rules 1, 3 and 4; rule 1 is listed first.
        assert_eq!(guess_island(21.9, -157.0), Island::Oahu);
    }

    #[test]
    fn later_rules_are_shadowed() {
        // North of 21.8 always satisfies rule 1 or rule 2 first.
        assert_eq!(guess_island(22.0, -156.0), Island::Oahu);
        assert_eq!(guess_island(22.0, -159.5), Island::Maui);
        // Rule 4's box sits inside rule 2's.
        assert_eq!(guess_island(21.1, -157.0), Island::Maui);
    }

    #[test]
    fn falls_through_to_other() {
        assert_eq!(guess_island(20.4, -157.0), Island::Other);
        assert_eq!(guess_island(20.9, -156.5), Island::Other);
    }

    #[test]
    fn boundaries_are_strict() {
        assert_ne!(guess_island(21.2, -158.0), Island::Oahu);
        assert_ne!(guess_island(21.3, -158.3), Island::Oahu);
        assert_ne!(guess_island(20.5, -157.0), Island::Maui);
    }

    #[test]
    fn islands() {
        let wrong = RegionStatus::WrongIsland(Island::Kauai);
        assert_eq!(wrong.island(), Some(Island::Kauai));
        assert_eq!(RegionStatus::Served.island(), None);
        assert!(RegionStatus::Served.is_served());
        assert!(!wrong.is_served());
    }

    #[test]
    fn messages() {
        assert!(RegionStatus::Served.message().is_none());

        let outside = RegionStatus::OutsideArea.message().unwrap();
        assert!(outside.contains("outside of the Hawaiian Islands"));

        let wrong = RegionStatus::WrongIsland(Island::MolokaiOrLanai)
            .message()
            .unwrap();
        assert!(wrong.starts_with("You appear to be on Molokai or Lanai"));
        assert!(wrong.contains("approximate"));
    }
}
