//! Embedded station list used when the dataset cannot be loaded.

use crate::domain::Station;

use super::client::{SERVED_COUNTY, StationRecord, stations_in_county};

/// (name, address, phone, city, latitude, longitude)
const FALLBACK: [(&str, &str, &str, &str, f64, f64); 4] = [
    (
        "Lex Brodie's",
        "1095 Kilauea Avenue., Hilo HI 96720",
        "(808) 985-8473",
        "Hilo",
        19.7123553,
        -155.0768369,
    ),
    (
        "Big Island Toyota Kona",
        "74-5504 Kaiwi Street., Kailua Kona HI 96740",
        "(808) 329-4520",
        "Kailua Kona",
        19.6462868,
        -156.0011803,
    ),
    (
        "Downtown Texaco",
        "192 Kinoole Street., Hilo HI 96720",
        "(808) 935-8613",
        "Hilo",
        19.7235342,
        -155.0883261,
    ),
    (
        "Kona Dodge",
        "76-6353 Kuakini Highway, Kailua Kona HI 96740",
        "(808) 329-4408",
        "Kailua Kona",
        19.6098508,
        -155.9647437,
    ),
];

/// The embedded rows, in dataset form.
pub fn fallback_records() -> Vec<StationRecord> {
    FALLBACK
        .iter()
        .map(|&(name, address, phone, city, lat, lng)| StationRecord {
            county: SERVED_COUNTY.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            city: Some(city.to_string()),
            latitude: Some(lat),
            longitude: Some(lng),
        })
        .collect()
}

/// The embedded rows as stations.
pub fn fallback_stations() -> Vec<Station> {
    stations_in_county(&fallback_records(), SERVED_COUNTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BIG_ISLAND;

    #[test]
    fn all_rows_convert() {
        let stations = fallback_stations();
        assert_eq!(stations.len(), FALLBACK.len());
        assert_eq!(stations[0].name, "Lex Brodie's");
        assert_eq!(stations[3].name, "Kona Dodge");
    }

    #[test]
    fn all_rows_on_big_island() {
        for station in fallback_stations() {
            assert!(
                BIG_ISLAND.contains_coordinate(&station.coordinate),
                "{} is off-island",
                station.name
            );
        }
    }
}
