//! Outbound links for a station card.
//!
//! Addresses open in Google Maps search rather than a pinned coordinate,
//! so the user lands on the business listing.

/// Generate a Google Maps search URL for an address.
///
/// # Example
///
/// ```ignore
/// let url = maps_search_url("192 Kinoole Street., Hilo HI 96720");
/// // Returns: "https://www.google.com/maps/search/?api=1&query=192%20Kinoole%20Street.%2C%20Hilo%20HI%2096720"
/// ```
pub fn maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

/// Generate a `tel:` URL, keeping only the digits of `phone`.
pub fn phone_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_encodes_address() {
        let url = maps_search_url("192 Kinoole Street., Hilo HI 96720");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=192%20Kinoole%20Street.%2C%20Hilo%20HI%2096720"
        );
    }

    #[test]
    fn maps_url_escapes_reserved_characters() {
        let url = maps_search_url("Lex Brodie's & Sons #2");
        assert!(url.ends_with("query=Lex%20Brodie%27s%20%26%20Sons%20%232"));
    }

    #[test]
    fn phone_url_strips_punctuation() {
        assert_eq!(phone_url("(808) 985-8473"), "tel:8089858473");
        assert_eq!(phone_url("808.329.4520 ext"), "tel:8083294520");
    }

    #[test]
    fn phone_url_without_digits() {
        assert_eq!(phone_url("n/a"), "tel:");
    }
}
