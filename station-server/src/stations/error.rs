//! Station dataset error types.

/// Errors that can occur while loading station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset host returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse dataset JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Dataset parsed but held no usable stations for the county
    #[error("no stations with coordinates for county {county}")]
    NoStations { county: String },

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error 404: Not Found");

        let err = StationError::NoStations {
            county: "Hawaii".into(),
        };
        assert_eq!(err.to_string(), "no stations with coordinates for county Hawaii");
    }
}
