//! Geocoder error types.

/// Errors from address lookup.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Geocoder returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Nothing to look up
    #[error("address query is empty")]
    EmptyQuery,
}

impl GeocodeError {
    /// Retry prompt shown to the user for any lookup failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeocodeError::EmptyQuery => "Please enter an address or ZIP code.",
            _ => "We couldn't look up that address right now. Please try again.",
        }
    }
}
