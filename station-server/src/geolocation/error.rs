//! Device position error types.

/// Why a device position could not be obtained.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The user refused location access
    #[error("Unable to retrieve your location. Please allow location access in your browser settings.")]
    PermissionDenied,

    /// The device could not determine a position
    #[error(
        "Unable to retrieve your location. Location information is unavailable. Please check your GPS/location services."
    )]
    Unavailable,

    /// No fix arrived before the acquisition timeout
    #[error("Unable to retrieve your location. Location request timed out. Please try again.")]
    Timeout,

    /// The client has no geolocation capability
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,

    /// The browser reported a failure code we don't recognise
    #[error(
        "Unable to retrieve your location. An unknown error occurred (Code: {code}). Make sure you're using HTTPS."
    )]
    Unknown { code: String },

    /// Location was requested over plain HTTP from a non-local host
    #[error("Location access requires HTTPS. Please use a secure hosting service.")]
    InsecureContext,
}

impl PositionError {
    /// Map a browser-reported failure to an error.
    ///
    /// Accepts the names sent by the frontend and the raw
    /// `GeolocationPositionError` codes 1 to 3.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "permission_denied" | "1" => PositionError::PermissionDenied,
            "unavailable" | "2" => PositionError::Unavailable,
            "timeout" | "3" => PositionError::Timeout,
            "unsupported" => PositionError::Unsupported,
            other => PositionError::Unknown {
                code: other.to_string(),
            },
        }
    }
}
