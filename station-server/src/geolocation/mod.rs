//! Device position handling.
//!
//! The browser performs a single position request (no continuous watch)
//! using the timeout and max age from `GeolocationConfig`, then reports
//! either a fix or a failure code. Location access is only offered to
//! secure origins.

mod config;
mod error;
mod position;
mod secure;

pub use config::GeolocationConfig;
pub use error::PositionError;
pub use position::Position;
pub use secure::{is_secure_origin, require_secure_origin};
