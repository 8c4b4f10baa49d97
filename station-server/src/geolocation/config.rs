//! Browser geolocation options.

use std::time::Duration;

/// Options handed to the browser's single-shot position request.
///
/// The browser enforces both: it gives up after `timeout` and may answer
/// with a cached fix no older than `max_age`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationConfig {
    /// Give up on a fix after this long.
    pub timeout: Duration,
    /// Accept a cached fix younger than this.
    pub max_age: Duration,
}

impl GeolocationConfig {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_age: Duration::from_secs(5 * 60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }

    pub fn max_age_ms(&self) -> u128 {
        self.max_age.as_millis()
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self::new()
    }
}
