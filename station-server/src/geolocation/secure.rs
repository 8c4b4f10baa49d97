//! Secure-context check for location access.

use super::error::PositionError;

/// Whether a request came over HTTPS or from a local host.
///
/// `scheme` is the original request scheme (usually from
/// `X-Forwarded-Proto`); `host` may carry a port.
pub fn is_secure_origin(scheme: Option<&str>, host: Option<&str>) -> bool {
    if scheme.is_some_and(|s| s.trim().eq_ignore_ascii_case("https")) {
        return true;
    }

    let Some(host) = host else {
        return false;
    };
    let hostname = host.trim().split(':').next().unwrap_or_default();
    matches!(hostname, "localhost" | "127.0.0.1")
}

/// Fail with `InsecureContext` unless the origin is secure.
pub fn require_secure_origin(scheme: Option<&str>, host: Option<&str>) -> Result<(), PositionError> {
    if is_secure_origin(scheme, host) {
        Ok(())
    } else {
        Err(PositionError::InsecureContext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_is_secure() {
        assert!(is_secure_origin(Some("https"), Some("stations.example.com")));
        assert!(is_secure_origin(Some("HTTPS"), None));
    }

    #[test]
    fn local_hosts_are_secure() {
        assert!(is_secure_origin(None, Some("localhost")));
        assert!(is_secure_origin(Some("http"), Some("localhost:3000")));
        assert!(is_secure_origin(Some("http"), Some("127.0.0.1:8080")));
    }

    #[test]
    fn plain_http_elsewhere_is_insecure() {
        assert!(!is_secure_origin(Some("http"), Some("stations.example.com")));
        assert!(!is_secure_origin(None, Some("192.168.1.10:3000")));
        assert!(!is_secure_origin(None, None));
        assert_eq!(
            require_secure_origin(Some("http"), Some("example.com")),
            Err(PositionError::InsecureContext)
        );
    }
}
