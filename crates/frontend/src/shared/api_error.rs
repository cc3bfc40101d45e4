//! Categorized failure type for backend dispatch calls.

use std::fmt;

/// Why a request to the backend failed.
///
/// Callers branch on the variant to pick user-facing messaging instead of
/// parsing error strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    Network(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Status(code) => write!(f, "HTTP {}", code),
            ApiError::Malformed(e) => write!(f, "malformed response: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_per_category() {
        assert_eq!(
            ApiError::Network("fetch failed".to_string()).to_string(),
            "network error: fetch failed"
        );
        assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
        assert_eq!(
            ApiError::Malformed("expected array".to_string()).to_string(),
            "malformed response: expected array"
        );
    }

    #[test]
    fn test_categories_are_distinguishable() {
        let err = ApiError::Status(429);
        assert!(matches!(err, ApiError::Status(429)));
        assert_ne!(err, ApiError::Status(500));
    }
}
