use std::fmt;

/// The single failure kind of the dashboard: a request to the analytics
/// service did not produce a usable body.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed (DNS, connection refused, timeout, CORS).
    Network(String),
    /// The service answered with a non-2xx status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(503).to_string(), "Unexpected HTTP status 503");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<f64>>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
