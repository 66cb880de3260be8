//! Board fetch error types.

/// Errors from fetching a stop's arrival board.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A configured header value could not be encoded
    #[error("invalid {0} header value")]
    InvalidHeader(&'static str),

    /// Mock board directory could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FetchError::InvalidHeader("user-agent");
        assert_eq!(err.to_string(), "invalid user-agent header value");

        let err = FetchError::MockData {
            message: "no boards".into(),
        };
        assert_eq!(err.to_string(), "mock data error: no boards");
    }
}
