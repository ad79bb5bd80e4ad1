//! Error types for the API client.

/// Boxed cause of a transport-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No HTTP response was obtained (connect, DNS, TLS, timeout).
    #[error("Transport failed: {0}")]
    Transport(#[source] BoxError),
    /// The API returned a non-success status. `body` is the raw response body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A success response whose body does not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// A list option that cannot be expressed as a query parameter.
    #[error("Cannot encode query field `{field}`: {reason}")]
    Encoding { field: String, reason: String },
    /// The client configuration is unusable (bad base URL, bad token).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wraps any error as a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Transport(err.into())
    }

    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Raw body of the failed response, for status and decode errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { body, .. } | Error::Decode { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_from_status() {
        let err = Error::HttpStatus {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"error":"not found"}"#));
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let err = Error::transport("connection refused");
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert!(err.body().is_none());
        assert_eq!(err.to_string(), "Transport failed: connection refused");
    }

    #[test]
    fn decode_errors_keep_the_body() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::Decode {
            source,
            body: "{oops".to_string(),
        };
        assert_eq!(err.body(), Some("{oops"));
        assert_eq!(err.status(), None);
    }
}
