/// Error types for the translation pipeline
///
/// Each stage of a translation request (validation, configuration, the
/// provider call, response parsing) fails with its own variant so callers can
/// tell them apart at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Bad or missing input. Never reaches the network.
    #[error("{0}")]
    Validation(String),
    /// Missing or unusable provider credentials
    #[error("Server configuration error: {0}")]
    Configuration(String),
    /// The provider answered with a non-success HTTP status
    #[error("API returned status {status}")]
    Upstream { status: u16, body: String },
    /// The provider answered 2xx but no translation could be extracted
    #[error("{0}")]
    MalformedResponse(#[from] Malformed),
    /// Connection, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Ways a 2xx provider response can fail to yield a translation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// Body is not JSON of the expected shape
    #[error("Failed to parse translation response: {0}")]
    Unparseable(String),
    /// Body parsed but carried no (or an empty) translated text
    #[error("No translation received from API")]
    NoTranslation,
}

impl TranslateError {
    /// Raw provider body for upstream failures, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            TranslateError::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Transport(err.to_string())
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_includes_status() {
        let err = TranslateError::Upstream {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 403");
        assert_eq!(err.details(), Some("forbidden"));
    }

    #[test]
    fn test_malformed_display_keeps_kinds_apart() {
        let unparseable = TranslateError::from(Malformed::Unparseable("expected value".to_string()));
        assert_eq!(
            unparseable.to_string(),
            "Failed to parse translation response: expected value"
        );
        let missing = TranslateError::from(Malformed::NoTranslation);
        assert_eq!(missing.to_string(), "No translation received from API");
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = TranslateError::Validation("Unsupported language selected".to_string());
        assert_eq!(err.to_string(), "Unsupported language selected");
        assert_eq!(err.details(), None);
    }
}
