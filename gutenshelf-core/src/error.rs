//! Error types for Gutenshelf Core

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error returned by every catalog fetch
///
/// Callers only need the display message; the underlying cause stays
/// reachable through `source()` for diagnostics.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch books: {0}")]
    Remote(#[from] RemoteError),

    #[error("Failed to fetch books: malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Failures talking to the upstream catalog
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP status {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl CatalogError {
    /// HTTP status reported by the catalog, if the failure was a non-2xx response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CatalogError::Remote(RemoteError::Status(status)) => Some(*status),
            _ => None,
        }
    }

    /// Whether the body arrived but did not have the envelope shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, CatalogError::MalformedResponse(_))
    }
}

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_mentions_code() {
        let err = CatalogError::from(RemoteError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        let message = err.to_string();
        assert!(message.starts_with("Failed to fetch books"));
        assert!(message.contains("500"));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::MalformedResponse(json_err);
        assert!(err.is_malformed());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }
}
