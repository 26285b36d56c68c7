//! Crate-level error types.
//!
//! [`DeckError`] unifies every error source (configuration, HTTP transport,
//! HTTP status, JSON, terminal I/O) behind a single enum so callers can match
//! on the variant they care about while still using the `?` operator for
//! easy propagation. Panels reduce any variant to its `Display` string; the
//! taxonomy is not surfaced to the user beyond that one message.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be sent or the response body read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup or rendering failed.
    #[error("terminal error: {0}")]
    Io(String),
}

impl DeckError {
    /// Returns the HTTP status code when the error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DeckError::Status(code) => Some(code.as_u16()),
            DeckError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
