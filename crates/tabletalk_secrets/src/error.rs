//! Error types for secret retrieval.

use thiserror::Error;

/// Result alias for secret store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fetching a secret bundle.
///
/// Every variant is terminal for the call that raised it; the caller
/// decides whether a retry is worthwhile.
#[derive(Debug, Error)]
pub enum Error {
    /// Secret identifier unknown to the store (HTTP 404).
    #[error("secret not found: {0}")]
    NotFound(String),

    /// Token rejected or lacks read permission (HTTP 401/403).
    #[error("access denied for secret: {0}")]
    AccessDenied(String),

    /// Store reachable but unable to serve the request.
    #[error("secret store unavailable: {0}")]
    Unavailable(String),

    /// Network or connection failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Payload was not the expected key/value mapping.
    #[error("malformed secret payload: {0}")]
    MalformedPayload(String),

    /// A required field was absent from an otherwise valid bundle.
    #[error("field '{field}' missing from secret '{secret}'")]
    MissingField { secret: String, field: String },

    /// Store address, token, or secret name missing or empty.
    #[error("config error: {0}")]
    Config(String),
}
