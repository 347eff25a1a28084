//! Error types for model invocation.

use thiserror::Error;

/// Result alias for invocation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while invoking a chat model.
///
/// Each variant is a distinct failure category; the core never retries,
/// truncates, or re-issues a request against the other model variant.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider constructed without an API key.
    #[error("missing API key for provider: {0}")]
    MissingApiKey(String),

    /// Prompt was empty; nothing was sent upstream.
    #[error("empty prompt")]
    EmptyPrompt,

    /// API key rejected (HTTP 401/403).
    #[error("authentication failed")]
    Auth,

    /// Rate limit exceeded (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimited,

    /// Upstream returned an unexpected status.
    #[error("provider error: {0}")]
    Provider(String),

    /// Network or connection failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    pub fn provider_error(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Error::MalformedResponse(msg.into())
    }
}
