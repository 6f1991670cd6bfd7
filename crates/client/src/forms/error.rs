//! Remote form API client error types.

use std::sync::Arc;

use sieve_core::Error;

/// Errors from the remote form API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormsError {
    /// No API key configured.
    #[error("missing API key: SIEVE_API_KEY not set")]
    MissingApiKey,

    /// Base URL could not be parsed or cannot carry a path.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Authentication failed (invalid API key).
    #[error("authentication failed: invalid API key")]
    AuthError,

    /// Rate limited by the remote API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// Non-success HTTP response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FormsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FormsError::Timeout } else { FormsError::Network(Arc::new(err)) }
    }
}

impl From<FormsError> for Error {
    fn from(err: FormsError) -> Self {
        Error::FetchFailed(err.to_string())
    }
}
