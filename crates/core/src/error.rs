//! Unified error types for sieve.

/// Unified error types for the sieve service.
///
/// `Clone` so a single in-flight fetch can hand the same outcome to every waiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., malformed filters or dates).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// A remote page request failed; the whole dataset assembly is abandoned.
    #[error("FETCH_FAILED: {0}")]
    FetchFailed(String),
}

impl Error {
    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::FetchFailed(_) => "FETCH_FAILED",
        }
    }
}
