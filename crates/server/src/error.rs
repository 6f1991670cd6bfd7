//! HTTP error mapping for the sieve server.
//!
//! Fetch failures are reported with a generic message; the detailed cause is
//! logged, not returned.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sieve_core::Error;

/// Message returned to callers when the remote dataset could not be assembled.
pub const FETCH_FAILED_MESSAGE: &str = "Request failed!";

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned from route handlers.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::FetchFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::warn!(code = self.0.code(), error = %self.0, "request failed");
        } else {
            tracing::debug!(code = self.0.code(), error = %self.0, "request rejected");
        }

        (status, Json(ErrorBody { error })).into_response()
    }
}
