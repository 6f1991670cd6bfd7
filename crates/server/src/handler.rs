//! HTTP router and shared application state.
//!
//! This module wires the routes to the long-lived `ResponseService`.

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::routes::{filtered_responses, health};
use crate::service::ResponseService;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ResponseService>,
}

impl AppState {
    pub fn new(service: ResponseService) -> Self {
        Self { service: Arc::new(service) }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/:form_id/filteredResponses", get(filtered_responses::filtered_responses))
        .with_state(state)
}
