//! `GET /{formId}/filteredResponses` implementation.
//!
//! Returns one window of a form's submissions after applying the caller's
//! filter conditions to the complete dataset.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use sieve_core::{Error, FilteredResponses};

use crate::error::ApiError;
use crate::handler::AppState;
use crate::params::FilteredResponsesParams;

pub async fn filtered_responses(
    State(state): State<AppState>, Path(form_id): Path<String>,
    params: Result<Query<FilteredResponsesParams>, QueryRejection>,
) -> Result<Json<FilteredResponses>, ApiError> {
    let Query(params) = params.map_err(|rejection| Error::InvalidInput(rejection.body_text()))?;
    let query = params.into_query(form_id)?;
    let page = state.service.filtered_responses(&query).await?;
    Ok(Json(page))
}
