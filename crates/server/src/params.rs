//! Query-string validation for the filtered responses endpoint.
//!
//! Every parameter arrives as an optional string and is checked here before
//! anything reaches the cache or the remote API.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use sieve_core::{Error, FilterCondition, FormStatus, PAGE_SIZE, QueryIdentity, ResponseQuery, SortOrder, Window};

/// Raw query parameters of `GET /{formId}/filteredResponses`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredResponsesParams {
    /// JSON-encoded array of filter conditions.
    pub filters: Option<String>,

    /// Page size, 0-150 (default 150).
    pub limit: Option<String>,

    /// Number of filtered records to skip (default 0).
    pub offset: Option<String>,

    /// Only submissions after this ISO-8601 date.
    pub after_date: Option<String>,

    /// Only submissions before this ISO-8601 date.
    pub before_date: Option<String>,

    /// `in_progress` or `finished`.
    pub status: Option<String>,

    /// `true` or `false`.
    pub include_edit_link: Option<String>,

    /// `asc` or `desc`.
    pub sort: Option<String>,
}

impl FilteredResponsesParams {
    /// Validate the parameters into a request for `form_id`.
    pub fn into_query(self, form_id: String) -> Result<ResponseQuery, Error> {
        if form_id.trim().is_empty() {
            return Err(Error::InvalidInput("formId cannot be empty".into()));
        }

        let limit = match self.limit.as_deref() {
            Some(raw) => parse_limit(raw)?,
            None => PAGE_SIZE,
        };
        let offset = match self.offset.as_deref() {
            Some(raw) => parse_offset(raw)?,
            None => 0,
        };

        let filters = match self.filters.as_deref() {
            Some(raw) => parse_filters(raw)?,
            None => Vec::new(),
        };

        let identity = QueryIdentity {
            form_id,
            after_date: self.after_date.map(|d| check_date("afterDate", d)).transpose()?,
            before_date: self.before_date.map(|d| check_date("beforeDate", d)).transpose()?,
            status: self.status.as_deref().map(parse_status).transpose()?,
            include_edit_link: self.include_edit_link.as_deref().map(parse_bool).transpose()?,
            sort: self.sort.as_deref().map(parse_sort).transpose()?,
        };

        Ok(ResponseQuery { identity, filters, window: Window { offset, limit } })
    }
}

fn parse_limit(raw: &str) -> Result<usize, Error> {
    raw.parse::<usize>()
        .ok()
        .filter(|limit| *limit <= PAGE_SIZE)
        .ok_or_else(|| Error::InvalidInput(format!("limit must be an integer between 0 and {PAGE_SIZE}")))
}

fn parse_offset(raw: &str) -> Result<usize, Error> {
    raw.parse::<usize>()
        .map_err(|_| Error::InvalidInput("offset must be a non-negative integer".into()))
}

/// Accept RFC 3339 date-times or bare `YYYY-MM-DD` dates; forward the original text.
fn check_date(field: &str, raw: String) -> Result<String, Error> {
    let valid = DateTime::parse_from_rfc3339(&raw).is_ok() || NaiveDate::parse_from_str(&raw, "%Y-%m-%d").is_ok();
    if valid { Ok(raw) } else { Err(Error::InvalidInput(format!("{field} must be an ISO-8601 date: {raw}"))) }
}

fn parse_status(raw: &str) -> Result<FormStatus, Error> {
    match raw {
        "in_progress" => Ok(FormStatus::InProgress),
        "finished" => Ok(FormStatus::Finished),
        other => Err(Error::InvalidInput(format!("invalid status: {other}"))),
    }
}

fn parse_sort(raw: &str) -> Result<SortOrder, Error> {
    match raw {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(Error::InvalidInput(format!("invalid sort: {other}"))),
    }
}

fn parse_bool(raw: &str) -> Result<bool, Error> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidInput(format!("includeEditLink must be true or false: {other}"))),
    }
}

fn parse_filters(raw: &str) -> Result<Vec<FilterCondition>, Error> {
    serde_json::from_str(raw).map_err(|e| Error::InvalidInput(format!("invalid filters: {e}")))
}
