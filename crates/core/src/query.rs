//! Query identity and the fully validated request.

use serde::{Deserialize, Serialize};

use crate::filter::FilterCondition;
use crate::window::Window;

/// Submission status accepted by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    InProgress,
    Finished,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::InProgress => "in_progress",
            FormStatus::Finished => "finished",
        }
    }
}

/// Sort order of submissions by submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters that determine the unfiltered dataset fetched from the remote API.
///
/// Filters, offset and limit are not part of it; they apply after the fetch,
/// so requests differing only in those share one cache entry. Field order is
/// part of the cache key and must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIdentity {
    pub form_id: String,
    pub after_date: Option<String>,
    pub before_date: Option<String>,
    pub status: Option<FormStatus>,
    pub include_edit_link: Option<bool>,
    pub sort: Option<SortOrder>,
}

impl QueryIdentity {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self { form_id: form_id.into(), ..Default::default() }
    }
}

/// A validated request: which dataset, how to narrow it, which page to return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseQuery {
    pub identity: QueryIdentity,
    pub filters: Vec<FilterCondition>,
    pub window: Window,
}
