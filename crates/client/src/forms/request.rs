//! Query parameters for one remote submissions page.

use serde::Serialize;
use sieve_core::{FormStatus, PAGE_SIZE, QueryIdentity, SortOrder};

/// Query string sent to `GET /forms/{formId}/submissions`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionsRequest<'a> {
    pub limit: usize,
    pub offset: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_date: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_date: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_edit_link: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl<'a> SubmissionsRequest<'a> {
    /// Request for the page starting at `offset` of the dataset named by `identity`.
    pub fn page(identity: &'a QueryIdentity, offset: usize) -> Self {
        Self {
            limit: PAGE_SIZE,
            offset,
            after_date: identity.after_date.as_deref(),
            before_date: identity.before_date.as_deref(),
            status: identity.status,
            include_edit_link: identity.include_edit_link,
            sort: identity.sort,
        }
    }
}
