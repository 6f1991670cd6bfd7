//! Response windowing: slice the filtered dataset into the caller's page.

use serde::{Deserialize, Serialize};

use crate::model::Submission;

/// Page size of the remote API, and the default and maximum client limit.
pub const PAGE_SIZE: usize = 150;

/// Offset/limit window requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self { offset: 0, limit: PAGE_SIZE }
    }
}

/// Final payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredResponses {
    pub responses: Vec<Submission>,
    /// Size of the filtered dataset, not of the returned window.
    pub total_responses: usize,
    pub page_count: usize,
}

impl Window {
    /// Slice `filtered` from `offset` up to the stop index `offset + limit`.
    ///
    /// Out-of-range windows yield no responses but keep the totals. A zero
    /// limit yields no responses and a page count of zero.
    pub fn apply(&self, filtered: &[Submission]) -> FilteredResponses {
        let total = filtered.len();
        let start = self.offset.min(total);
        let stop = self.offset.saturating_add(self.limit).min(total);

        let page_count = if self.limit == 0 { 0 } else { total.div_ceil(self.limit) };

        FilteredResponses { responses: filtered[start..stop].to_vec(), total_responses: total, page_count }
    }
}
