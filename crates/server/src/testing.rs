//! In-memory remote source for service and route tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use sieve_client::{FormsError, SubmissionSource};
use sieve_core::{PAGE_SIZE, QueryIdentity, Submission, SubmissionPage};

/// Serves a fixed dataset in `PAGE_SIZE` pages and counts page requests.
pub struct FakeSource {
    submissions: Vec<Submission>,
    fail_on_page: Option<usize>,
    calls: AtomicUsize,
}

impl FakeSource {
    /// `n` submissions `s0..s{n-1}`, each answering `q1` with its index.
    pub fn numbered(n: usize) -> Self {
        let submissions = (0..n)
            .map(|i| {
                serde_json::from_value(json!({
                    "submissionId": format!("s{i}"),
                    "questions": [{"id": "q1", "name": "Score", "type": "NumberInput", "value": i}]
                }))
                .unwrap()
            })
            .collect();
        Self { submissions, fail_on_page: None, calls: AtomicUsize::new(0) }
    }

    pub fn failing_on_page(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionSource for FakeSource {
    async fn fetch_page(&self, _identity: &QueryIdentity, offset: usize) -> Result<SubmissionPage, FormsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_page == Some(offset / PAGE_SIZE + 1) {
            return Err(FormsError::HttpError { status: 502 });
        }

        let end = (offset + PAGE_SIZE).min(self.submissions.len());
        let responses = self.submissions.get(offset..end).unwrap_or_default().to_vec();

        Ok(SubmissionPage {
            responses,
            total_responses: Some(self.submissions.len() as u64),
            page_count: self.submissions.len().div_ceil(PAGE_SIZE) as u64,
        })
    }
}
