//! Full-dataset fetch loop.
//!
//! Walks the remote pagination sequentially, one page at a time, until the
//! page count reported by the remote is reached. Any failed page aborts the
//! whole walk; partial results are never returned.

use std::time::Instant;

use sieve_core::{Error, PAGE_SIZE, QueryIdentity, Submission};

use crate::source::SubmissionSource;

/// Fetch every submission for `identity`, in remote order.
///
/// The page count is re-read from each page. The walk also stops on an empty
/// page so an over-reported page count cannot loop forever.
pub async fn fetch_all<S>(source: &S, identity: &QueryIdentity) -> Result<Vec<Submission>, Error>
where
    S: SubmissionSource + ?Sized,
{
    let start = Instant::now();
    let mut submissions = Vec::new();
    let mut pages_fetched: u64 = 0;
    let mut offset = 0;

    tracing::info!(form_id = %identity.form_id, "fetching full dataset");

    loop {
        let page = source.fetch_page(identity, offset).await.map_err(|e| {
            tracing::warn!(form_id = %identity.form_id, page = pages_fetched + 1, error = %e, "page fetch failed");
            Error::FetchFailed(format!("page {}: {}", pages_fetched + 1, e))
        })?;

        pages_fetched += 1;
        offset += PAGE_SIZE;

        tracing::debug!(
            form_id = %identity.form_id,
            page = pages_fetched,
            page_count = page.page_count,
            records = page.responses.len(),
            "fetched page"
        );

        let exhausted = page.responses.is_empty() || pages_fetched >= page.page_count;
        submissions.extend(page.responses);

        if exhausted {
            break;
        }
    }

    tracing::info!(
        form_id = %identity.form_id,
        pages = pages_fetched,
        records = submissions.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "fetched full dataset"
    );

    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormsError;
    use async_trait::async_trait;
    use serde_json::json;
    use sieve_core::SubmissionPage;
    use std::sync::Mutex;

    /// In-memory paged source that records requested offsets.
    struct PagedSource {
        total: usize,
        fail_on_page: Option<usize>,
        reported_pages: Option<u64>,
        /// Page count reported by each page in turn, overriding the default.
        per_page_counts: Vec<u64>,
        offsets: Mutex<Vec<usize>>,
    }

    impl PagedSource {
        fn new(total: usize) -> Self {
            Self {
                total,
                fail_on_page: None,
                reported_pages: None,
                per_page_counts: Vec::new(),
                offsets: Mutex::new(Vec::new()),
            }
        }

        fn offsets(&self) -> Vec<usize> {
            self.offsets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionSource for PagedSource {
        async fn fetch_page(&self, _identity: &QueryIdentity, offset: usize) -> Result<SubmissionPage, FormsError> {
            self.offsets.lock().unwrap().push(offset);

            let page_number = offset / PAGE_SIZE + 1;
            if self.fail_on_page == Some(page_number) {
                return Err(FormsError::HttpError { status: 500 });
            }

            let responses = (offset..(offset + PAGE_SIZE).min(self.total))
                .map(|i| serde_json::from_value(json!({"submissionId": format!("s{i}"), "questions": []})).unwrap())
                .collect();
            let page_count = self
                .per_page_counts
                .get(page_number - 1)
                .copied()
                .or(self.reported_pages)
                .unwrap_or(self.total.div_ceil(PAGE_SIZE) as u64);

            Ok(SubmissionPage { responses, total_responses: Some(self.total as u64), page_count })
        }
    }

    #[tokio::test]
    async fn test_walks_every_page() {
        let source = PagedSource::new(320);
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();

        assert_eq!(all.len(), 320);
        assert_eq!(all[0].submission_id, "s0");
        assert_eq!(all[319].submission_id, "s319");
        assert_eq!(source.offsets(), vec![0, 150, 300]);
    }

    #[tokio::test]
    async fn test_single_page() {
        let source = PagedSource::new(10);
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();
        assert_eq!(all.len(), 10);
        assert_eq!(source.offsets(), vec![0]);
    }

    #[tokio::test]
    async fn test_empty_dataset_makes_one_request() {
        let source = PagedSource::new(0);
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(source.offsets(), vec![0]);
    }

    #[tokio::test]
    async fn test_failure_discards_partial_results() {
        let source = PagedSource { fail_on_page: Some(2), ..PagedSource::new(400) };
        let result = fetch_all(&source, &QueryIdentity::new("f")).await;

        assert!(matches!(result, Err(Error::FetchFailed(msg)) if msg.starts_with("page 2")));
        assert_eq!(source.offsets(), vec![0, 150]);
    }

    #[tokio::test]
    async fn test_over_reported_page_count_stops_on_empty_page() {
        let source = PagedSource { reported_pages: Some(50), ..PagedSource::new(200) };
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();

        assert_eq!(all.len(), 200);
        assert_eq!(source.offsets(), vec![0, 150, 300]);
    }

    #[tokio::test]
    async fn test_page_count_shrinking_after_first_page() {
        let source = PagedSource { per_page_counts: vec![4, 2], ..PagedSource::new(600) };
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();

        assert_eq!(all.len(), 300);
        assert_eq!(source.offsets(), vec![0, 150]);
    }

    #[tokio::test]
    async fn test_page_count_growing_after_first_page() {
        let source = PagedSource { per_page_counts: vec![1, 3, 3], ..PagedSource::new(600) };
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();

        // The first page claims to be the only one, so the walk stops there.
        assert_eq!(all.len(), 150);
        assert_eq!(source.offsets(), vec![0]);

        let source = PagedSource { per_page_counts: vec![2, 3, 3], ..PagedSource::new(600) };
        let all = fetch_all(&source, &QueryIdentity::new("f")).await.unwrap();

        assert_eq!(all.len(), 450);
        assert_eq!(source.offsets(), vec![0, 150, 300]);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let source: Box<dyn SubmissionSource> = Box::new(PagedSource::new(151));
        let all = fetch_all(source.as_ref(), &QueryIdentity::new("f")).await.unwrap();
        assert_eq!(all.len(), 151);
    }
}
