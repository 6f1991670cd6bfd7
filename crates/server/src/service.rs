//! Request orchestration: cache lookup, full fetch on miss, filter, window.

use std::sync::Arc;

use sieve_client::{SubmissionSource, fetch_all};
use sieve_core::cache::compute_cache_key;
use sieve_core::{Dataset, Error, FilteredResponses, QueryIdentity, ResponseQuery, ResultCache, apply_filters};

/// Owns the result cache and the remote source for the lifetime of the server.
pub struct ResponseService {
    source: Arc<dyn SubmissionSource>,
    cache: ResultCache,
}

impl ResponseService {
    /// Create a service with an empty cache of the given capacity.
    pub fn new(source: Arc<dyn SubmissionSource>, cache_capacity: usize) -> Self {
        Self { source, cache: ResultCache::new(cache_capacity) }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// The full unfiltered dataset for `identity`, from cache or the remote API.
    pub async fn dataset(&self, identity: &QueryIdentity) -> Result<Dataset, Error> {
        let key = compute_cache_key(identity);
        self.cache
            .get_or_fetch(&key, || fetch_all(self.source.as_ref(), identity))
            .await
    }

    /// Serve one validated request.
    pub async fn filtered_responses(&self, query: &ResponseQuery) -> Result<FilteredResponses, Error> {
        let dataset = self.dataset(&query.identity).await?;
        let filtered = apply_filters(&dataset, &query.filters);
        let page = query.window.apply(&filtered);

        tracing::debug!(
            form_id = %query.identity.form_id,
            fetched = dataset.len(),
            matched = page.total_responses,
            returned = page.responses.len(),
            "served filtered responses"
        );

        Ok(page)
    }
}
