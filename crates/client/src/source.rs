//! Page-level access to the remote submissions API.

use async_trait::async_trait;
use sieve_core::{QueryIdentity, SubmissionPage};

use crate::forms::FormsError;

/// Anything that can return one page of submissions for a query identity.
///
/// `offset` is a record offset; pages are `PAGE_SIZE` records long.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    async fn fetch_page(&self, identity: &QueryIdentity, offset: usize) -> Result<SubmissionPage, FormsError>;
}
