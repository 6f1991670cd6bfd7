//! Client code for sieve.
//!
//! This crate provides the remote form API client and the loop that
//! assembles a complete dataset from its paginated responses.

pub mod forms;
pub mod pager;
pub mod source;

pub use forms::{FormsClient, FormsConfig, FormsError, SubmissionsRequest};
pub use pager::fetch_all;
pub use source::SubmissionSource;
