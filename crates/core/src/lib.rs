//! Core types and shared functionality for sieve.
//!
//! This crate provides:
//! - Submission and query data model
//! - In-memory result cache with FIFO eviction and single-flight fetches
//! - Filter engine and response windowing
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod window;

pub use cache::{Dataset, ResultCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use filter::{Condition, FilterCondition, FilterValue, apply_filters};
pub use model::{QuestionAnswer, Submission, SubmissionPage};
pub use query::{FormStatus, QueryIdentity, ResponseQuery, SortOrder};
pub use window::{FilteredResponses, PAGE_SIZE, Window};
