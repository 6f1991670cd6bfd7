//! In-memory result cache for fetched datasets.
//!
//! This module provides a bounded, process-lifetime cache of complete
//! (unfiltered, unwindowed) datasets. It supports:
//!
//! - Deterministic keys derived from the query identity using SHA-256
//! - Strict FIFO eviction once capacity is reached
//! - Single-flight fetches so concurrent misses share one remote walk

pub mod hash;
pub mod store;

pub use crate::Error;

pub use hash::compute_cache_key;
pub use store::{Dataset, ResultCache};
