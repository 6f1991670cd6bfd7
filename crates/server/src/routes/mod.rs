//! HTTP route handlers.

pub mod filtered_responses;
pub mod health;
