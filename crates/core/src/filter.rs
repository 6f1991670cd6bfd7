//! Filter engine.
//!
//! A filter set is a flat list of single-question conditions joined by AND.
//! A condition only judges records that actually carry an answer for its
//! question; a record without that answer is never excluded by it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Submission;

/// Comparison applied by a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals,
    DoesNotEqual,
    GreaterThan,
    LessThan,
}

/// Value a condition compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

/// A single-question filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Question id the condition targets.
    pub id: String,
    pub condition: Condition,
    pub value: FilterValue,
}

impl FilterValue {
    /// Order of `answer` relative to `self`, if the two are comparable.
    ///
    /// Numbers compare numerically and strings lexicographically. Every other
    /// pairing (number vs string, null, bool, arrays, objects) is incomparable.
    fn compare(&self, answer: &Value) -> Option<Ordering> {
        match (answer, self) {
            (Value::Number(n), FilterValue::Number(v)) => n.as_f64()?.partial_cmp(v),
            (Value::String(s), FilterValue::Text(v)) => Some(s.as_str().cmp(v.as_str())),
            _ => None,
        }
    }
}

impl FilterCondition {
    /// Whether a single answer value satisfies the condition.
    pub fn holds_for(&self, answer: &Value) -> bool {
        let ordering = self.value.compare(answer);
        match self.condition {
            Condition::Equals => ordering == Some(Ordering::Equal),
            Condition::DoesNotEqual => ordering != Some(Ordering::Equal),
            Condition::GreaterThan => ordering == Some(Ordering::Greater),
            Condition::LessThan => ordering == Some(Ordering::Less),
        }
    }

    /// Whether the condition lets `submission` through.
    ///
    /// Fails only when a matching answer fails the comparison.
    pub fn admits(&self, submission: &Submission) -> bool {
        submission.answers_for(&self.id).all(|answer| self.holds_for(&answer.value))
    }
}

/// Keep the submissions admitted by every condition, preserving order.
pub fn apply_filters(submissions: &[Submission], filters: &[FilterCondition]) -> Vec<Submission> {
    if filters.is_empty() {
        return submissions.to_vec();
    }

    submissions
        .iter()
        .filter(|submission| filters.iter().all(|f| f.admits(submission)))
        .cloned()
        .collect()
}
