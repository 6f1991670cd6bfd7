//! Submission records as returned by the remote form API.
//!
//! Records are treated as opaque: only the submission id and the question
//! answers are typed, everything else is carried through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single answered question inside a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Question identifier targeted by filter conditions.
    pub id: String,

    /// Raw answer value. Numbers and strings take part in comparisons.
    #[serde(default)]
    pub value: Value,

    /// Remaining fields (name, type, ...), passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: String,

    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Submission {
    /// Answers whose question id matches `id`.
    pub fn answers_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a QuestionAnswer> + 'a {
        self.questions.iter().filter(move |q| q.id == id)
    }
}

/// One page of submissions from the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPage {
    #[serde(default)]
    pub responses: Vec<Submission>,

    #[serde(default)]
    pub total_responses: Option<u64>,

    /// Number of pages the remote reports for the whole dataset.
    #[serde(default)]
    pub page_count: u64,
}
