use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pass/fail verdict for one graded attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Passed,
    Failed,
}

/// Grading outcome for a single question, emitted for every question in the
/// set whether or not the learner answered it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradedAnswer {
    pub question_id: String,
    /// The option as submitted, `None` when the question went unanswered.
    pub selected_option: Option<Value>,
    pub is_correct: bool,
}

/// Immutable outcome of grading one submission against one question set.
/// Created by the scorer, then folded into stats and persisted; never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoredResult {
    pub score: u32,
    pub total_points: u32,
    pub percentage: f64,
    pub status: AttemptStatus,
    pub answers: Vec<GradedAnswer>,
}
