use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One gradable question inside an assessment's question set.
///
/// `prompt` and `options` exist for the platform's renderer; grading reads
/// only `id`, `points` and `correct_answer`. The correct answer is kept as
/// raw JSON because the question bank stores a mix of option indexes and
/// option labels.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Value>,
    /// Point weight. Absent or zero falls back to the kind default of the
    /// owning assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    pub correct_answer: Value,
}

impl Question {
    pub fn new(id: &str, correct_answer: Value) -> Self {
        Question {
            id: id.to_string(),
            prompt: None,
            options: Vec::new(),
            points: None,
            correct_answer,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    /// Declared weight when positive, otherwise the supplied default.
    pub fn effective_points(&self, default_points: u32) -> u32 {
        match self.points {
            Some(points) if points > 0 => points,
            _ => default_points,
        }
    }
}
