use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// One submitted answer. `selected_option` stays raw JSON so numeric option
/// indexes and label strings both arrive untouched; the scorer coerces when
/// comparing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerInput {
    pub question_id: String,
    #[serde(default)]
    pub selected_option: Value,
}

impl AnswerInput {
    pub fn new(question_id: &str, selected_option: Value) -> Self {
        AnswerInput {
            question_id: question_id.to_string(),
            selected_option,
        }
    }
}

/// Deserialized submission body for one attempt. An empty answer list is
/// legal and grades every question as unanswered.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    #[validate(nested)]
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

impl SubmitAttemptRequest {
    pub fn new(answers: Vec<AnswerInput>) -> Self {
        SubmitAttemptRequest { answers }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
