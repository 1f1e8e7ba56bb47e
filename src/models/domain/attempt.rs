use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::scored_result::{AttemptStatus, GradedAnswer, ScoredResult};

/// Durable record of one graded attempt. Built exactly once from a
/// `ScoredResult` and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Attempt {
    pub id: String,
    pub assessment_id: String,
    pub learner_id: String,
    /// 1-based position within this learner's attempts at the assessment.
    pub attempt_number: u32,
    pub score: u32,
    pub total_points: u32,
    pub percentage: f64,
    pub status: AttemptStatus,
    pub answers: Vec<GradedAnswer>,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Attempt {
    pub fn from_result(
        assessment_id: &str,
        learner_id: &str,
        attempt_number: u32,
        result: ScoredResult,
    ) -> Self {
        Attempt {
            id: Uuid::new_v4().to_string(),
            assessment_id: assessment_id.to_string(),
            learner_id: learner_id.to_string(),
            attempt_number,
            score: result.score,
            total_points: result.total_points,
            percentage: result.percentage,
            status: result.status,
            answers: result.answers,
            submitted_at: Utc::now(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
