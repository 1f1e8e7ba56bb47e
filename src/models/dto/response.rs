use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Attempt, AttemptStats, AttemptStatus, GradedAnswer};

/// Attempt view returned to the platform: the grading outcome without the
/// storage bookkeeping timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptDto {
    pub id: String,
    pub assessment_id: String,
    pub learner_id: String,
    pub attempt_number: u32,
    pub score: u32,
    pub total_points: u32,
    pub percentage: f64,
    pub status: AttemptStatus,
    pub answers: Vec<GradedAnswer>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Attempt> for AttemptDto {
    fn from(attempt: Attempt) -> Self {
        AttemptDto {
            id: attempt.id,
            assessment_id: attempt.assessment_id,
            learner_id: attempt.learner_id,
            attempt_number: attempt.attempt_number,
            score: attempt.score,
            total_points: attempt.total_points,
            percentage: attempt.percentage,
            status: attempt.status,
            answers: attempt.answers,
            submitted_at: attempt.submitted_at,
        }
    }
}

/// What a successful submission hands back: the recorded attempt plus the
/// assessment's refreshed summary.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAttemptResponse {
    pub attempt: AttemptDto,
    pub stats: AttemptStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptHistoryResponse {
    pub attempts: Vec<AttemptDto>,
    pub total: i64,
}
