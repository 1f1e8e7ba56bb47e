use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;
use crate::models::domain::stats::AttemptStats;

/// Percentage required to pass when the assessment does not set its own.
pub const DEFAULT_PASSING_THRESHOLD: f64 = 60.0;

/// Quiz and exam sets share one grading pipeline but carry different
/// per-question defaults: an unweighted quiz question is worth 10 points,
/// an unweighted exam question 1. Only exams tally pass/fail counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Quiz,
    Exam,
}

impl AssessmentKind {
    pub fn default_question_points(&self) -> u32 {
        match self {
            AssessmentKind::Quiz => 10,
            AssessmentKind::Exam => 1,
        }
    }

    pub fn tracks_pass_counts(&self) -> bool {
        matches!(self, AssessmentKind::Exam)
    }
}

/// Everything the scorer needs to know about the parent entity, so the
/// scorer itself never branches on assessment kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringPolicy {
    pub default_question_points: u32,
    pub passing_threshold: f64,
}

/// A quiz or exam: an ordered question set plus grading configuration and
/// the rolling attempt summary.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Assessment {
    pub id: String,
    pub title: String,
    pub kind: AssessmentKind,
    /// Pass mark as a percentage; `None` falls back to the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_threshold: Option<f64>,
    /// Per-learner cap on attempts; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_limit: Option<u32>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub stats: AttemptStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Assessment {
    pub fn new(title: &str, kind: AssessmentKind, questions: Vec<Question>) -> Self {
        Assessment {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            kind,
            passing_threshold: None,
            attempt_limit: None,
            questions,
            stats: AttemptStats::empty(kind),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn with_passing_threshold(mut self, threshold: f64) -> Self {
        self.passing_threshold = Some(threshold);
        self
    }

    pub fn with_attempt_limit(mut self, limit: u32) -> Self {
        self.attempt_limit = Some(limit);
        self
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            default_question_points: self.kind.default_question_points(),
            passing_threshold: self.passing_threshold.unwrap_or(DEFAULT_PASSING_THRESHOLD),
        }
    }
}
