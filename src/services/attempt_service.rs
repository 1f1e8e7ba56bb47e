use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Attempt, AttemptStats},
    models::dto::request::{PaginationParams, SubmitAttemptRequest},
    models::dto::response::{AttemptDto, AttemptHistoryResponse, SubmitAttemptResponse},
    repositories::{AssessmentRepository, AttemptRepository},
    services::scoring_service::ScoringService,
    services::stats_service::StatsService,
};

/// Keyed async locks, one per assessment id. Serializes the
/// load-aggregate-store sequence for a single assessment within this
/// process; deployments running several processes against one database
/// need the serialization done by the storage layer instead. Entries
/// persist for the process lifetime.
struct EntityLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl EntityLocks {
    fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let entity_lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        entity_lock.lock_owned().await
    }
}

/// Orchestrates attempt submission: loads the assessment, grades the
/// submission, numbers the attempt, refreshes the assessment's rolling
/// summary and persists both. Grading and aggregation themselves live in
/// the pure services.
pub struct AttemptService {
    assessments: Arc<dyn AssessmentRepository>,
    attempts: Arc<dyn AttemptRepository>,
    submit_locks: EntityLocks,
}

impl AttemptService {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        attempts: Arc<dyn AttemptRepository>,
    ) -> Self {
        Self {
            assessments,
            attempts,
            submit_locks: EntityLocks::new(),
        }
    }

    /// Grades and records one submission.
    ///
    /// Two concurrent submissions against the same assessment must not both
    /// read the same attempt history and then both write, losing one
    /// contribution to the summary. The per-assessment lock makes the whole
    /// read-grade-write sequence atomic inside this process.
    ///
    /// An assessment without questions is reported as `NotFound` before
    /// grading; a zero-question submission would otherwise produce a
    /// plausible-looking failed attempt and mask a broken assessment.
    pub async fn submit(
        &self,
        assessment_id: &str,
        learner_id: &str,
        request: SubmitAttemptRequest,
    ) -> AppResult<SubmitAttemptResponse> {
        request.validate()?;

        let _guard = self.submit_locks.acquire(assessment_id).await;

        let assessment = self
            .assessments
            .find_by_id(assessment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Assessment with id {} not found", assessment_id))
            })?;

        if assessment.questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Assessment with id {} has no questions",
                assessment_id
            )));
        }

        let history = self.attempts.find_by_assessment(assessment_id).await?;

        let prior_by_learner = history
            .iter()
            .filter(|attempt| attempt.learner_id == learner_id)
            .count() as u32;

        if let Some(limit) = assessment.attempt_limit {
            if prior_by_learner >= limit {
                return Err(AppError::ValidationError(format!(
                    "Attempt limit ({}) reached for assessment {}",
                    limit, assessment_id
                )));
            }
        }

        let result = ScoringService::score(
            &assessment.questions,
            &request.answers,
            &assessment.scoring_policy(),
        );
        let stats = StatsService::aggregate(assessment.kind, &history, &result);

        let attempt = Attempt::from_result(assessment_id, learner_id, prior_by_learner + 1, result);
        let attempt = self.attempts.create(attempt).await?;
        self.assessments.update_stats(assessment_id, &stats).await?;

        log::info!(
            "Recorded attempt {} for assessment {} (learner {}, {:.1}%, {} attempts total)",
            attempt.id,
            assessment_id,
            learner_id,
            attempt.percentage,
            stats.total_attempts
        );

        Ok(SubmitAttemptResponse {
            attempt: attempt.into(),
            stats,
        })
    }

    pub async fn attempt(&self, id: &str) -> AppResult<AttemptDto> {
        let attempt = self
            .attempts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attempt with id {} not found", id)))?;

        Ok(attempt.into())
    }

    /// A learner's attempts, newest first, optionally narrowed to one
    /// assessment.
    pub async fn history(
        &self,
        learner_id: &str,
        assessment_id: Option<&str>,
        params: &PaginationParams,
    ) -> AppResult<AttemptHistoryResponse> {
        params.validate()?;

        let (attempts, total) = self
            .attempts
            .find_by_learner(
                learner_id,
                assessment_id.map(str::to_string),
                params.offset(),
                params.limit(),
            )
            .await?;

        Ok(AttemptHistoryResponse {
            attempts: attempts.into_iter().map(AttemptDto::from).collect(),
            total,
        })
    }

    pub async fn stats_for(&self, assessment_id: &str) -> AppResult<AttemptStats> {
        let assessment = self
            .assessments
            .find_by_id(assessment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Assessment with id {} not found", assessment_id))
            })?;

        Ok(assessment.stats)
    }
}
