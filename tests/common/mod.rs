use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use assessment_engine::{
    errors::{AppError, AppResult},
    models::domain::{Assessment, Attempt, AttemptStats},
    repositories::{AssessmentRepository, AttemptRepository},
};

pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<String, Assessment>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self {
            assessments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn create(&self, assessment: Assessment) -> AppResult<Assessment> {
        let mut assessments = self.assessments.write().await;
        if assessments.contains_key(&assessment.id) {
            return Err(AppError::AlreadyExists(format!(
                "Assessment with id {} already exists",
                assessment.id
            )));
        }

        assessments.insert(assessment.id.clone(), assessment.clone());
        Ok(assessment)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Assessment>> {
        let assessments = self.assessments.read().await;
        Ok(assessments.get(id).cloned())
    }

    async fn update_stats(&self, id: &str, stats: &AttemptStats) -> AppResult<()> {
        let mut assessments = self.assessments.write().await;
        let assessment = assessments.get_mut(id).ok_or_else(|| {
            AppError::NotFound(format!("Assessment with id {} not found", id))
        })?;

        assessment.stats = stats.clone();
        assessment.modified_at = Some(Utc::now());
        Ok(())
    }
}

pub struct InMemoryAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, Attempt>>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&attempt.id) {
            return Err(AppError::AlreadyExists(format!(
                "Attempt with id {} already exists",
                attempt.id
            )));
        }

        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(id).cloned())
    }

    async fn find_by_assessment(&self, assessment_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| a.assessment_id == assessment_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(items)
    }

    async fn find_by_learner(
        &self,
        learner_id: &str,
        assessment_id: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Attempt>, i64)> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| {
                a.learner_id == learner_id
                    && assessment_id
                        .as_deref()
                        .map(|aid| a.assessment_id == aid)
                        .unwrap_or(true)
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}
