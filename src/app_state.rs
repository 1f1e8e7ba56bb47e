use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAssessmentRepository, MongoAttemptRepository},
    services::AttemptService,
};

#[derive(Clone)]
pub struct AppState {
    pub attempt_service: Arc<AttemptService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let assessment_repository = Arc::new(MongoAssessmentRepository::new(
            &db,
            &config.assessments_collection,
        ));
        assessment_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoAttemptRepository::new(
            &db,
            &config.attempts_collection,
        ));
        attempt_repository.ensure_indexes().await?;

        let attempt_service = Arc::new(AttemptService::new(
            assessment_repository,
            attempt_repository,
        ));

        Ok(Self {
            attempt_service,
            config: Arc::new(config),
        })
    }
}
