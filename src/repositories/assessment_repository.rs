use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Assessment, AttemptStats},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    async fn create(&self, assessment: Assessment) -> AppResult<Assessment>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Assessment>>;
    /// Replaces the stored rolling summary. The attempt history stays the
    /// source of truth; this persists a derived value.
    async fn update_stats(&self, id: &str, stats: &AttemptStats) -> AppResult<()>;
}

pub struct MongoAssessmentRepository {
    collection: Collection<Assessment>,
}

impl MongoAssessmentRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for assessments collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for assessments collection");
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for MongoAssessmentRepository {
    async fn create(&self, assessment: Assessment) -> AppResult<Assessment> {
        let existing = self
            .collection
            .find_one(doc! { "id": &assessment.id })
            .await?;
        if existing.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Assessment with id {} already exists",
                assessment.id
            )));
        }

        self.collection.insert_one(&assessment).await?;
        Ok(assessment)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Assessment>> {
        let assessment = self.collection.find_one(doc! { "id": id }).await?;
        Ok(assessment)
    }

    async fn update_stats(&self, id: &str, stats: &AttemptStats) -> AppResult<()> {
        let stats_bson = mongodb::bson::to_bson(stats)?;
        let modified_at = mongodb::bson::to_bson(&Utc::now())?;

        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "stats": stats_bson, "modified_at": modified_at } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Assessment with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
