use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Attempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>>;
    /// Every attempt ever recorded for an assessment, oldest first.
    async fn find_by_assessment(&self, assessment_id: &str) -> AppResult<Vec<Attempt>>;
    /// One page of a learner's attempts, newest first, optionally narrowed
    /// to a single assessment. Returns the page and the unpaged total.
    async fn find_by_learner(
        &self,
        learner_id: &str,
        assessment_id: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Attempt>, i64)>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let assessment_index = IndexModel::builder()
            .keys(doc! { "assessment_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("assessment_id".to_string())
                    .build(),
            )
            .build();

        let learner_assessment_index = IndexModel::builder()
            .keys(doc! { "learner_id": 1, "assessment_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("learner_assessment".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(assessment_index).await?;
        self.collection.create_index(learner_assessment_index).await?;

        log::info!("Successfully created indexes for attempts collection");
        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_assessment(&self, assessment_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self
            .collection
            .find(doc! { "assessment_id": assessment_id })
            .sort(doc! { "submitted_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn find_by_learner(
        &self,
        learner_id: &str,
        assessment_id: Option<String>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Attempt>, i64)> {
        let mut filter = doc! { "learner_id": learner_id };

        if let Some(aid) = assessment_id {
            filter.insert("assessment_id", aid);
        }

        let total = self.collection.count_documents(filter.clone()).await?;

        let attempts = self
            .collection
            .find(filter)
            .skip(offset as u64)
            .limit(limit)
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((attempts, total as i64))
    }
}
