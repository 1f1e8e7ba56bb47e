pub mod assessment_repository;
pub mod attempt_repository;

pub use assessment_repository::{AssessmentRepository, MongoAssessmentRepository};
pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
