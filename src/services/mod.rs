pub mod attempt_service;
pub mod scoring_service;
pub mod stats_service;

pub use attempt_service::AttemptService;
pub use scoring_service::ScoringService;
pub use stats_service::StatsService;
