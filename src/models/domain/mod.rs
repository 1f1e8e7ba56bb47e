pub mod assessment;
pub mod attempt;
pub mod question;
pub mod scored_result;
pub mod stats;

pub use assessment::{Assessment, AssessmentKind, ScoringPolicy, DEFAULT_PASSING_THRESHOLD};
pub use attempt::Attempt;
pub use question::Question;
pub use scored_result::{AttemptStatus, GradedAnswer, ScoredResult};
pub use stats::AttemptStats;
