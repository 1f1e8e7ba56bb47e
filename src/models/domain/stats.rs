use serde::{Deserialize, Serialize};

use crate::models::domain::assessment::AssessmentKind;
use crate::models::domain::scored_result::AttemptStatus;

/// Rolling summary attached to an assessment: how many attempts were ever
/// recorded and the arithmetic mean of their percentages. Exam-kind
/// assessments additionally tally passes and failures; quiz-kind leaves the
/// tallies unset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AttemptStats {
    pub total_attempts: u64,
    pub average_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_count: Option<u64>,
}

impl AttemptStats {
    /// Zero state for a fresh assessment of the given kind.
    pub fn empty(kind: AssessmentKind) -> Self {
        let tally = if kind.tracks_pass_counts() { Some(0) } else { None };
        AttemptStats {
            total_attempts: 0,
            average_score: 0.0,
            pass_count: tally,
            fail_count: tally,
        }
    }

    /// Folds one more graded outcome in, updating the mean incrementally.
    /// Agrees with a full recomputation over the attempt history to within
    /// floating-point error.
    pub fn fold(&self, percentage: f64, status: AttemptStatus) -> Self {
        let total_attempts = self.total_attempts + 1;
        let average_score =
            self.average_score + (percentage - self.average_score) / total_attempts as f64;

        let bump = |tally: Option<u64>, hit: bool| tally.map(|n| if hit { n + 1 } else { n });

        AttemptStats {
            total_attempts,
            average_score,
            pass_count: bump(self.pass_count, status == AttemptStatus::Passed),
            fail_count: bump(self.fail_count, status == AttemptStatus::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_quiz_stats_have_no_tallies() {
        let stats = AttemptStats::empty(AssessmentKind::Quiz);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.average_score, 0.0);
        assert!(stats.pass_count.is_none());
        assert!(stats.fail_count.is_none());
    }

    #[test]
    fn empty_exam_stats_start_tallies_at_zero() {
        let stats = AttemptStats::empty(AssessmentKind::Exam);
        assert_eq!(stats.pass_count, Some(0));
        assert_eq!(stats.fail_count, Some(0));
    }

    #[test]
    fn fold_updates_mean_and_tallies() {
        let stats = AttemptStats::empty(AssessmentKind::Exam)
            .fold(50.0, AttemptStatus::Failed)
            .fold(100.0, AttemptStatus::Passed)
            .fold(75.0, AttemptStatus::Passed);

        assert_eq!(stats.total_attempts, 3);
        assert!((stats.average_score - 75.0).abs() < 1e-9);
        assert_eq!(stats.pass_count, Some(2));
        assert_eq!(stats.fail_count, Some(1));
    }

    #[test]
    fn fold_leaves_quiz_tallies_unset() {
        let stats = AttemptStats::empty(AssessmentKind::Quiz).fold(80.0, AttemptStatus::Passed);
        assert_eq!(stats.total_attempts, 1);
        assert!(stats.pass_count.is_none());
        assert!(stats.fail_count.is_none());
    }

    #[test]
    fn stats_round_trip_omits_unset_tallies() {
        let stats = AttemptStats::empty(AssessmentKind::Quiz).fold(60.0, AttemptStatus::Passed);
        let encoded = serde_json::to_value(&stats).expect("stats should serialize");

        assert!(encoded.get("pass_count").is_none());
        assert!(encoded.get("fail_count").is_none());

        let decoded: AttemptStats =
            serde_json::from_value(encoded).expect("stats should deserialize");
        assert_eq!(decoded, stats);
    }
}
