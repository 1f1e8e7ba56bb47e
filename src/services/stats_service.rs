use crate::models::domain::assessment::AssessmentKind;
use crate::models::domain::attempt::Attempt;
use crate::models::domain::scored_result::{AttemptStatus, ScoredResult};
use crate::models::domain::stats::AttemptStats;

pub struct StatsService;

impl StatsService {
    /// Recomputes the rolling summary from a stored attempt history.
    pub fn recompute(kind: AssessmentKind, attempts: &[Attempt]) -> AttemptStats {
        Self::summarize(kind, attempts.iter().map(|a| (a.percentage, a.status)))
    }

    /// Summary after appending one freshly graded attempt to the history.
    ///
    /// The attempt history is the single source of truth: this recomputes
    /// over `prior` plus the new outcome instead of trusting whatever
    /// summary was persisted earlier, so a corrupted stored summary heals
    /// itself on the next submission.
    pub fn aggregate(
        kind: AssessmentKind,
        prior: &[Attempt],
        new_result: &ScoredResult,
    ) -> AttemptStats {
        let history = prior.iter().map(|a| (a.percentage, a.status));
        let latest = std::iter::once((new_result.percentage, new_result.status));
        Self::summarize(kind, history.chain(latest))
    }

    fn summarize(
        kind: AssessmentKind,
        outcomes: impl Iterator<Item = (f64, AttemptStatus)>,
    ) -> AttemptStats {
        let mut total_attempts: u64 = 0;
        let mut sum = 0.0;
        let mut passed: u64 = 0;

        for (percentage, status) in outcomes {
            total_attempts += 1;
            sum += percentage;
            if status == AttemptStatus::Passed {
                passed += 1;
            }
        }

        let average_score = if total_attempts > 0 {
            sum / total_attempts as f64
        } else {
            0.0
        };

        let (pass_count, fail_count) = if kind.tracks_pass_counts() {
            (Some(passed), Some(total_attempts - passed))
        } else {
            (None, None)
        };

        AttemptStats {
            total_attempts,
            average_score,
            pass_count,
            fail_count,
        }
    }
}
