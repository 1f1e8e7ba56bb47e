use serde_json::Value;

use crate::models::domain::assessment::ScoringPolicy;
use crate::models::domain::question::Question;
use crate::models::domain::scored_result::{AttemptStatus, GradedAnswer, ScoredResult};
use crate::models::dto::request::AnswerInput;

pub struct ScoringService;

impl ScoringService {
    /// Grades one submission against an ordered question set.
    ///
    /// Walks the questions in set order and emits one graded answer per
    /// question, so the output always has exactly one entry per question.
    /// Unanswered questions grade as incorrect with no recorded selection.
    /// Submission entries whose question id is not in the set are ignored.
    /// When the submission carries several entries for one question, the
    /// first one wins; later duplicates are ignored for compatibility with
    /// the data existing clients produce.
    ///
    /// Pure function of its inputs: no I/O, nothing can fail.
    pub fn score(
        questions: &[Question],
        answers: &[AnswerInput],
        policy: &ScoringPolicy,
    ) -> ScoredResult {
        let mut score: u32 = 0;
        let mut total_points: u32 = 0;
        let mut graded = Vec::with_capacity(questions.len());

        for question in questions {
            let points = question.effective_points(policy.default_question_points);
            total_points += points;

            let entry = answers.iter().find(|a| a.question_id == question.id);
            let is_correct = entry.is_some_and(|a| {
                canonical_answer(&a.selected_option) == canonical_answer(&question.correct_answer)
            });

            if is_correct {
                score += points;
            }

            graded.push(GradedAnswer {
                question_id: question.id.clone(),
                selected_option: entry.map(|a| a.selected_option.clone()),
                is_correct,
            });
        }

        let percentage = if total_points > 0 {
            (score as f64 / total_points as f64) * 100.0
        } else {
            0.0
        };

        let status = if percentage >= policy.passing_threshold {
            AttemptStatus::Passed
        } else {
            AttemptStatus::Failed
        };

        ScoredResult {
            score,
            total_points,
            percentage,
            status,
            answers: graded,
        }
    }
}

/// Canonical string form used for answer comparison. The question bank and
/// the clients disagree on option representation (numeric index vs label),
/// so both sides are compared by their string form: `2` equals `"2"`.
/// Arrays coerce element-wise and join with `,`; objects render as compact
/// JSON and in practice never match a stored key.
pub fn canonical_answer(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(canonical_answer)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
