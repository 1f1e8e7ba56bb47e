use serde_json::{json, Value};

use crate::models::domain::{Assessment, AssessmentKind, Question};
use crate::models::dto::request::AnswerInput;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Ten-point question answered by a plain string option.
    pub fn string_question(id: &str, correct: &str) -> Question {
        Question::new(id, Value::String(correct.to_string())).with_points(10)
    }

    /// Two-question quiz worth 20 points, with the fixed id `assessment-1`.
    pub fn sample_quiz() -> Assessment {
        let mut assessment = Assessment::new(
            "Sample quiz",
            AssessmentKind::Quiz,
            vec![string_question("q-1", "A"), string_question("q-2", "B")],
        );
        assessment.id = "assessment-1".to_string();
        assessment
    }

    /// Exam over two unweighted questions, with the fixed id `assessment-2`.
    pub fn sample_exam() -> Assessment {
        let mut assessment = Assessment::new(
            "Sample exam",
            AssessmentKind::Exam,
            vec![
                Question::new("q-1", json!("A")),
                Question::new("q-2", json!("B")),
            ],
        );
        assessment.id = "assessment-2".to_string();
        assessment
    }

    /// One correct submission entry per question in the set.
    pub fn correct_answers(assessment: &Assessment) -> Vec<AnswerInput> {
        assessment
            .questions
            .iter()
            .map(|q| AnswerInput::new(&q.id, q.correct_answer.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::AssessmentKind;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.id, "assessment-1");
        assert_eq!(quiz.kind, AssessmentKind::Quiz);
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].points, Some(10));
    }

    #[test]
    fn test_fixtures_sample_exam() {
        let exam = sample_exam();
        assert_eq!(exam.kind, AssessmentKind::Exam);
        assert!(exam.questions.iter().all(|q| q.points.is_none()));
    }

    #[test]
    fn test_fixtures_correct_answers_cover_every_question() {
        let quiz = sample_quiz();
        let answers = correct_answers(&quiz);

        assert_eq!(answers.len(), quiz.questions.len());
        for (answer, question) in answers.iter().zip(&quiz.questions) {
            assert_eq!(answer.question_id, question.id);
            assert_eq!(answer.selected_option, question.correct_answer);
        }
    }
}
