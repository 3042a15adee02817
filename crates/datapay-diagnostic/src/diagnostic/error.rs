use serde::Serialize;

use super::domain::{Dimension, QuestionId};
use super::impact::CompanyField;

/// Terminal failures of a single scoring run. None of them is recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    #[error("question id {id} is not part of the questionnaire")]
    InvalidQuestionId { id: QuestionId },
    #[error("answers incomplete for {dimension}: missing question(s) {}", join_ids(.missing))]
    IncompleteAnswerSet {
        dimension: Dimension,
        missing: Vec<QuestionId>,
    },
    #[error("company input `{}` {problem}", field_name(.field))]
    InvalidCompanyInputs {
        field: CompanyField,
        problem: InputProblem,
    },
    #[error("{points} is not an option for question {question} ({})", join_points(.allowed))]
    InvalidAnswerValue {
        question: QuestionId,
        points: u8,
        allowed: Vec<u8>,
    },
}

impl DiagnosticError {
    /// Validation failures the host can map back onto a form field or question.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, DiagnosticError::InvalidQuestionId { .. })
    }
}

/// Why a company input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputProblem {
    #[error("is required")]
    Missing,
    #[error("must be a whole number (got '{raw}')")]
    NotAnInteger { raw: String },
    #[error("must not be negative (got {value})")]
    Negative { value: i64 },
    #[error("must be between 0 and {max} (got {value})")]
    OutOfRange { value: u64, max: u64 },
}

fn field_name(field: &CompanyField) -> &'static str {
    field.name()
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_points(points: &[u8]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
