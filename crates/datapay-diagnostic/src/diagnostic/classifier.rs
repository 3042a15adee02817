use std::ops::RangeInclusive;

use super::domain::{Dimension, QuestionId};
use super::error::DiagnosticError;

pub const QUESTIONS_PER_DIMENSION: usize = 4;
pub const QUESTION_COUNT: usize = QUESTIONS_PER_DIMENSION * Dimension::ALL.len();

/// Contiguous id ranges per dimension. The catalog ordering must match this table.
static DIMENSION_RANGES: [(RangeInclusive<u16>, Dimension); 5] = [
    (1..=4, Dimension::GovernanceQuality),
    (5..=8, Dimension::SourceIntegration),
    (9..=12, Dimension::AnalyticalCapability),
    (13..=16, Dimension::DataDrivenDecisions),
    (17..=20, Dimension::DataRoi),
];

/// Classify a question id into its dimension.
pub fn dimension_of(id: QuestionId) -> Result<Dimension, DiagnosticError> {
    DIMENSION_RANGES
        .iter()
        .find(|(range, _)| range.contains(&id.0))
        .map(|(_, dimension)| *dimension)
        .ok_or(DiagnosticError::InvalidQuestionId { id })
}

/// Question ids scored under `dimension`, ascending.
pub fn question_ids(dimension: Dimension) -> impl Iterator<Item = QuestionId> {
    DIMENSION_RANGES
        .iter()
        .filter(move |(_, candidate)| *candidate == dimension)
        .flat_map(|(range, _)| range.clone())
        .map(QuestionId)
}
