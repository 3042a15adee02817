use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::classifier::{dimension_of, question_ids};
use super::domain::{Dimension, QuestionId};
use super::error::DiagnosticError;

/// Rounded 0-100 maturity score for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u8,
}

/// Output of the aggregator: one score per dimension plus the overall index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub overall_score: u8,
    pub dimension_scores: Vec<DimensionScore>,
}

impl ScoreSummary {
    pub fn score_for(&self, dimension: Dimension) -> Option<u8> {
        self.dimension_scores
            .iter()
            .find(|entry| entry.dimension == dimension)
            .map(|entry| entry.score)
    }
}

/// Reduce a complete answer set into dimension scores and the overall score.
///
/// The overall score is the rounded mean of the already-rounded dimension scores, not the
/// mean of the twenty raw answers. The two can differ by one point.
pub fn aggregate(answers: &AnswerSet) -> Result<ScoreSummary, DiagnosticError> {
    for (id, _) in answers.iter() {
        dimension_of(id)?;
    }

    let mut dimension_scores = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        let mut missing: Vec<QuestionId> = Vec::new();
        let mut points = Vec::new();
        for id in question_ids(dimension) {
            match answers.get(id) {
                Some(value) => points.push(u32::from(value)),
                None => missing.push(id),
            }
        }

        if !missing.is_empty() {
            return Err(DiagnosticError::IncompleteAnswerSet { dimension, missing });
        }

        let score =
            rounded_mean(&points).ok_or_else(|| DiagnosticError::IncompleteAnswerSet {
                dimension,
                missing: question_ids(dimension).collect(),
            })?;
        dimension_scores.push(DimensionScore { dimension, score });
    }

    let rounded: Vec<u32> = dimension_scores
        .iter()
        .map(|entry| u32::from(entry.score))
        .collect();

    let Some(overall_score) = rounded_mean(&rounded) else {
        return Err(DiagnosticError::IncompleteAnswerSet {
            dimension: Dimension::GovernanceQuality,
            missing: question_ids(Dimension::GovernanceQuality).collect(),
        });
    };

    Ok(ScoreSummary {
        overall_score,
        dimension_scores,
    })
}

/// Mean rounded half away from zero, in integer arithmetic so `.5` is exact.
/// An empty slice has no mean.
pub(crate) fn rounded_mean(values: &[u32]) -> Option<u8> {
    if values.is_empty() {
        return None;
    }
    let sum: u32 = values.iter().sum();
    let count = values.len() as u32;
    let rounded = (2 * sum + count) / (2 * count);
    Some(rounded.min(u32::from(u8::MAX)) as u8)
}
