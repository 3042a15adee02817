use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::QuestionId;
use super::error::DiagnosticError;

/// Selected point-value per question. Absence means "unanswered"; zero is a real answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer; a later answer for the same question replaces the earlier one.
    pub fn answer(&mut self, question: QuestionId, points: u8) -> &mut Self {
        self.answers.insert(question, points);
        self
    }

    pub fn with(mut self, question: QuestionId, points: u8) -> Self {
        self.answer(question, points);
        self
    }

    pub fn get(&self, question: QuestionId) -> Option<u8> {
        self.answers.get(&question).copied()
    }

    pub fn remove(&mut self, question: QuestionId) -> Option<u8> {
        self.answers.remove(&question)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, u8)> + '_ {
        self.answers.iter().map(|(id, points)| (*id, *points))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Check every recorded answer against the catalog's declared option values.
    pub fn validate_against(&self, catalog: &QuestionCatalog) -> Result<(), DiagnosticError> {
        for (id, points) in self.iter() {
            let question = catalog
                .question(id)
                .ok_or(DiagnosticError::InvalidQuestionId { id })?;
            if !question.allows(points) {
                return Err(DiagnosticError::InvalidAnswerValue {
                    question: id,
                    points,
                    allowed: question.allowed_points(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(QuestionId, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, u8)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (question, points) in iter {
            set.answer(question, points);
        }
        set
    }
}
