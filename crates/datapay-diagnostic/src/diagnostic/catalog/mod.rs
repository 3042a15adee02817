//! Questionnaire catalog: declarative question data plus load-time validation.
//!
//! The catalog is configuration. It is built once (from the standard table or a CSV file),
//! validated against the dimension classifier, and then shared read-only by every scoring run.

mod import;
mod standard;

pub use import::parse_catalog;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::classifier::{dimension_of, QUESTION_COUNT};
use super::domain::{Dimension, QuestionId};

pub const MAX_POINTS: u8 = 100;

/// One selectable answer and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub points: u8,
    pub label: String,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn allows(&self, points: u8) -> bool {
        self.options.iter().any(|option| option.points == points)
    }

    pub fn allowed_points(&self) -> Vec<u8> {
        self.options.iter().map(|option| option.points).collect()
    }

    pub fn min_points(&self) -> Option<u8> {
        self.options.first().map(|option| option.points)
    }

    pub fn max_points(&self) -> Option<u8> {
        self.options.last().map(|option| option.points)
    }
}

/// Ordered, validated list of questionnaire items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    version: String,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The built-in 20-question diagnostic.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard::VERSION, standard::questions())
    }

    /// Validate and wrap a set of questions, ordering them by id.
    pub fn new(
        version: impl Into<String>,
        mut questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        questions.sort_by_key(|question| question.id);
        validate(&questions)?;

        Ok(Self {
            version: version.into(),
            questions,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions
            .binary_search_by_key(&id, |question| question.id)
            .ok()
            .map(|index| &self.questions[index])
    }

    pub fn by_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.dimension == dimension)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Load-time catalog problems. Any of these keeps the catalog from being used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question {id} is outside the classifier ranges")]
    UnknownQuestion { id: QuestionId },
    #[error("question {id} appears more than once")]
    DuplicateQuestion { id: QuestionId },
    #[error("question {id} is missing from the catalog")]
    MissingQuestion { id: QuestionId },
    #[error("question {id} declares {declared} but its id belongs to {expected}")]
    DimensionMismatch {
        id: QuestionId,
        declared: Dimension,
        expected: Dimension,
    },
    #[error("question {id} has no text")]
    BlankText { id: QuestionId },
    #[error("question {id} has no answer options")]
    NoOptions { id: QuestionId },
    #[error("question {id} options must strictly increase in points")]
    OptionsNotIncreasing { id: QuestionId },
    #[error("question {id} option worth {points} exceeds the 100 point scale")]
    PointsOutOfScale { id: QuestionId, points: u8 },
    #[error("question {id} names unknown dimension '{value}'")]
    UnknownDimension { id: QuestionId, value: String },
    #[error("question {id} rows disagree on {column}")]
    InconsistentRows { id: QuestionId, column: &'static str },
    #[error("catalog csv unreadable: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),
}

fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();

    for question in questions {
        let id = question.id;
        let expected = dimension_of(id).map_err(|_| CatalogError::UnknownQuestion { id })?;
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateQuestion { id });
        }
        if question.dimension != expected {
            return Err(CatalogError::DimensionMismatch {
                id,
                declared: question.dimension,
                expected,
            });
        }
        if question.text.trim().is_empty() {
            return Err(CatalogError::BlankText { id });
        }
        validate_options(question)?;
    }

    // Ranges are contiguous, so 1..=QUESTION_COUNT covers every classifier id.
    for raw in 1..=QUESTION_COUNT as u16 {
        let id = QuestionId(raw);
        if !seen.contains(&id) {
            return Err(CatalogError::MissingQuestion { id });
        }
    }

    Ok(())
}

fn validate_options(question: &Question) -> Result<(), CatalogError> {
    let id = question.id;
    if question.options.is_empty() {
        return Err(CatalogError::NoOptions { id });
    }

    for option in &question.options {
        if option.points > MAX_POINTS {
            return Err(CatalogError::PointsOutOfScale {
                id,
                points: option.points,
            });
        }
    }

    let increasing = question
        .options
        .windows(2)
        .all(|pair| pair[0].points < pair[1].points);
    if !increasing {
        return Err(CatalogError::OptionsNotIncreasing { id });
    }

    Ok(())
}
