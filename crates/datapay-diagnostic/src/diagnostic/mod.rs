//! Data maturity diagnostic: questionnaire catalog, scoring, financial impact, and the
//! service/router pair that hands assembled results to a persistence sink.
//!
//! The scoring pipeline (`classifier` → `scoring` → `maturity` → `impact` → `assembler`) is
//! pure and synchronous. Everything with side effects lives in `service`, `repository`, and
//! `router`.

pub mod answers;
pub mod assembler;
pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod error;
pub mod export;
pub mod impact;
pub mod maturity;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use assembler::{assemble, DiagnosticEngine, DiagnosticResult};
pub use catalog::{parse_catalog, AnswerOption, CatalogError, Question, QuestionCatalog};
pub use classifier::{dimension_of, question_ids, QUESTIONS_PER_DIMENSION, QUESTION_COUNT};
pub use domain::{DiagnosticId, DiagnosticSubmission, Dimension, QuestionId};
pub use error::{DiagnosticError, InputProblem};
pub use export::{export_csv, ExportError};
pub use impact::{estimate_impact, CompanyField, CompanyInputs, CompanyInputsForm, FinancialImpact};
pub use maturity::{level_of, rate, MaturityLevel, MaturityRating};
pub use report::{DiagnosticReport, ScoreView};
pub use repository::{DiagnosticRecord, DiagnosticRecordView, DiagnosticRepository, RepositoryError};
pub use router::diagnostic_router;
pub use scoring::{aggregate, DimensionScore, ScoreSummary};
pub use service::{DiagnosticService, DiagnosticServiceError};
