use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::error::DiagnosticError;
use super::impact::{estimate_impact, CompanyInputs};
use super::scoring::{aggregate, DimensionScore};

/// Assembled diagnostic. Field names are the contract with the persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub overall_score: u8,
    pub dimension_scores: Vec<DimensionScore>,
    pub monthly_waste: u64,
    pub monthly_potential: u64,
    pub annual_impact: u64,
    pub answers: AnswerSet,
    pub company_inputs: CompanyInputs,
}

/// Score a completed questionnaire against `catalog`. All-or-nothing.
pub fn assemble(
    catalog: &QuestionCatalog,
    answers: AnswerSet,
    inputs: CompanyInputs,
) -> Result<DiagnosticResult, DiagnosticError> {
    answers.validate_against(catalog)?;
    let summary = aggregate(&answers)?;
    let impact = estimate_impact(&inputs)?;

    Ok(DiagnosticResult {
        overall_score: summary.overall_score,
        dimension_scores: summary.dimension_scores,
        monthly_waste: impact.monthly_waste,
        monthly_potential: impact.monthly_potential,
        annual_impact: impact.annual_impact,
        answers,
        company_inputs: inputs,
    })
}

/// Stateless engine bound to a validated catalog.
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    catalog: Arc<QuestionCatalog>,
}

impl DiagnosticEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn assemble(
        &self,
        answers: AnswerSet,
        inputs: CompanyInputs,
    ) -> Result<DiagnosticResult, DiagnosticError> {
        assemble(&self.catalog, answers, inputs)
    }
}
