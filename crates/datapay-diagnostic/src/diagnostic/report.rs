use serde::Serialize;

use super::assembler::DiagnosticResult;
use super::domain::Dimension;
use super::impact::FinancialImpact;
use super::maturity::{rate, MaturityLevel};

/// A score with its maturity classification, ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    pub label: &'static str,
    pub score: u8,
    pub level: MaturityLevel,
    pub level_label: &'static str,
    pub style_hint: &'static str,
}

impl ScoreView {
    fn new(dimension: Option<Dimension>, label: &'static str, score: u8) -> Self {
        let rating = rate(score);
        Self {
            dimension,
            label,
            score,
            level: rating.level,
            level_label: rating.level.label(),
            style_hint: rating.style_hint,
        }
    }
}

/// Presentation summary: six independent classifications plus the money figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub overall: ScoreView,
    pub dimensions: Vec<ScoreView>,
    pub impact: FinancialImpact,
    pub weakest_dimension: Option<Dimension>,
}

impl DiagnosticResult {
    pub fn impact(&self) -> FinancialImpact {
        FinancialImpact {
            monthly_waste: self.monthly_waste,
            monthly_potential: self.monthly_potential,
            annual_impact: self.annual_impact,
        }
    }

    pub fn report(&self) -> DiagnosticReport {
        let dimensions = self
            .dimension_scores
            .iter()
            .map(|entry| {
                ScoreView::new(Some(entry.dimension), entry.dimension.label(), entry.score)
            })
            .collect();

        // Ties resolve to the earliest dimension in questionnaire order.
        let weakest_dimension = self
            .dimension_scores
            .iter()
            .min_by_key(|entry| entry.score)
            .map(|entry| entry.dimension);

        DiagnosticReport {
            overall: ScoreView::new(None, "Overall", self.overall_score),
            dimensions,
            impact: self.impact(),
            weakest_dimension,
        }
    }
}
