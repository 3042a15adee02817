use std::fmt;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::impact::CompanyInputsForm;

/// Catalog question identifier (1..=20 for the standard questionnaire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u16);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a stored diagnostic submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticId(pub String);

/// A completed questionnaire as the host form posts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSubmission {
    pub company: CompanyInputsForm,
    pub answers: AnswerSet,
}

/// The five business-maturity dimensions, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    GovernanceQuality,
    SourceIntegration,
    AnalyticalCapability,
    DataDrivenDecisions,
    DataRoi,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::GovernanceQuality,
        Dimension::SourceIntegration,
        Dimension::AnalyticalCapability,
        Dimension::DataDrivenDecisions,
        Dimension::DataRoi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::GovernanceQuality => "Governance & Quality",
            Dimension::SourceIntegration => "Source Integration",
            Dimension::AnalyticalCapability => "Analytical Capability",
            Dimension::DataDrivenDecisions => "Data-Driven Decision-Making",
            Dimension::DataRoi => "ROI on Data",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Dimension::GovernanceQuality => "governance_quality",
            Dimension::SourceIntegration => "source_integration",
            Dimension::AnalyticalCapability => "analytical_capability",
            Dimension::DataDrivenDecisions => "data_driven_decisions",
            Dimension::DataRoi => "data_roi",
        }
    }

    /// Accepts the slug or the display label, ignoring case and `&`/`and` spelling.
    pub fn from_name(value: &str) -> Option<Self> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(" and ", " & ");

        Self::ALL.into_iter().find(|dimension| {
            dimension.slug() == normalized || dimension.label().to_ascii_lowercase() == normalized
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
