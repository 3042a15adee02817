use serde::Serialize;

use super::domain::Dimension;
use super::maturity::level_of;
use super::repository::DiagnosticRecord;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    diagnostic_id: &'a str,
    submitted_at: String,
    overall_score: u8,
    overall_level: &'static str,
    governance_quality: Option<u8>,
    source_integration: Option<u8>,
    analytical_capability: Option<u8>,
    data_driven_decisions: Option<u8>,
    data_roi: Option<u8>,
    monthly_waste: u64,
    monthly_potential: u64,
    annual_impact: u64,
}

impl<'a> ExportRow<'a> {
    fn from_record(record: &'a DiagnosticRecord) -> Self {
        let result = &record.result;
        let score = |dimension: Dimension| {
            result
                .dimension_scores
                .iter()
                .find(|entry| entry.dimension == dimension)
                .map(|entry| entry.score)
        };

        Self {
            diagnostic_id: &record.diagnostic_id.0,
            submitted_at: record.submitted_at.to_rfc3339(),
            overall_score: result.overall_score,
            overall_level: level_of(result.overall_score).label(),
            governance_quality: score(Dimension::GovernanceQuality),
            source_integration: score(Dimension::SourceIntegration),
            analytical_capability: score(Dimension::AnalyticalCapability),
            data_driven_decisions: score(Dimension::DataDrivenDecisions),
            data_roi: score(Dimension::DataRoi),
            monthly_waste: result.monthly_waste,
            monthly_potential: result.monthly_potential,
            annual_impact: result.annual_impact,
        }
    }
}

/// Render stored diagnostics as CSV, one row per submission.
pub fn export_csv(records: &[DiagnosticRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(ExportRow::from_record(record))?;
    }
    if records.is_empty() {
        writer.write_record(HEADER)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Flush(err.to_string()))
}

const HEADER: [&str; 12] = [
    "diagnostic_id",
    "submitted_at",
    "overall_score",
    "overall_level",
    "governance_quality",
    "source_integration",
    "analytical_capability",
    "data_driven_decisions",
    "data_roi",
    "monthly_waste",
    "monthly_potential",
    "annual_impact",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv export could not be finalized: {0}")]
    Flush(String),
}
