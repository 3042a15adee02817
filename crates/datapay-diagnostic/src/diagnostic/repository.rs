use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assembler::DiagnosticResult;
use super::domain::DiagnosticId;
use super::report::DiagnosticReport;

/// What the persistence sink stores for each scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub diagnostic_id: DiagnosticId,
    pub submitted_at: DateTime<Utc>,
    pub result: DiagnosticResult,
}

impl DiagnosticRecord {
    pub fn view(&self) -> DiagnosticRecordView {
        DiagnosticRecordView {
            diagnostic_id: self.diagnostic_id.clone(),
            submitted_at: self.submitted_at,
            report: self.result.report(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait DiagnosticRepository: Send + Sync {
    fn insert(&self, record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError>;
    fn fetch(&self, id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError>;
    /// Most recent submissions first.
    fn recent(&self, limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Rendered record returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecordView {
    pub diagnostic_id: DiagnosticId,
    pub submitted_at: DateTime<Utc>,
    pub report: DiagnosticReport,
}
