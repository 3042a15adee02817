use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::assembler::DiagnosticEngine;
use super::catalog::QuestionCatalog;
use super::domain::{DiagnosticId, DiagnosticSubmission};
use super::error::DiagnosticError;
use super::impact::CompanyInputs;
use super::repository::{DiagnosticRecord, DiagnosticRepository, RepositoryError};

/// Service composing input parsing, the scoring engine, and the persistence sink.
pub struct DiagnosticService<R> {
    engine: Arc<DiagnosticEngine>,
    repository: Arc<R>,
    next_sequence: AtomicU64,
}

impl<R> DiagnosticService<R>
where
    R: DiagnosticRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            engine: Arc::new(DiagnosticEngine::new(catalog)),
            repository,
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Continue numbering after `last_issued`, for sinks that outlive the process.
    pub fn resuming_after(self, last_issued: u64) -> Self {
        self.next_sequence.store(last_issued.saturating_add(1), Ordering::Relaxed);
        self
    }

    fn next_diagnostic_id(&self) -> DiagnosticId {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        DiagnosticId(format!("diag-{sequence:06}"))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.engine.catalog()
    }

    /// Score a submission and hand the result to the repository.
    ///
    /// The repository is only called after scoring succeeded, and at most once.
    pub fn submit(
        &self,
        submission: DiagnosticSubmission,
    ) -> Result<DiagnosticRecord, DiagnosticServiceError> {
        let result = CompanyInputs::parse(&submission.company)
            .and_then(|inputs| self.engine.assemble(submission.answers, inputs))
            .map_err(|err| {
                warn!(error = %err, "diagnostic submission rejected");
                err
            })?;

        let record = DiagnosticRecord {
            diagnostic_id: self.next_diagnostic_id(),
            submitted_at: Utc::now(),
            result,
        };

        let stored = self.repository.insert(record).map_err(|err| {
            error!(error = %err, "diagnostic scored but could not be stored");
            err
        })?;

        info!(
            diagnostic_id = %stored.diagnostic_id.0,
            overall_score = stored.result.overall_score,
            annual_impact = stored.result.annual_impact,
            "diagnostic stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &DiagnosticId) -> Result<DiagnosticRecord, DiagnosticServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<DiagnosticRecord>, DiagnosticServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the diagnostic service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticServiceError {
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
