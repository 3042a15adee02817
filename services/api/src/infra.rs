use datapay_diagnostic::diagnostic::{
    DiagnosticId, DiagnosticRecord, DiagnosticRepository, QuestionCatalog, RepositoryError,
};
use datapay_diagnostic::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local sink. Keeps insertion order so exports list the newest submissions first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDiagnosticRepository {
    inner: Arc<Mutex<RecordStore>>,
}

#[derive(Default)]
struct RecordStore {
    records: HashMap<DiagnosticId, DiagnosticRecord>,
    order: Vec<DiagnosticId>,
}

impl DiagnosticRepository for InMemoryDiagnosticRepository {
    fn insert(&self, record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        if guard.records.contains_key(&record.diagnostic_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.order.push(record.diagnostic_id.clone());
        guard
            .records
            .insert(record.diagnostic_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard
            .order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| guard.records.get(id).cloned())
            .collect())
    }
}

/// Built-in questionnaire unless a CSV catalog is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Arc<QuestionCatalog>, AppError> {
    let catalog = match path {
        Some(path) => QuestionCatalog::from_path(path)?,
        None => QuestionCatalog::standard()?,
    };
    Ok(Arc::new(catalog))
}
