use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::diagnostic::answers::AnswerSet;
use crate::diagnostic::assembler::{assemble, DiagnosticResult};
use crate::diagnostic::catalog::{Question, QuestionCatalog};
use crate::diagnostic::domain::{DiagnosticId, DiagnosticSubmission, QuestionId};
use crate::diagnostic::impact::{CompanyInputs, CompanyInputsForm};
use crate::diagnostic::repository::{DiagnosticRecord, DiagnosticRepository, RepositoryError};
use crate::diagnostic::{diagnostic_router, DiagnosticService};

pub(super) fn catalog() -> Arc<QuestionCatalog> {
    Arc::new(QuestionCatalog::standard().expect("standard catalog validates"))
}

pub(super) fn answers_by(pick: impl Fn(&Question) -> u8) -> AnswerSet {
    catalog()
        .questions()
        .iter()
        .map(|question| (question.id, pick(question)))
        .collect()
}

pub(super) fn minimum_answers() -> AnswerSet {
    answers_by(|question| question.min_points().expect("question has options"))
}

pub(super) fn maximum_answers() -> AnswerSet {
    answers_by(|question| question.max_points().expect("question has options"))
}

/// Answers `points` in question order (index 0 is question 1).
pub(super) fn answers_from(points: [u8; 20]) -> AnswerSet {
    points
        .iter()
        .enumerate()
        .map(|(index, value)| (QuestionId(index as u16 + 1), *value))
        .collect()
}

/// Dimension scores 38/73/88/27/52: the rounded mean of those is 56 while the mean of all
/// twenty answers (55.3) rounds to 55.
pub(super) fn two_stage_rounding_answers() -> AnswerSet {
    answers_from([
        0, 100, 50, 0, // 150 -> 38
        75, 66, 50, 100, // 291 -> 73
        100, 100, 50, 100, // 350 -> 88
        0, 33, 75, 0, // 108 -> 27
        25, 66, 50, 66, // 207 -> 52
    ])
}

/// Governance answered 0/25/50/75 (sum 150, score 38), every other question at its maximum.
pub(super) fn quarter_step_governance_answers() -> AnswerSet {
    maximum_answers()
        .with(QuestionId(1), 0)
        .with(QuestionId(2), 25)
        .with(QuestionId(3), 50)
        .with(QuestionId(4), 75)
}

pub(super) fn reference_inputs() -> CompanyInputs {
    CompanyInputs::new(50_000, 500_000, 250)
}

pub(super) fn reference_form() -> CompanyInputsForm {
    CompanyInputsForm {
        active_customers: Some("50000".to_string()),
        inactive_customers: Some("12000".to_string()),
        monthly_marketing_spend: Some("500000".to_string()),
        average_ticket: Some("250".to_string()),
        repurchase_rate: Some("40".to_string()),
    }
}

pub(super) fn submission() -> DiagnosticSubmission {
    DiagnosticSubmission {
        company: reference_form(),
        answers: two_stage_rounding_answers(),
    }
}

pub(super) fn reference_result() -> DiagnosticResult {
    assemble(&catalog(), two_stage_rounding_answers(), reference_inputs())
        .expect("reference diagnostic assembles")
}

pub(super) fn stored_record(id: &str, result: DiagnosticResult) -> DiagnosticRecord {
    DiagnosticRecord {
        diagnostic_id: DiagnosticId(id.to_string()),
        submitted_at: Utc
            .with_ymd_and_hms(2024, 5, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
        result,
    }
}

pub(super) fn build_service() -> (DiagnosticService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = DiagnosticService::new(repository.clone(), catalog());
    (service, repository)
}

pub(super) fn router_with_service(service: DiagnosticService<MemoryRepository>) -> axum::Router {
    diagnostic_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<DiagnosticRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl DiagnosticRepository for MemoryRepository {
    fn insert(&self, record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.diagnostic_id == record.diagnostic_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.diagnostic_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl DiagnosticRepository for UnavailableRepository {
    fn insert(&self, _record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl DiagnosticRepository for ConflictRepository {
    fn insert(&self, _record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
