//! Integration scenarios for the diagnostic scoring workflow.
//!
//! Scenarios drive the public engine, service facade, and HTTP router so catalog import,
//! scoring, impact estimation, and persistence hand-off are validated end to end.

mod common {
    use std::sync::{Arc, Mutex};

    use datapay_diagnostic::diagnostic::{
        parse_catalog, AnswerSet, CompanyInputsForm, DiagnosticId, DiagnosticRecord,
        DiagnosticRepository, DiagnosticSubmission, Dimension, QuestionCatalog, QuestionId,
        RepositoryError,
    };

    /// Three-step catalog: every question offers 0, 50 and 100 points.
    pub(super) fn three_step_catalog_csv() -> String {
        let mut csv = String::from("id,dimension,text,points,label\n");
        for id in 1..=20u16 {
            let dimension = Dimension::ALL[usize::from((id - 1) / 4)];
            for (points, label) in [(0, "No"), (50, "Partly"), (100, "Yes")] {
                csv.push_str(&format!(
                    "{id},{},Question {id},{points},{label}\n",
                    dimension.label()
                ));
            }
        }
        csv
    }

    pub(super) fn three_step_catalog() -> Arc<QuestionCatalog> {
        let csv = three_step_catalog_csv();
        Arc::new(parse_catalog(csv.as_bytes(), "three-step").expect("catalog parses"))
    }

    pub(super) fn uniform_answers(points: u8) -> AnswerSet {
        (1..=20u16).map(|id| (QuestionId(id), points)).collect()
    }

    pub(super) fn company() -> CompanyInputsForm {
        CompanyInputsForm {
            active_customers: Some("2000".to_string()),
            monthly_marketing_spend: Some("10001".to_string()),
            average_ticket: Some("99".to_string()),
            ..CompanyInputsForm::default()
        }
    }

    pub(super) fn submission(points: u8) -> DiagnosticSubmission {
        DiagnosticSubmission {
            company: company(),
            answers: uniform_answers(points),
        }
    }

    #[derive(Default)]
    pub(super) struct RecordingRepository {
        pub(super) records: Mutex<Vec<DiagnosticRecord>>,
    }

    impl DiagnosticRepository for RecordingRepository {
        fn insert(&self, record: DiagnosticRecord) -> Result<DiagnosticRecord, RepositoryError> {
            self.records
                .lock()
                .expect("repository mutex poisoned")
                .push(record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &DiagnosticId) -> Result<Option<DiagnosticRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("repository mutex poisoned")
                .iter()
                .find(|record| &record.diagnostic_id == id)
                .cloned())
        }

        fn recent(&self, limit: usize) -> Result<Vec<DiagnosticRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("repository mutex poisoned")
                .iter()
                .rev()
                .take(limit)
                .cloned()
                .collect())
        }
    }
}

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use datapay_diagnostic::diagnostic::{
    assemble, diagnostic_router, CompanyInputs, DiagnosticEngine, DiagnosticService,
    MaturityLevel, QuestionCatalog, QuestionId,
};
use serde_json::Value;
use tower::ServiceExt;

use common::*;

#[test]
fn imported_catalog_scores_like_the_standard_one() {
    let catalog = three_step_catalog();
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.version(), "three-step");

    let inputs = CompanyInputs::new(2_000, 10_001, 99);
    let result = assemble(&catalog, uniform_answers(50), inputs).expect("assembles");

    assert_eq!(result.overall_score, 50);
    assert!(result
        .dimension_scores
        .iter()
        .all(|entry| entry.score == 50));
    // 10_001 * 0.30 = 3000.3 -> 3000; 2000 * 99 * 0.0035 = 693.
    assert_eq!(result.monthly_waste, 3_000);
    assert_eq!(result.monthly_potential, 693);
    assert_eq!(result.annual_impact, 44_316);

    let report = result.report();
    assert_eq!(report.overall.level, MaturityLevel::Basic);
}

#[test]
fn standard_catalog_rejects_three_step_answers() {
    let engine = DiagnosticEngine::new(Arc::new(
        QuestionCatalog::standard().expect("standard catalog"),
    ));
    let error = engine
        .assemble(uniform_answers(50), CompanyInputs::new(1, 1, 1))
        .expect_err("50 is not on the four step scale");
    assert!(error.to_string().contains("question 6"));
}

#[tokio::test]
async fn http_round_trip_stores_and_serves_the_diagnostic() {
    let repository = Arc::new(RecordingRepository::default());
    let service = Arc::new(DiagnosticService::new(
        repository.clone(),
        three_step_catalog(),
    ));
    let router = diagnostic_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/diagnostics")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&submission(100)).expect("serialize"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let created: Value = serde_json::from_slice(&body).expect("json payload");
    let id = created["diagnosticId"]
        .as_str()
        .expect("diagnostic id")
        .to_string();

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].result.overall_score, 100);
    assert_eq!(stored[0].result.company_inputs.inactive_customers, None);

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/diagnostics/{id}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let fetched: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(fetched["report"]["overall"]["level"], "advanced");
    assert_eq!(fetched["report"]["impact"]["annualImpact"], 44_316);
}

#[tokio::test]
async fn rejected_submission_is_not_persisted() {
    let repository = Arc::new(RecordingRepository::default());
    let service = Arc::new(DiagnosticService::new(
        repository.clone(),
        three_step_catalog(),
    ));

    let mut incomplete = submission(50);
    incomplete.answers.remove(QuestionId(5));

    let response = diagnostic_router(service)
        .oneshot(
            Request::post("/api/v1/diagnostics")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&incomplete).expect("serialize"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}
