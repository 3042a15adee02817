use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{DiagnosticId, DiagnosticSubmission};
use super::error::DiagnosticError;
use super::export::export_csv;
use super::repository::{DiagnosticRepository, RepositoryError};
use super::service::{DiagnosticService, DiagnosticServiceError};

const EXPORT_LIMIT: usize = 500;

/// Router builder exposing the questionnaire and scoring endpoints.
pub fn diagnostic_router<R>(service: Arc<DiagnosticService<R>>) -> Router
where
    R: DiagnosticRepository + 'static,
{
    Router::new()
        .route("/api/v1/diagnostics", post(submit_handler::<R>))
        .route("/api/v1/diagnostics/questions", get(questions_handler::<R>))
        .route("/api/v1/diagnostics/export", get(export_handler::<R>))
        .route("/api/v1/diagnostics/:diagnostic_id", get(record_handler::<R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<DiagnosticService<R>>>,
) -> Response
where
    R: DiagnosticRepository + 'static,
{
    let catalog = service.catalog();
    let payload = json!({
        "version": catalog.version(),
        "questions": catalog.questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<DiagnosticService<R>>>,
    axum::Json(submission): axum::Json<DiagnosticSubmission>,
) -> Response
where
    R: DiagnosticRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(DiagnosticServiceError::Diagnostic(error)) => diagnostic_error_response(&error),
        Err(DiagnosticServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "diagnostic already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<DiagnosticService<R>>>,
    Path(diagnostic_id): Path<String>,
) -> Response
where
    R: DiagnosticRepository + 'static,
{
    let id = DiagnosticId(diagnostic_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(DiagnosticServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "diagnostic not found",
                "diagnosticId": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<DiagnosticService<R>>>,
) -> Response
where
    R: DiagnosticRepository + 'static,
{
    let csv = service
        .recent(EXPORT_LIMIT)
        .map_err(|err| err.to_string())
        .and_then(|records| export_csv(&records).map_err(|err| err.to_string()));

    match csv {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"diagnostics.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(message) => {
            let payload = json!({ "error": message });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Field-level payloads for correctable input, a hard failure for wiring errors.
fn diagnostic_error_response(error: &DiagnosticError) -> Response {
    let (status, payload) = match error {
        DiagnosticError::InvalidCompanyInputs { field, problem } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "error": error.to_string(),
                "kind": "invalid_company_inputs",
                "field": field.name(),
                "problem": problem,
            }),
        ),
        DiagnosticError::IncompleteAnswerSet { dimension, missing } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "error": error.to_string(),
                "kind": "incomplete_answer_set",
                "dimension": dimension,
                "dimensionLabel": dimension.label(),
                "missingQuestions": missing,
            }),
        ),
        DiagnosticError::InvalidAnswerValue {
            question,
            points,
            allowed,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "error": error.to_string(),
                "kind": "invalid_answer_value",
                "question": question,
                "points": points,
                "allowed": allowed,
            }),
        ),
        DiagnosticError::InvalidQuestionId { id } => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": error.to_string(),
                "kind": "invalid_question_id",
                "question": id,
            }),
        ),
    };

    (status, axum::Json(payload)).into_response()
}
