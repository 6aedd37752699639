use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AssessmentId, AssessmentStatus, AssessmentSubmission};
use super::repository::{AlertPublisher, AssessmentRepository, RepositoryError};
use super::service::{AssessmentServiceError, CareerAssessmentService};

/// Router builder exposing HTTP endpoints for intake, scoring, and status.
pub fn assessment_router<R, A>(service: Arc<CareerAssessmentService<R, A>>) -> Router
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R, A>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/score",
            post(score_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<CareerAssessmentService<R, A>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
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

pub(crate) async fn score_handler<R, A>(
    State(service): State<Arc<CareerAssessmentService<R, A>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.evaluate(&id) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "assessment not found",
                "assessment_id": id.0,
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

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<CareerAssessmentService<R, A>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "status": AssessmentStatus::Submitted.label(),
                "headline": "pending scoring",
                "immunity_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
