use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_ai::error::AppError;
use career_ai::workflows::advisory::{
    assessment_router, AlertPublisher, AssessmentRepository, AssessmentSubmission,
    AtsReport, AtsScanner, AutomationRiskEstimator, CareerAssessmentService, CoachReply,
    CoachResponder, IntakeGuard, RiskEstimate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct AutomationRiskRequest {
    pub(crate) role: String,
    pub(crate) industry: String,
    #[serde(default)]
    pub(crate) experience_years: String,
    /// Optional seed for reproducible estimates.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AutomationRiskResponse {
    pub(crate) role: String,
    pub(crate) industry: String,
    pub(crate) base_risk: f64,
    pub(crate) estimate: RiskEstimate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeScanRequest {
    #[serde(default)]
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoachRequest {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn with_advisory_routes<R, A>(
    service: Arc<CareerAssessmentService<R, A>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/risk/automation",
            axum::routing::post(automation_risk_endpoint),
        )
        .route(
            "/api/v1/resume/scan",
            axum::routing::post(resume_scan_endpoint),
        )
        .route(
            "/api/v1/coach/reply",
            axum::routing::post(coach_reply_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// One-shot automation risk estimate without persisting an assessment.
pub(crate) async fn automation_risk_endpoint(
    Json(payload): Json<AutomationRiskRequest>,
) -> Result<Json<AutomationRiskResponse>, AppError> {
    let AutomationRiskRequest {
        role,
        industry,
        experience_years,
        seed,
    } = payload;

    let guard = IntakeGuard::default();
    let profile = guard.profile_from_submission(AssessmentSubmission {
        role,
        industry,
        experience_years,
        skills: Vec::new(),
        career_goals: Vec::new(),
        education: None,
        location_flexible: None,
        resume_text: None,
    })?;

    let estimator = AutomationRiskEstimator::default();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let estimate = estimator.estimate(&profile, &mut rng);

    Ok(Json(AutomationRiskResponse {
        base_risk: estimator.base_risk(&profile),
        role: profile.role,
        industry: profile.industry,
        estimate,
    }))
}

pub(crate) async fn resume_scan_endpoint(
    Json(payload): Json<ResumeScanRequest>,
) -> Json<AtsReport> {
    Json(AtsScanner.scan(&payload.text))
}

pub(crate) async fn coach_reply_endpoint(Json(payload): Json<CoachRequest>) -> Json<CoachReply> {
    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Json(CoachResponder.reply(&payload.message, &mut rng))
}
