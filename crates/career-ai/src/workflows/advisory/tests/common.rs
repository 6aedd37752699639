use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::advisory::domain::{
    AssessmentId, AssessmentSubmission, CareerProfile,
};
use crate::workflows::advisory::repository::{
    AdvisorAlert, AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository,
    RepositoryError,
};
use crate::workflows::advisory::{
    assessment_router, AssessmentConfig, CareerAssessmentService,
};

pub(super) fn assessment_config() -> AssessmentConfig {
    AssessmentConfig::default()
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        role: "Software Engineer".to_string(),
        industry: "Technology".to_string(),
        experience_years: "8".to_string(),
        skills: vec![
            "Rust".to_string(),
            "Cloud".to_string(),
            "SQL".to_string(),
            "Mentoring".to_string(),
        ],
        career_goals: vec!["staff engineer".to_string()],
        education: Some("Bachelors".to_string()),
        location_flexible: Some(true),
        resume_text: None,
    }
}

pub(super) fn vulnerable_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        role: "Data Entry Clerk".to_string(),
        industry: "Retail".to_string(),
        experience_years: "1".to_string(),
        skills: Vec::new(),
        career_goals: Vec::new(),
        education: Some("High School".to_string()),
        location_flexible: Some(false),
        resume_text: None,
    }
}

pub(super) fn profile(suffix: &str, role: &str, industry: &str, years: f32) -> CareerProfile {
    CareerProfile {
        assessment_id: AssessmentId(format!("asmt-{suffix}")),
        role: role.to_string(),
        industry: industry.to_string(),
        experience_years: years,
        skills: vec!["rust".to_string(), "sql".to_string(), "cloud".to_string()],
        career_goals: Vec::new(),
        education: Some("bachelors".to_string()),
        location_flexible: true,
        resume_text: None,
    }
}

pub(super) fn build_service() -> (
    CareerAssessmentService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service =
        CareerAssessmentService::new(repository.clone(), alerts.clone(), assessment_config());
    (service, repository, alerts)
}

pub(super) fn assessment_router_with_service(
    service: CareerAssessmentService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn flagged(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<AdvisorAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<AdvisorAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: AdvisorAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn flagged(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn flagged(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
