use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentStatus, CareerProfile};
use super::service::AssessmentOutcome;

/// Repository record containing the profile, outcome, and status metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub profile: CareerProfile,
    pub status: AssessmentStatus,
    pub outcome: Option<AssessmentOutcome>,
    pub submitted_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn headline(&self) -> String {
        match &self.outcome {
            Some(outcome) => format!(
                "immunity {}/100, automation risk {:.0}%",
                outcome.immunity.overall_score,
                outcome.risk.point_estimate * 100.0
            ),
            None => "pending scoring".to_string(),
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.profile.assessment_id.clone(),
            status: self.status.label(),
            headline: self.headline(),
            immunity_score: self
                .outcome
                .as_ref()
                .map(|outcome| outcome.immunity.overall_score),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn flagged(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
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

/// Trait describing outbound alert hooks (e.g., digest e-mail adapters).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: AdvisorAlert) -> Result<(), AlertError>;
}

/// Simple alert payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorAlert {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub status: &'static str,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immunity_score: Option<u8>,
}
