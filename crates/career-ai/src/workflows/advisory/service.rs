use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::automation::{AutomationRiskConfig, AutomationRiskEstimator, RiskEstimate};
use super::domain::{AssessmentId, AssessmentStatus, AssessmentSubmission};
use super::immunity::{ImmunityConfig, ImmunityEngine, ImmunityOutcome};
use super::intake::{IntakeError, IntakeGuard};
use super::repository::{
    AdvisorAlert, AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository,
    RepositoryError,
};
use super::resume::{AtsReport, AtsScanner};

/// Bundled engine configuration the service is constructed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub immunity: ImmunityConfig,
    pub automation: AutomationRiskConfig,
    pub max_resume_chars: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            immunity: ImmunityConfig::default(),
            automation: AutomationRiskConfig::default(),
            max_resume_chars: 50_000,
        }
    }
}

/// Combined scoring output persisted with the assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub assessment_id: AssessmentId,
    pub immunity: ImmunityOutcome,
    pub risk: RiskEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<AtsReport>,
}

/// Service composing the intake guard, repository, and scoring engines.
pub struct CareerAssessmentService<R, A> {
    guard: IntakeGuard,
    repository: Arc<R>,
    alerts: Arc<A>,
    immunity: ImmunityEngine,
    estimator: AutomationRiskEstimator,
    scanner: AtsScanner,
    flag_threshold: u8,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R, A> CareerAssessmentService<R, A>
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, config: AssessmentConfig) -> Self {
        let guard = IntakeGuard::from_config(&config);
        let flag_threshold = config.immunity.flag_score_threshold;

        Self {
            guard,
            repository,
            alerts,
            immunity: ImmunityEngine::new(config.immunity),
            estimator: AutomationRiskEstimator::new(config.automation),
            scanner: AtsScanner,
            flag_threshold,
        }
    }

    /// Submit a new assessment, returning the repository-backed record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut profile = self.guard.profile_from_submission(submission)?;
        let assessment_id = next_assessment_id();
        profile.assessment_id = assessment_id.clone();

        let record = AssessmentRecord {
            profile,
            status: AssessmentStatus::Submitted,
            outcome: None,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(assessment_id = %assessment_id.0, "assessment submitted");
        Ok(stored)
    }

    /// Score a pending assessment with a fresh entropy-seeded RNG.
    pub fn evaluate(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentOutcome, AssessmentServiceError> {
        self.evaluate_with_rng(assessment_id, &mut StdRng::from_entropy())
    }

    /// Score a pending assessment with the supplied random source and
    /// persist the outcome. Seeded callers get reproducible estimates.
    pub fn evaluate_with_rng<G: Rng>(
        &self,
        assessment_id: &AssessmentId,
        rng: &mut G,
    ) -> Result<AssessmentOutcome, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let immunity = self.immunity.score(&record.profile);
        let risk = self.estimator.estimate(&record.profile, rng);
        let resume = record
            .profile
            .resume_text
            .as_deref()
            .map(|text| self.scanner.scan(text));

        let outcome = AssessmentOutcome {
            assessment_id: record.profile.assessment_id.clone(),
            immunity,
            risk,
            resume,
        };

        let flagged = outcome.immunity.overall_score < self.flag_threshold;
        record.status = if flagged {
            AssessmentStatus::Flagged
        } else {
            AssessmentStatus::Scored
        };
        record.outcome = Some(outcome.clone());

        self.repository.update(record)?;
        info!(
            assessment_id = %outcome.assessment_id.0,
            immunity = outcome.immunity.overall_score,
            risk = outcome.risk.point_estimate,
            flagged,
            "assessment scored"
        );

        if flagged {
            let mut details = BTreeMap::new();
            details.insert(
                "immunity_score".to_string(),
                outcome.immunity.overall_score.to_string(),
            );
            if let Some(finding) = outcome.immunity.findings.first() {
                details.insert("top_finding".to_string(), finding.kind.clone());
            }
            self.alerts.publish(AdvisorAlert {
                template: "high_risk_flagged".to_string(),
                assessment_id: outcome.assessment_id.clone(),
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Fetch an assessment and current status for API responses.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
