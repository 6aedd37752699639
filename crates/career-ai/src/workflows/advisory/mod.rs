//! Career advisory workflows: intake, the three scoring engines, the
//! coaching responder, and the assessment service wiring them to storage
//! and alert seams.

pub mod automation;
pub mod domain;
pub mod immunity;
pub mod intake;
pub mod repository;
pub mod responder;
pub mod resume;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use automation::{AutomationRiskConfig, AutomationRiskEstimator, RiskEstimate};
pub use domain::{
    AssessmentId, AssessmentStatus, AssessmentSubmission, CareerProfile, Finding, Severity,
};
pub use immunity::{DimensionKind, DimensionScore, ImmunityConfig, ImmunityEngine, ImmunityOutcome};
pub use intake::{IntakeError, IntakeGuard, IntakePolicy};
pub use repository::{
    AdvisorAlert, AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository,
    AssessmentStatusView, RepositoryError,
};
pub use responder::{CoachReply, CoachResponder};
pub use resume::{AtsReport, AtsScanner};
pub use router::assessment_router;
pub use service::{
    AssessmentConfig, AssessmentOutcome, AssessmentServiceError, CareerAssessmentService,
};
