use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::common::*;
use crate::workflows::advisory::domain::{AssessmentId, AssessmentStatus};
use crate::workflows::advisory::repository::AssessmentRepository;
use crate::workflows::advisory::service::{AssessmentServiceError, CareerAssessmentService};
use crate::workflows::advisory::RepositoryError;

#[test]
fn submit_assigns_sequential_ids_and_persists() {
    let (service, repository, _) = build_service();

    let first = service.submit(submission()).expect("first submit");
    let second = service.submit(submission()).expect("second submit");

    assert_ne!(first.profile.assessment_id, second.profile.assessment_id);
    assert!(first.profile.assessment_id.0.starts_with("asmt-"));
    assert_eq!(first.status, AssessmentStatus::Submitted);
    assert!(repository
        .fetch(&first.profile.assessment_id)
        .expect("fetch")
        .is_some());
}

#[test]
fn evaluate_scores_and_transitions_status() {
    let (service, repository, alerts) = build_service();
    let record = service.submit(submission()).expect("submit");

    let outcome = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(1))
        .expect("evaluate");

    assert_eq!(outcome.assessment_id, record.profile.assessment_id);
    assert!(outcome.immunity.overall_score <= 100);
    assert!(outcome.risk.point_estimate <= 1.0);
    assert!(outcome.resume.is_none());

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch")
        .expect("record exists");
    assert_eq!(stored.status, AssessmentStatus::Scored);
    assert!(stored.outcome.is_some());
    assert!(alerts.events().is_empty(), "healthy profile should not alert");
}

#[test]
fn flagged_outcomes_publish_a_high_risk_alert() {
    let (service, repository, alerts) = build_service();
    let record = service
        .submit(vulnerable_submission())
        .expect("submit vulnerable");

    let outcome = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(2))
        .expect("evaluate");

    assert!(outcome.immunity.overall_score < assessment_config().immunity.flag_score_threshold);

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch")
        .expect("record exists");
    assert_eq!(stored.status, AssessmentStatus::Flagged);

    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "high_risk_flagged");
    assert_eq!(events[0].assessment_id, record.profile.assessment_id);
    assert!(events[0].details.contains_key("immunity_score"));
}

#[test]
fn evaluate_includes_a_resume_report_when_text_was_supplied() {
    let (service, _, _) = build_service();
    let mut raw = submission();
    raw.resume_text = Some(
        "experience: led and built things. education: bachelors. skills: rust, sql."
            .to_string(),
    );
    let record = service.submit(raw).expect("submit");

    let outcome = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(3))
        .expect("evaluate");

    let report = outcome.resume.expect("resume report present");
    assert!(report.score <= 100);
}

#[test]
fn seeded_evaluations_are_reproducible() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("submit");

    let first = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(9))
        .expect("first evaluate");
    let second = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(9))
        .expect("second evaluate");

    assert_eq!(first.risk, second.risk);
    assert_eq!(first.immunity, second.immunity);
}

#[test]
fn evaluating_an_unknown_id_is_not_found() {
    let (service, _, _) = build_service();

    match service.evaluate_with_rng(
        &AssessmentId("asmt-missing".to_string()),
        &mut StdRng::seed_from_u64(0),
    ) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn submit_surfaces_repository_unavailability() {
    let service = CareerAssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryAlerts::default()),
        assessment_config(),
    );

    match service.submit(submission()) {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
