//! End-to-end coverage for the assessment intake and scoring workflow,
//! driven through the public service facade and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use career_ai::workflows::advisory::domain::{AssessmentId, AssessmentSubmission};
    use career_ai::workflows::advisory::repository::{
        AdvisorAlert, AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository,
        RepositoryError,
    };
    use career_ai::workflows::advisory::{AssessmentConfig, CareerAssessmentService};

    pub fn submission() -> AssessmentSubmission {
        AssessmentSubmission {
            role: "Nurse".to_string(),
            industry: "Healthcare".to_string(),
            experience_years: "10".to_string(),
            skills: vec![
                "patient care".to_string(),
                "triage".to_string(),
                "data analysis".to_string(),
            ],
            career_goals: vec!["nurse practitioner".to_string()],
            education: Some("Bachelors".to_string()),
            location_flexible: Some(true),
            resume_text: Some(
                "experience: led a triage team, reduced wait times by 30%.\n\
                 education: bachelors of nursing.\n\
                 skills: patient care, triage, data analysis.\n\
                 contact: rn@example.com 515-555-0100"
                    .to_string(),
            ),
        }
    }

    pub fn at_risk_submission() -> AssessmentSubmission {
        AssessmentSubmission {
            role: "Data Entry Clerk".to_string(),
            industry: "Retail".to_string(),
            experience_years: "junior".to_string(),
            skills: Vec::new(),
            career_goals: Vec::new(),
            education: Some("High School".to_string()),
            location_flexible: Some(false),
            resume_text: None,
        }
    }

    pub fn build_service() -> (
        Arc<CareerAssessmentService<MemoryRepository, MemoryAlerts>>,
        Arc<MemoryRepository>,
        Arc<MemoryAlerts>,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let alerts = Arc::new(MemoryAlerts::default());
        let service = Arc::new(CareerAssessmentService::new(
            repository.clone(),
            alerts.clone(),
            AssessmentConfig::default(),
        ));
        (service, repository, alerts)
    }

    #[derive(Default, Clone)]
    pub struct MemoryRepository {
        records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
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

        fn flagged(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard
                .values()
                .filter(|record| {
                    record.status == career_ai::workflows::advisory::AssessmentStatus::Flagged
                })
                .take(limit)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MemoryAlerts {
        events: Arc<Mutex<Vec<AdvisorAlert>>>,
    }

    impl MemoryAlerts {
        pub fn events(&self) -> Vec<AdvisorAlert> {
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
}

use common::{at_risk_submission, build_service, submission};
use rand::rngs::StdRng;
use rand::SeedableRng;

use career_ai::workflows::advisory::domain::{AssessmentStatus, Severity};
use career_ai::workflows::advisory::repository::AssessmentRepository;

#[test]
fn full_workflow_scores_a_healthy_profile_without_alerts() {
    let (service, repository, alerts) = build_service();

    let record = service.submit(submission()).expect("submission accepted");
    let outcome = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(21))
        .expect("evaluation succeeds");

    // Nurse in healthcare with a decade of experience: low automation
    // risk and a solid immunity score.
    assert!(outcome.risk.point_estimate < 0.3);
    let (lower, upper) = outcome.risk.confidence_interval;
    assert!(lower <= outcome.risk.point_estimate && outcome.risk.point_estimate <= upper);
    assert!(outcome.immunity.overall_score > 40);

    let report = outcome.resume.expect("resume report generated");
    assert!(report.score > 0);

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch succeeds")
        .expect("record exists");
    assert_eq!(stored.status, AssessmentStatus::Scored);
    assert!(alerts.events().is_empty());
}

#[test]
fn full_workflow_flags_an_at_risk_profile_and_alerts() {
    let (service, repository, alerts) = build_service();

    let record = service
        .submit(at_risk_submission())
        .expect("submission accepted");
    let outcome = service
        .evaluate_with_rng(&record.profile.assessment_id, &mut StdRng::seed_from_u64(22))
        .expect("evaluation succeeds");

    assert!(
        outcome
            .immunity
            .findings
            .iter()
            .any(|finding| finding.kind == "Limited Skill Set"
                && finding.severity == Severity::High),
        "empty skill list must produce the high severity finding"
    );

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch succeeds")
        .expect("record exists");
    assert_eq!(stored.status, AssessmentStatus::Flagged);
    assert_eq!(repository.flagged(10).expect("flagged query").len(), 1);

    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "high_risk_flagged");
}

#[test]
fn unparseable_experience_labels_score_as_zero_years() {
    let (service, _, _) = build_service();

    let record = service
        .submit(at_risk_submission())
        .expect("submission accepted");

    assert_eq!(record.profile.experience_years, 0.0);
}
