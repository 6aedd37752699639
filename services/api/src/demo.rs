use crate::infra::{
    default_assessment_config, InMemoryAlertPublisher, InMemoryAssessmentRepository,
};
use career_ai::error::AppError;
use career_ai::workflows::advisory::{
    AssessmentSubmission, CareerAssessmentService, CoachResponder,
};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the random number generator for a reproducible run.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the at-risk profile portion of the demo.
    #[arg(long)]
    pub(crate) skip_flagged: bool,
    /// Print the public status payload as JSON.
    #[arg(long)]
    pub(crate) show_payload: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        skip_flagged,
        show_payload,
    } = args;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Career assessment demo");
    match seed {
        Some(seed) => println!("Random seed: {seed} (reproducible)"),
        None => println!("Random seed: entropy (pass --seed for a reproducible run)"),
    }

    let config = default_assessment_config();
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = Arc::new(CareerAssessmentService::new(
        repository.clone(),
        alerts.clone(),
        config,
    ));

    println!("\nResilient profile (nurse in healthcare)");
    run_assessment(&service, &mut rng, resilient_submission(), show_payload);

    if !skip_flagged {
        println!("\nAt-risk profile (data entry clerk in retail)");
        run_assessment(&service, &mut rng, vulnerable_submission(), show_payload);
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nAdvisor alerts: none dispatched");
    } else {
        println!("\nAdvisor alerts:");
        for alert in events {
            println!("  - template={} -> {}", alert.template, alert.assessment_id.0);
        }
    }

    println!("\nCareer coach samples");
    for question in [
        "How do I negotiate my salary after an offer?",
        "Can you look over my resume?",
        "What should I do with my life?",
    ] {
        let reply = CoachResponder.reply(question, &mut rng);
        println!("  Q: {question}");
        println!("  [{}] {}", reply.topic, reply.reply);
    }

    Ok(())
}

fn run_assessment(
    service: &CareerAssessmentService<InMemoryAssessmentRepository, InMemoryAlertPublisher>,
    rng: &mut StdRng,
    submission: AssessmentSubmission,
    show_payload: bool,
) {
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return;
        }
    };
    println!(
        "- Received assessment {} -> status {}",
        record.profile.assessment_id.0,
        record.status.label()
    );

    let outcome = match service.evaluate_with_rng(&record.profile.assessment_id, rng) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return;
        }
    };

    println!("  Immunity score: {}/100", outcome.immunity.overall_score);
    for dimension in &outcome.immunity.dimensions {
        println!(
            "    - {}: {:.0} ({})",
            dimension.kind.label(),
            dimension.score,
            dimension.notes
        );
    }

    let (lower, upper) = outcome.risk.confidence_interval;
    println!(
        "  Automation risk: {:.1}% (90% interval {:.1}%-{:.1}%, {} trials)",
        outcome.risk.point_estimate * 100.0,
        lower * 100.0,
        upper * 100.0,
        outcome.risk.trials
    );

    if let Some(report) = &outcome.resume {
        println!("  ATS resume score: {}/100", report.score);
        for check in &report.checks {
            println!("    - {}: {:.0} ({})", check.name, check.score, check.notes);
        }
    }

    if outcome.immunity.findings.is_empty() {
        println!("  Findings: none");
    } else {
        println!("  Findings:");
        for finding in &outcome.immunity.findings {
            println!("    - [{:?}] {}: {}", finding.severity, finding.kind, finding.description);
            println!("      {}", finding.recommendation);
        }
    }

    if show_payload {
        let view = match service.get(&record.profile.assessment_id) {
            Ok(record) => record.status_view(),
            Err(err) => {
                println!("  Status lookup unavailable: {}", err);
                return;
            }
        };
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("  Public status payload:\n{}", json),
            Err(err) => println!("  Public status payload unavailable: {}", err),
        }
    }
}

fn resilient_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        role: "Nurse".to_string(),
        industry: "Healthcare".to_string(),
        experience_years: "10".to_string(),
        skills: vec![
            "Patient care".to_string(),
            "Communication".to_string(),
            "Data analysis".to_string(),
            "Leadership".to_string(),
        ],
        career_goals: vec!["Move into nurse management".to_string()],
        education: Some("Bachelors".to_string()),
        location_flexible: Some(true),
        resume_text: Some(demo_resume()),
    }
}

fn vulnerable_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        role: "Data Entry Clerk".to_string(),
        industry: "Retail".to_string(),
        experience_years: "2".to_string(),
        skills: Vec::new(),
        career_goals: Vec::new(),
        education: Some("High School".to_string()),
        location_flexible: Some(false),
        resume_text: None,
    }
}

fn demo_resume() -> String {
    let mut text = String::from(
        "Jordan Rivera\njordan.rivera@example.com | 515-555-0142\n\n\
         Experience\n\
         Charge Nurse, Riverside Medical Center (2019-present)\n\
         - Led a team of 12 nurses across two medical-surgical units\n\
         - Reduced medication administration errors by 35% through a new double-check protocol\n\
         - Coordinated care for 40+ patients per shift during peak census\n\n\
         Staff Nurse, Mercy General Hospital (2014-2019)\n\
         - Delivered bedside care on a 30-bed telemetry unit\n\
         - Implemented a discharge education program that improved follow-up adherence by 20%\n\n\
         Education\n\
         Bachelor of Science in Nursing, State University (2014)\n\n\
         Skills\n\
         Patient care, care coordination, data analysis, team leadership, communication\n",
    );
    // Pad into the word band an ATS parser expects from a full resume.
    for _ in 0..12 {
        text.push_str(
            "Managed interdisciplinary rounds and documented patient outcomes in the \
             electronic health record with consistent accuracy and attention to detail. ",
        );
    }
    text
}
