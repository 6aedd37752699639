use super::domain::{AssessmentId, AssessmentSubmission, CareerProfile};
use super::scoring::normalize;
use super::service::AssessmentConfig;

/// Validation errors raised by the intake guard.
///
/// Only structurally unusable submissions are rejected here; everything
/// past the guard is scoreable without error. Unknown roles, unknown
/// industries, and empty skill lists all pass (the scorers penalize or
/// fall back, they do not fail).
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("role is required")]
    MissingRole,
    #[error("industry is required")]
    MissingIndustry,
    #[error("resume text exceeds the {max} character intake limit ({found})")]
    ResumeTooLarge { max: usize, found: usize },
}

const DEFAULT_MAX_RESUME_CHARS: usize = 50_000;

/// Policy dial backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    max_resume_chars: usize,
}

impl IntakePolicy {
    pub fn new(max_resume_chars: usize) -> Self {
        let sanitized = if max_resume_chars == 0 {
            DEFAULT_MAX_RESUME_CHARS
        } else {
            max_resume_chars
        };

        Self {
            max_resume_chars: sanitized,
        }
    }

    pub fn max_resume_chars(&self) -> usize {
        self.max_resume_chars
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESUME_CHARS)
    }
}

impl From<&AssessmentConfig> for IntakePolicy {
    fn from(config: &AssessmentConfig) -> Self {
        Self::new(config.max_resume_chars)
    }
}

/// Guard responsible for producing `CareerProfile` instances.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::with_policy(IntakePolicy::default())
    }
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self::with_policy(IntakePolicy::from(config))
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound submission into a normalized career profile.
    pub fn profile_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<CareerProfile, IntakeError> {
        let role = normalize(&submission.role);
        if role.is_empty() {
            return Err(IntakeError::MissingRole);
        }

        let industry = normalize(&submission.industry);
        if industry.is_empty() {
            return Err(IntakeError::MissingIndustry);
        }

        if let Some(resume) = &submission.resume_text {
            if resume.chars().count() > self.policy.max_resume_chars {
                return Err(IntakeError::ResumeTooLarge {
                    max: self.policy.max_resume_chars,
                    found: resume.chars().count(),
                });
            }
        }

        let mut skills = Vec::with_capacity(submission.skills.len());
        for raw in &submission.skills {
            let skill = normalize(raw);
            if !skill.is_empty() && !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        let experience_years = parse_experience_years(&submission.experience_years);

        Ok(CareerProfile {
            assessment_id: AssessmentId("pending".to_string()),
            role,
            industry,
            experience_years,
            skills,
            career_goals: submission.career_goals,
            education: submission.education.map(|value| normalize(&value)),
            location_flexible: submission.location_flexible.unwrap_or(false),
            resume_text: submission.resume_text,
        })
    }
}

/// Parse a free-form experience label ("10", "5+ years", "about 3") into
/// years. Takes the first numeric token; a label with no digits is zero.
pub fn parse_experience_years(label: &str) -> f32 {
    let mut digits = String::new();
    let mut seen_dot = false;

    for ch in label.trim().chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == '.' && !digits.is_empty() && !seen_dot {
            digits.push(ch);
            seen_dot = true;
        } else if !digits.is_empty() {
            break;
        }
    }

    digits.parse::<f32>().unwrap_or(0.0).max(0.0)
}
