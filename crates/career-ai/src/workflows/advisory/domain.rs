use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Raw intake payload captured from the client form, prior to validation.
///
/// `experience_years` arrives as a free-form label ("10", "5+ years") and
/// is parsed during intake; an unparseable label is treated as zero years
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub role: String,
    pub industry: String,
    #[serde(default)]
    pub experience_years: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub location_flexible: Option<bool>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// The sanitized, normalized profile the scoring engines consume.
///
/// Role, industry, and skills are trimmed and lowercased so table lookups
/// behave identically regardless of form input casing. An empty skills
/// list is a valid, scoreable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub assessment_id: AssessmentId,
    pub role: String,
    pub industry: String,
    pub experience_years: f32,
    pub skills: Vec<String>,
    pub career_goals: Vec<String>,
    pub education: Option<String>,
    pub location_flexible: bool,
    pub resume_text: Option<String>,
}

/// Severity attached to a qualitative finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Qualitative flag emitted by the rule aggregators (vulnerability,
/// booster, or suggestion) with a fixed recommendation string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

impl Finding {
    pub fn new(
        kind: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            severity,
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// High level status tracked throughout the assessment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Submitted,
    Scored,
    Flagged,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Scored => "scored",
            AssessmentStatus::Flagged => "flagged",
        }
    }
}
