mod config;
mod findings;
mod rules;

pub use config::ImmunityConfig;

use super::domain::{AssessmentId, CareerProfile, Finding};
use findings::collect_findings;
use serde::{Deserialize, Serialize};

/// Stateless aggregator applying the immunity rubric to a profile.
///
/// Scoring is a pure function of the profile: identical input yields an
/// identical overall score and an identically ordered findings list.
pub struct ImmunityEngine {
    config: ImmunityConfig,
}

impl Default for ImmunityEngine {
    fn default() -> Self {
        Self::new(ImmunityConfig::default())
    }
}

impl ImmunityEngine {
    pub fn new(config: ImmunityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImmunityConfig {
        &self.config
    }

    pub fn score(&self, profile: &CareerProfile) -> ImmunityOutcome {
        let (dimensions, overall_score, signals) = rules::score_profile(profile, &self.config);
        let findings = collect_findings(profile, &self.config, &dimensions, &signals);

        ImmunityOutcome {
            assessment_id: profile.assessment_id.clone(),
            overall_score,
            dimensions,
            findings,
        }
    }
}

/// One dimension's contribution, kept separate for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub kind: DimensionKind,
    pub score: f32,
    pub notes: String,
}

/// Dimensions permitted in the immunity rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionKind {
    AiResilience,
    IndustryStability,
    GeographicFlexibility,
    SkillCurrency,
    EducationBonus,
}

/// Aggregated immunity output: overall score, per-dimension trail, and
/// the ordered qualitative findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmunityOutcome {
    pub assessment_id: AssessmentId,
    pub overall_score: u8,
    pub dimensions: Vec<DimensionScore>,
    pub findings: Vec<Finding>,
}
