use serde::{Deserialize, Serialize};

/// Rubric configuration for the career-immunity aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmunityConfig {
    /// Fewer listed skills than this emits the Limited Skill Set finding.
    pub min_skill_count: usize,
    /// Dimensions below this threshold emit vulnerability findings.
    pub low_dimension_threshold: f32,
    /// Dimensions at or above this threshold emit booster findings.
    pub strong_dimension_threshold: f32,
    /// Overall scores below this mark the assessment as flagged.
    pub flag_score_threshold: u8,
    /// Base of the skill-currency dimension before keyword hits.
    pub skill_currency_base: f32,
    /// Added per current-skill keyword hit, before clamping.
    pub skill_currency_step: f32,
}

impl Default for ImmunityConfig {
    fn default() -> Self {
        Self {
            min_skill_count: 3,
            low_dimension_threshold: 40.0,
            strong_dimension_threshold: 75.0,
            flag_score_threshold: 40,
            skill_currency_base: 25.0,
            skill_currency_step: 15.0,
        }
    }
}
