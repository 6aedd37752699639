use super::super::domain::CareerProfile;
use super::super::scoring::{
    ai_resilience_table, clamp_percent, current_skill_keywords, education_table,
    industry_stability_table,
};
use super::config::ImmunityConfig;
use super::{DimensionKind, DimensionScore};

pub(crate) struct ImmunitySignals {
    pub ai_resilience: f32,
    pub industry_stability: f32,
    pub current_skill_hits: usize,
}

const FLEXIBLE_LOCATION_SCORE: f32 = 80.0;
const FIXED_LOCATION_SCORE: f32 = 35.0;

pub(crate) fn score_profile(
    profile: &CareerProfile,
    config: &ImmunityConfig,
) -> (Vec<DimensionScore>, u8, ImmunitySignals) {
    let mut dimensions = Vec::with_capacity(5);

    let ai_resilience = clamp_percent(ai_resilience_table().score_for(&profile.role));
    dimensions.push(DimensionScore {
        kind: DimensionKind::AiResilience,
        score: ai_resilience,
        notes: format!("role '{}' scores {ai_resilience:.0} against AI disruption", profile.role),
    });

    let industry_stability = clamp_percent(industry_stability_table().score_for(&profile.industry));
    dimensions.push(DimensionScore {
        kind: DimensionKind::IndustryStability,
        score: industry_stability,
        notes: format!(
            "industry '{}' stability {industry_stability:.0}",
            profile.industry
        ),
    });

    let geographic = if profile.location_flexible {
        FLEXIBLE_LOCATION_SCORE
    } else {
        FIXED_LOCATION_SCORE
    };
    dimensions.push(DimensionScore {
        kind: DimensionKind::GeographicFlexibility,
        score: geographic,
        notes: if profile.location_flexible {
            "open to relocation or remote work".to_string()
        } else {
            "tied to current location".to_string()
        },
    });

    let current_skill_hits = count_current_skills(&profile.skills);
    let skill_currency = clamp_percent(
        config.skill_currency_base + config.skill_currency_step * current_skill_hits as f32,
    );
    dimensions.push(DimensionScore {
        kind: DimensionKind::SkillCurrency,
        score: skill_currency,
        notes: format!(
            "{current_skill_hits} of {} listed skill(s) are currently in demand",
            profile.skills.len()
        ),
    });

    let education = clamp_percent(
        education_table().score_for(profile.education.as_deref().unwrap_or_default()),
    );
    dimensions.push(DimensionScore {
        kind: DimensionKind::EducationBonus,
        score: education,
        notes: match &profile.education {
            Some(level) => format!("education level '{level}' contributes {education:.0}"),
            None => "no education level supplied; neutral contribution".to_string(),
        },
    });

    let total: f32 = dimensions.iter().map(|dimension| dimension.score).sum();
    let overall = clamp_percent(total / dimensions.len() as f32).round() as u8;

    let signals = ImmunitySignals {
        ai_resilience,
        industry_stability,
        current_skill_hits,
    };

    (dimensions, overall, signals)
}

/// Count listed skills matching the in-demand keyword list. Skills are
/// already normalized; a hit is substring containment in either
/// direction so "aws cloud" matches "cloud".
fn count_current_skills(skills: &[String]) -> usize {
    skills
        .iter()
        .filter(|skill| {
            current_skill_keywords()
                .iter()
                .any(|keyword| skill.contains(keyword) || keyword.contains(skill.as_str()))
        })
        .count()
}
