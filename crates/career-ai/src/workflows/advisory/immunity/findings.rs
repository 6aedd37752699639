use super::super::domain::{CareerProfile, Finding, Severity};
use super::config::ImmunityConfig;
use super::rules::ImmunitySignals;
use super::{DimensionKind, DimensionScore};

/// Evaluate the qualitative flag predicates against a scored profile.
///
/// Each predicate runs once, independently, and findings are appended in
/// declaration order. The list is never re-sorted by severity; clients
/// rely on the stable ordering.
pub(crate) fn collect_findings(
    profile: &CareerProfile,
    config: &ImmunityConfig,
    dimensions: &[DimensionScore],
    signals: &ImmunitySignals,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if profile.skills.len() < config.min_skill_count {
        findings.push(Finding::new(
            "Limited Skill Set",
            Severity::High,
            format!(
                "Only {} skill(s) listed; fewer than {} makes a profile brittle",
                profile.skills.len(),
                config.min_skill_count
            ),
            "Add at least three marketable skills, prioritizing ones adjacent to your current role",
        ));
    }

    if signals.ai_resilience < config.low_dimension_threshold {
        findings.push(Finding::new(
            "High Automation Exposure",
            Severity::High,
            format!(
                "Role '{}' sits in the most automatable band ({:.0}/100)",
                profile.role, signals.ai_resilience
            ),
            "Shift toward tasks requiring judgment, relationships, or physical presence",
        ));
    }

    if signals.industry_stability < config.low_dimension_threshold {
        findings.push(Finding::new(
            "Volatile Industry",
            Severity::Medium,
            format!(
                "Industry '{}' scores {:.0}/100 for stability",
                profile.industry, signals.industry_stability
            ),
            "Build transferable skills that survive an industry downturn",
        ));
    }

    if !profile.location_flexible {
        findings.push(Finding::new(
            "Geographic Lock-In",
            Severity::Medium,
            "Profile is tied to one location, shrinking the reachable job market",
            "Consider remote-friendly roles or document willingness to relocate",
        ));
    }

    if signals.current_skill_hits == 0 {
        findings.push(Finding::new(
            "Stale Skill Profile",
            Severity::Medium,
            "None of the listed skills appear on the current in-demand list",
            "Pick one in-demand skill and schedule deliberate practice this quarter",
        ));
    }

    for dimension in dimensions {
        if dimension.score >= config.strong_dimension_threshold {
            findings.push(Finding::new(
                format!("{} Strength", dimension.kind.label()),
                Severity::Low,
                dimension.notes.clone(),
                "Keep investing here; it anchors your overall immunity",
            ));
        }
    }

    findings
}

impl DimensionKind {
    pub const fn label(self) -> &'static str {
        match self {
            DimensionKind::AiResilience => "AI Resilience",
            DimensionKind::IndustryStability => "Industry Stability",
            DimensionKind::GeographicFlexibility => "Geographic Flexibility",
            DimensionKind::SkillCurrency => "Skill Currency",
            DimensionKind::EducationBonus => "Education",
        }
    }
}
