//! Feature scoring primitives shared by the advisory engines.
//!
//! Every categorical input flows through a [`ScoreTable`]: a fixed,
//! hand-authored lookup with a documented fallback. Unknown input never
//! fails a scan; it silently scores the fallback so free-text form fields
//! cannot block the caller.

mod tables;

pub use tables::{
    ats_keywords, current_skill_keywords, resume_action_verbs, resume_section_headers,
    ai_resilience_table, education_table, industry_modifier_table, industry_stability_table,
    role_risk_table,
};

/// Trim and lowercase a categorical input so table lookups are
/// case-insensitive.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Fixed lookup table mapping a normalized categorical value to a
/// sub-score, with a fallback for keys outside the table.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    entries: &'static [(&'static str, f32)],
    fallback: f32,
}

impl ScoreTable {
    pub const fn new(entries: &'static [(&'static str, f32)], fallback: f32) -> Self {
        Self { entries, fallback }
    }

    /// Look up `raw` after normalization; absent keys score the fallback.
    pub fn score_for(&self, raw: &str) -> f32 {
        let key = normalize(raw);
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, score)| *score)
            .unwrap_or(self.fallback)
    }

    pub const fn fallback(&self) -> f32 {
        self.fallback
    }
}

/// Clamp a percentage-scale sub-score to [0, 100].
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: ScoreTable = ScoreTable::new(&[("nurse", 0.25), ("cashier", 0.85)], 0.5);

    #[test]
    fn known_keys_score_their_entry() {
        assert_eq!(TABLE.score_for("nurse"), 0.25);
        assert_eq!(TABLE.score_for("cashier"), 0.85);
    }

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        assert_eq!(TABLE.score_for("  Nurse "), 0.25);
        assert_eq!(TABLE.score_for("CASHIER"), 0.85);
    }

    #[test]
    fn unknown_keys_score_the_fallback() {
        assert_eq!(TABLE.score_for("underwater basket weaver"), 0.5);
        assert_eq!(TABLE.score_for(""), 0.5);
    }

    #[test]
    fn percent_clamp_bounds_sub_scores() {
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
    }
}
