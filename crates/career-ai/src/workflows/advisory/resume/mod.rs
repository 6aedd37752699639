//! ATS-style resume scanner.
//!
//! Runs a fixed list of text checks (case-insensitive substring matching,
//! no parsing) and aggregates the clamped sub-scores into a 0-100 score.
//! Empty or unrecognizable text is a valid, scoreable state; it bottoms
//! out the checks and emits findings rather than erroring.

use serde::{Deserialize, Serialize};

use super::domain::{Finding, Severity};
use super::scoring::{
    ats_keywords, clamp_percent, current_skill_keywords, normalize, resume_action_verbs,
    resume_section_headers,
};

/// Word-count band an ATS typically tolerates.
const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 250..=800;
const TOLERABLE_WORDS: std::ops::RangeInclusive<usize> = 100..=1200;

/// One check's contribution to the resume score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCheck {
    pub name: String,
    pub score: f32,
    pub notes: String,
}

/// Scanner output: rounded mean of the checks plus ordered findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u8,
    pub checks: Vec<AtsCheck>,
    pub findings: Vec<Finding>,
}

/// Stateless resume scanner.
#[derive(Debug, Clone, Default)]
pub struct AtsScanner;

impl AtsScanner {
    pub fn scan(&self, text: &str) -> AtsReport {
        let haystack = normalize(text);
        let words = haystack.split_whitespace().count();

        let mut checks = Vec::with_capacity(6);
        let mut findings = Vec::new();

        let has_email = haystack.contains('@');
        let digit_count = haystack.chars().filter(char::is_ascii_digit).count();
        let contact_score = if has_email && digit_count >= 7 {
            100.0
        } else if has_email || digit_count >= 7 {
            55.0
        } else {
            20.0
        };
        checks.push(AtsCheck {
            name: "contact_info".to_string(),
            score: clamp_percent(contact_score),
            notes: format!("email marker: {has_email}, digits: {digit_count}"),
        });
        if contact_score < 100.0 {
            findings.push(Finding::new(
                "Missing Contact Info",
                Severity::Medium,
                "An email address or phone number was not detected",
                "Put an email and phone number in the header where parsers expect them",
            ));
        }

        let missing_sections: Vec<&str> = resume_section_headers()
            .iter()
            .copied()
            .filter(|header| !haystack.contains(header))
            .collect();
        let present = resume_section_headers().len() - missing_sections.len();
        let section_score =
            clamp_percent(100.0 * present as f32 / resume_section_headers().len() as f32);
        checks.push(AtsCheck {
            name: "core_sections".to_string(),
            score: section_score,
            notes: format!(
                "{present} of {} expected section header(s) found",
                resume_section_headers().len()
            ),
        });
        if !missing_sections.is_empty() {
            findings.push(Finding::new(
                "Missing Core Sections",
                Severity::High,
                format!("Missing section header(s): {}", missing_sections.join(", ")),
                "Label the standard sections explicitly so automated screens can find them",
            ));
        }

        let verb_hits = count_hits(&haystack, resume_action_verbs());
        checks.push(AtsCheck {
            name: "action_verbs".to_string(),
            score: clamp_percent(20.0 + 12.0 * verb_hits as f32),
            notes: format!("{verb_hits} action verb(s) detected"),
        });
        if verb_hits < 3 {
            findings.push(Finding::new(
                "Passive Language",
                Severity::Medium,
                format!("Only {verb_hits} action verb(s) found in experience bullets"),
                "Open each bullet with a strong verb: led, built, shipped, reduced",
            ));
        }

        let metric_hits = haystack.matches('%').count()
            + haystack
                .split_whitespace()
                .filter(|token| token.chars().any(|ch| ch.is_ascii_digit()) && *token != "-")
                .count();
        checks.push(AtsCheck {
            name: "quantified_impact".to_string(),
            score: clamp_percent(25.0 + 15.0 * metric_hits.min(5) as f32),
            notes: format!("{metric_hits} quantified marker(s) detected"),
        });
        if metric_hits == 0 {
            findings.push(Finding::new(
                "No Quantified Impact",
                Severity::Medium,
                "No numbers or percentages back up the accomplishments",
                "Quantify results: budgets, percentages, team sizes, time saved",
            ));
        }

        let keyword_hits =
            count_hits(&haystack, current_skill_keywords()) + count_hits(&haystack, ats_keywords());
        checks.push(AtsCheck {
            name: "keyword_coverage".to_string(),
            score: clamp_percent(15.0 + 10.0 * keyword_hits as f32),
            notes: format!("{keyword_hits} screened keyword(s) matched"),
        });
        if keyword_hits < 3 {
            findings.push(Finding::new(
                "Low Keyword Coverage",
                Severity::High,
                format!("Only {keyword_hits} screened keyword(s) matched"),
                "Mirror the language of target job postings in the skills section",
            ));
        }

        let length_score = if IDEAL_WORDS.contains(&words) {
            100.0
        } else if TOLERABLE_WORDS.contains(&words) {
            60.0
        } else {
            25.0
        };
        checks.push(AtsCheck {
            name: "length_band".to_string(),
            score: length_score,
            notes: format!("{words} word(s)"),
        });
        if !IDEAL_WORDS.contains(&words) {
            findings.push(Finding::new(
                "Length Outside ATS Band",
                Severity::Low,
                format!("{words} words falls outside the 250-800 word sweet spot"),
                "Trim or expand toward one tight page per decade of experience",
            ));
        }

        let total: f32 = checks.iter().map(|check| check.score).sum();
        let score = clamp_percent(total / checks.len() as f32).round() as u8;

        AtsReport {
            score,
            checks,
            findings,
        }
    }
}

fn count_hits(haystack: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|needle| haystack.contains(*needle))
        .count()
}
