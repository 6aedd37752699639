use super::ScoreTable;

// Hand-authored rubric tables. Sub-score scales differ by engine: the
// automation tables are fractional ([0,1] base rates and multiplicative
// modifiers), the immunity tables are percentage dimensions ([0,100],
// higher is safer).

/// Automation base risk by role. Unlisted roles assume a coin-flip base.
const ROLE_AUTOMATION_RISK: &[(&str, f32)] = &[
    ("data entry clerk", 0.90),
    ("cashier", 0.85),
    ("truck driver", 0.80),
    ("accountant", 0.75),
    ("customer service representative", 0.70),
    ("financial analyst", 0.60),
    ("paralegal", 0.60),
    ("graphic designer", 0.55),
    ("marketing manager", 0.45),
    ("lawyer", 0.40),
    ("hr manager", 0.40),
    ("software engineer", 0.35),
    ("teacher", 0.30),
    ("electrician", 0.30),
    ("nurse", 0.25),
    ("therapist", 0.15),
];

/// Automation risk modifier by industry, applied multiplicatively to the
/// role base. Unlisted industries are neutral.
const INDUSTRY_RISK_MODIFIER: &[(&str, f32)] = &[
    ("transportation", 1.25),
    ("retail", 1.20),
    ("manufacturing", 1.15),
    ("technology", 1.10),
    ("hospitality", 1.10),
    ("finance", 1.05),
    ("media", 1.00),
    ("construction", 0.85),
    ("education", 0.80),
    ("healthcare", 0.70),
];

/// Industry stability dimension ([0,100], higher is more stable).
const INDUSTRY_STABILITY: &[(&str, f32)] = &[
    ("government", 90.0),
    ("healthcare", 85.0),
    ("education", 80.0),
    ("finance", 65.0),
    ("energy", 60.0),
    ("technology", 60.0),
    ("construction", 55.0),
    ("manufacturing", 45.0),
    ("media", 40.0),
    ("hospitality", 40.0),
    ("retail", 35.0),
    ("transportation", 30.0),
];

/// Resilience to AI disruption by role ([0,100], higher is less exposed).
const AI_RESILIENCE: &[(&str, f32)] = &[
    ("therapist", 95.0),
    ("nurse", 90.0),
    ("electrician", 85.0),
    ("teacher", 80.0),
    ("lawyer", 65.0),
    ("software engineer", 60.0),
    ("hr manager", 60.0),
    ("marketing manager", 55.0),
    ("graphic designer", 45.0),
    ("financial analyst", 40.0),
    ("accountant", 30.0),
    ("paralegal", 30.0),
    ("customer service representative", 25.0),
    ("truck driver", 20.0),
    ("cashier", 15.0),
    ("data entry clerk", 10.0),
];

/// Education bonus dimension ([0,100]).
const EDUCATION_BONUS: &[(&str, f32)] = &[
    ("phd", 85.0),
    ("doctorate", 85.0),
    ("masters", 75.0),
    ("bachelors", 60.0),
    ("bootcamp", 55.0),
    ("self-taught", 50.0),
    ("associates", 45.0),
    ("high school", 35.0),
];

/// Skills currently in demand; hits here feed the skill-currency
/// dimension and ATS keyword coverage.
const CURRENT_SKILL_KEYWORDS: &[&str] = &[
    "machine learning",
    "prompt engineering",
    "data analysis",
    "data science",
    "cybersecurity",
    "cloud",
    "kubernetes",
    "devops",
    "automation",
    "python",
    "rust",
    "sql",
    "project management",
    "ux",
    "ai",
];

/// Verbs ATS screens reward in experience bullets.
const RESUME_ACTION_VERBS: &[&str] = &[
    "led", "built", "managed", "delivered", "launched", "improved", "designed", "reduced",
    "increased", "implemented", "shipped", "mentored",
];

/// Section headers an ATS parser expects to find.
const RESUME_SECTION_HEADERS: &[&str] = &["experience", "education", "skills"];

/// Generic keywords counted toward ATS coverage alongside the current
/// skill list.
const ATS_KEYWORDS: &[&str] = &["results", "team", "project", "stakeholder", "cross-functional"];

pub const fn role_risk_table() -> ScoreTable {
    ScoreTable::new(ROLE_AUTOMATION_RISK, 0.5)
}

pub const fn industry_modifier_table() -> ScoreTable {
    ScoreTable::new(INDUSTRY_RISK_MODIFIER, 1.0)
}

pub const fn industry_stability_table() -> ScoreTable {
    ScoreTable::new(INDUSTRY_STABILITY, 50.0)
}

pub const fn ai_resilience_table() -> ScoreTable {
    ScoreTable::new(AI_RESILIENCE, 50.0)
}

pub const fn education_table() -> ScoreTable {
    ScoreTable::new(EDUCATION_BONUS, 50.0)
}

pub const fn current_skill_keywords() -> &'static [&'static str] {
    CURRENT_SKILL_KEYWORDS
}

pub const fn resume_action_verbs() -> &'static [&'static str] {
    RESUME_ACTION_VERBS
}

pub const fn resume_section_headers() -> &'static [&'static str] {
    RESUME_SECTION_HEADERS
}

pub const fn ats_keywords() -> &'static [&'static str] {
    ATS_KEYWORDS
}
