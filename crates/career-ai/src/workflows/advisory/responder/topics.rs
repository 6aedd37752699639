/// One canned-response topic: a name, the keywords that trigger it, and
/// the fixed reply.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

// Ordered most-specific-first; evaluation stops at the first keyword hit,
// so a topic's keywords must not shadow a later topic it should lose to.
const TOPICS: &[Topic] = &[
    Topic {
        name: "resume",
        keywords: &["resume", "cv", "cover letter"],
        reply: "Lead your resume with outcomes, not duties. One tight page per decade, \
                every bullet opening with a verb and closing with a number.",
    },
    Topic {
        name: "interview_prep",
        keywords: &["interview", "behavioral question", "whiteboard"],
        reply: "Prepare five stories in situation-action-result shape and rehearse them \
                aloud. Interviews reward retrieval practice, not re-reading notes.",
    },
    Topic {
        name: "salary_negotiation",
        keywords: &["salary", "negotiat", "compensation", "raise", "pay band"],
        reply: "Never name the first number. Anchor on the value of the work, ask for the \
                range, and practice the silence after your counter.",
    },
    Topic {
        name: "networking",
        keywords: &["network", "linkedin", "referral", "mentor"],
        reply: "Warm introductions convert far better than cold applications. Ask one \
                specific question per outreach; nobody answers 'can I pick your brain'.",
    },
    Topic {
        name: "career_change",
        keywords: &["career change", "switch careers", "pivot", "new field"],
        reply: "Bridge, don't leap: find the role that uses half your current skills in \
                the new field, and close the other half with a visible project.",
    },
    Topic {
        name: "burnout",
        keywords: &["burnout", "burned out", "exhausted", "overwhelmed"],
        reply: "Burnout is a workload and control problem before it is a resilience \
                problem. Cut one commitment this week and tell someone you did.",
    },
    Topic {
        name: "upskilling",
        keywords: &["learn", "course", "certification", "skill gap", "upskill"],
        reply: "Pick one skill employers actually screen for and build something public \
                with it. A shipped artifact beats three certificates.",
    },
];

const FALLBACK_POOL: &[&str] = &[
    "Tell me a bit more about where you are in your career and what's blocking you.",
    "That's outside my playbook, but a useful next step is almost always a concrete \
     conversation: who could you ask about this directly?",
    "I don't have a canned answer for that one. What would success look like for you \
     in six months?",
];

pub const fn topic_catalog() -> &'static [Topic] {
    TOPICS
}

pub const fn fallback_pool() -> &'static [&'static str] {
    FALLBACK_POOL
}
