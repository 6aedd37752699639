//! Keyword-matched coaching responder.
//!
//! Replies are selected by walking an ordered topic list and returning
//! the first topic with a keyword hit. First-match-wins is deliberate:
//! topics are ordered by specificity and evaluation short-circuits, so a
//! message touching two topics answers the earlier one. That is a known
//! limitation of the matcher, not a bug; best-match selection would
//! change observable behavior. When nothing matches, a reply is drawn
//! uniformly from a fallback pool.

mod topics;

pub use topics::{fallback_pool, topic_catalog, Topic};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scoring::normalize;

pub const FALLBACK_TOPIC: &str = "general";

/// A selected reply and the topic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachReply {
    pub topic: String,
    pub reply: String,
}

/// Stateless responder over the static topic catalog.
#[derive(Debug, Clone, Default)]
pub struct CoachResponder;

impl CoachResponder {
    /// Select a reply for `input`. Deterministic for any input that hits
    /// a topic keyword; the fallback branch consumes the random source.
    pub fn reply<R: Rng>(&self, input: &str, rng: &mut R) -> CoachReply {
        let needle = normalize(input);

        for topic in topic_catalog() {
            if topic
                .keywords
                .iter()
                .any(|keyword| needle.contains(keyword))
            {
                return CoachReply {
                    topic: topic.name.to_string(),
                    reply: topic.reply.to_string(),
                };
            }
        }

        let pool = fallback_pool();
        let pick = rng.gen_range(0..pool.len());
        CoachReply {
            topic: FALLBACK_TOPIC.to_string(),
            reply: pool[pick].to_string(),
        }
    }
}
