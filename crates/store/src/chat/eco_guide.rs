//! The EcoGuide assistant: sustainability tips from keyword rules.

use std::sync::{Arc, LazyLock};

use rand::Rng;
use regex::Regex;

use crate::chat::ChatLog;
use crate::keys;
use crate::kv::{KvError, KvStore};
use crate::models::ChatMessage;

const GREETING: &str = "Hi! I'm EcoGuide - I can share tips to save resources and promote sustainable living. Ask me anything or type 'tip' for a suggestion.";

const HELP_REPLY: &str = "Ask me about saving water, energy, recycling, donating, repairing, or general sustainable habits.";

const DEFAULT_TIPS: [&str; 9] = [
    "Repair or repurpose items before replacing them to extend their life.",
    "Donate or sell items you no longer need instead of throwing them away.",
    "Choose products with minimal or recyclable packaging.",
    "Wash clothes in cold water and air dry when possible to save energy.",
    "Unplug chargers and electronics when not in use to avoid phantom energy draw.",
    "Use a reusable water bottle and shopping bag to reduce single-use waste.",
    "Buy second-hand or refurbished electronics and furniture.",
    "Combine errands to reduce driving and consider public transport or biking.",
    "Compost food scraps to reduce landfill waste and create nutrient-rich soil.",
];

/// Keyword rules checked in order; the first match wins.
static KEYWORD_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"water",
            "To save water: fix leaks, take shorter showers, and reuse greywater for plants.",
        ),
        (
            r"energy|power|electric|electricity",
            "To save energy: switch to LED bulbs, unplug unused devices, and use energy-efficient appliances.",
        ),
        (
            r"recycl",
            "Recycle properly: clean containers, separate materials, and check local recycling rules.",
        ),
        (
            r"donat|sell|second|pre-?loved|used",
            "Consider donating or listing items on EcoFinds - it extends product life and reduces waste.",
        ),
        (
            r"repair|fix|mend",
            "Repairing items often saves resources - look for local repair cafes or tutorial guides online.",
        ),
        (
            r"packag|plastic|single-?use",
            "Avoid single-use plastics: choose refillable, bulk, or unpackaged options when possible.",
        ),
        (
            r"tree|plant",
            "Planting trees helps capture carbon and support biodiversity - consider community tree-planting initiatives.",
        ),
        (
            r"sustain|sustan|sustai",
            "Small everyday choices add up: buy less, choose durable goods, and support circular economy practices.",
        ),
    ]
    .into_iter()
    .map(|(pattern, reply)| (Regex::new(pattern).expect("Invalid regex"), reply))
    .collect()
});

fn random_tip() -> &'static str {
    let index = rand::rng().random_range(0..DEFAULT_TIPS.len());
    DEFAULT_TIPS[index]
}

/// Sustainability tips assistant with a persisted transcript.
pub struct EcoGuide {
    log: ChatLog,
}

impl EcoGuide {
    /// Build the assistant, hydrating (or seeding) its transcript.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            log: ChatLog::new(kv, keys::ECO_GUIDE_MESSAGES, GREETING),
        }
    }

    /// The transcript in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    /// Send a user message and receive the bot reply.
    ///
    /// Blank input is ignored and returns `None` without touching the
    /// transcript.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the transcript fails.
    pub fn send(&mut self, text: &str) -> Result<Option<ChatMessage>, KvError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let reply = Self::reply_to(trimmed);
        self.log
            .exchange(trimmed.to_owned(), reply)
            .map(Some)
    }

    /// The reply for `text` (already trimmed and non-empty).
    fn reply_to(text: &str) -> String {
        let lowered = text.to_lowercase();
        if lowered == "tip" {
            return random_tip().to_owned();
        }
        if lowered == "help" {
            return HELP_REPLY.to_owned();
        }
        for (pattern, reply) in KEYWORD_RULES.iter() {
            if pattern.is_match(&lowered) {
                return (*reply).to_owned();
            }
        }
        random_tip().to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::{KvStoreExt, MemoryKv};
    use ecofinds_core::ChatRole;

    fn guide() -> EcoGuide {
        EcoGuide::new(Arc::new(MemoryKv::new()))
    }

    #[test]
    fn test_fresh_transcript_is_seeded_with_greeting() {
        let guide = guide();
        assert_eq!(guide.messages().len(), 1);
        let first = guide.messages().first().unwrap();
        assert_eq!(first.sender, ChatRole::Bot);
        assert!(first.text.contains("EcoGuide"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut guide = guide();
        assert!(guide.send("   ").unwrap().is_none());
        assert_eq!(guide.messages().len(), 1);
    }

    #[test]
    fn test_keyword_rules_match_case_insensitively() {
        let mut guide = guide();
        let reply = guide.send("How do I save WATER?").unwrap().unwrap();
        assert!(reply.text.contains("shorter showers"));

        let reply = guide.send("electricity bills are high").unwrap().unwrap();
        assert!(reply.text.contains("LED bulbs"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let mut guide = guide();
        // "water" precedes "energy" in rule order.
        let reply = guide.send("water and energy").unwrap().unwrap();
        assert!(reply.text.contains("shorter showers"));
    }

    #[test]
    fn test_tip_command_returns_known_tip() {
        let mut guide = guide();
        let reply = guide.send("tip").unwrap().unwrap();
        assert!(DEFAULT_TIPS.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_help_command() {
        let mut guide = guide();
        let reply = guide.send("help").unwrap().unwrap();
        assert_eq!(reply.text, HELP_REPLY);
    }

    #[test]
    fn test_unmatched_input_falls_back_to_tip() {
        let mut guide = guide();
        let reply = guide.send("xyzzy").unwrap().unwrap();
        assert!(DEFAULT_TIPS.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_send_appends_user_and_bot_lines() {
        let mut guide = guide();
        guide.send("  hello trees  ").unwrap();
        assert_eq!(guide.messages().len(), 3);
        let user_line = guide.messages().get(1).unwrap();
        assert_eq!(user_line.sender, ChatRole::User);
        assert_eq!(user_line.text, "hello trees", "input is trimmed");
    }

    #[test]
    fn test_transcript_survives_rehydration() {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());
        {
            let mut guide = EcoGuide::new(Arc::clone(&kv));
            guide.send("water").unwrap();
        }
        let guide = EcoGuide::new(Arc::clone(&kv));
        assert_eq!(guide.messages().len(), 3);

        let stored: Vec<ChatMessage> = kv.load(keys::ECO_GUIDE_MESSAGES, Vec::new());
        assert_eq!(stored.len(), 3);
    }
}
