//! Rule-based chat assistants.
//!
//! Both assistants keep a persisted transcript and answer from fixed keyword
//! rules. There is no model call anywhere; replies are deterministic apart
//! from random tip selection.

mod eco_guide;
mod selling_coach;

pub use eco_guide::EcoGuide;
pub use selling_coach::{PriceSuggestion, SellingCoach, SuggestionRequest};

use std::sync::Arc;

use crate::kv::{KvError, KvStore, KvStoreExt};
use crate::models::ChatMessage;

/// A persisted chat transcript under a fixed storage key.
///
/// An empty transcript is seeded with the assistant's greeting so that a
/// fresh store always has something to show.
pub struct ChatLog {
    kv: Arc<dyn KvStore>,
    key: &'static str,
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    fn new(kv: Arc<dyn KvStore>, key: &'static str, greeting: &str) -> Self {
        let mut messages: Vec<ChatMessage> = kv.load(key, Vec::new());
        if messages.is_empty() {
            messages.push(ChatMessage::from_bot(greeting.to_owned()));
        }
        Self { kv, key, messages }
    }

    /// The transcript in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user line and the bot's reply, then persist.
    fn exchange(&mut self, user_text: String, bot_text: String) -> Result<ChatMessage, KvError> {
        self.messages.push(ChatMessage::from_user(user_text));
        let reply = ChatMessage::from_bot(bot_text);
        self.messages.push(reply.clone());
        self.kv.save(self.key, &self.messages)?;
        Ok(reply)
    }
}
