//! Chat transcript records.

use serde::{Deserialize, Serialize};

use ecofinds_core::{ChatRole, MessageId};

use super::now_millis;

/// One line of an advisor widget's transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: MessageId,
    /// Who sent the line.
    #[serde(rename = "from")]
    pub sender: ChatRole,
    /// Message text.
    pub text: String,
    /// When the line was added, epoch milliseconds.
    pub time: i64,
}

impl ChatMessage {
    /// A user-authored line stamped now.
    #[must_use]
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            sender: ChatRole::User,
            text: text.into(),
            time: now_millis(),
        }
    }

    /// A bot-authored line stamped now.
    #[must_use]
    pub fn from_bot(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            sender: ChatRole::Bot,
            text: text.into(),
            time: now_millis(),
        }
    }
}
