//! Conversation state for one company–researcher pairing.
//!
//! DESIGN
//! ======
//! The sequence is append-only for the lifetime of the screen: no edits,
//! deletions, or reordering exist, which is what makes the positional id
//! scheme safe. Display fields (`timestamp`, `date`) are pre-formatted
//! strings — the model detects adjacency changes in the grouping label but
//! never does calendar math.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use serde::{Deserialize, Serialize};

/// Grouping label attached to messages created in this session.
pub const TODAY_LABEL: &str = "Hoje";

/// Which party authored a message. The conversation is strictly two-party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The problem-owner counterparty.
    Company,
    /// The researcher operating this screen.
    Researcher,
}

impl Sender {
    /// True for the party operating this screen.
    pub fn is_local(self) -> bool {
        matches!(self, Sender::Researcher)
    }
}

/// One immutable chat turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Positional id, unique within the sequence.
    pub id: usize,
    pub sender: Sender,
    pub sender_name: String,
    /// Image URL or path; may be a placeholder.
    pub avatar: String,
    /// Free-form text; non-empty for locally created messages.
    pub body: String,
    /// Display clock time, `HH:MM`.
    pub timestamp: String,
    /// Display grouping label (e.g. `"Hoje"`); adjacency changes between
    /// consecutive labels drive the date separators.
    pub date: String,
}

/// Append-only message sequence, oldest first.
///
/// The vector is private so the only mutation paths are `seeded` and
/// `append` — insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Builds the conversation from an already-resolved, oldest-first seed.
    pub fn seeded(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Positional id for the next appended message (`len + 1`).
    ///
    /// A counter, not a durable identifier — valid only because the
    /// sequence is append-only within a session.
    pub fn next_id(&self) -> usize {
        self.messages.len() + 1
    }

    /// Appends one message at the end of the sequence.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }
}
