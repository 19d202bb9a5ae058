// src/services/transcript.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Admin,
    User,
    Assistant,
}

/// One authored contribution to a conversation.
///
/// Admin turns carry the manual as a JSON string; user and assistant turns
/// carry whatever payload the client or the model produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub author: Author,
    pub content: Value,
}

impl Turn {
    pub fn new(author: Author, content: impl Into<Value>) -> Self {
        Self { author, content: content.into() }
    }
}

/// Ordered, append-only turn history of one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // Drop every turn, including the manual.
    pub fn initialize(&mut self) {
        self.turns.clear();
    }

    /// Push a turn at the end and return the new length.
    pub fn append(&mut self, author: Author, content: impl Into<Value>) -> usize {
        self.turns.push(Turn::new(author, content));
        self.turns.len()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True once the first turn is the admin manual.
    pub fn is_seeded(&self) -> bool {
        matches!(self.turns.first(), Some(t) if t.author == Author::Admin)
    }

    /// JSON array of `{author, content}` records, in insertion order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
