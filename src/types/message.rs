//! Chat message types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

/// Message role
///
/// Serializes as `system`, `human`, or `ai`. When parsing, `user` and
/// `assistant` are accepted as aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    #[serde(alias = "user")]
    Human,
    #[serde(alias = "assistant")]
    Ai,
}

impl MessageRole {
    /// Canonical lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Human => "human",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "human" | "user" => Ok(Self::Human),
            "ai" | "assistant" => Ok(Self::Ai),
            other => Err(ChainError::InvalidParameter(format!(
                "Unknown message role '{other}': expected system, human, or ai"
            ))),
        }
    }
}

/// Chat message
///
/// # Examples
///
/// ```rust
/// use stepchain::types::{ChatMessage, MessageRole};
///
/// let msg = ChatMessage::human("question:\nQ");
/// assert_eq!(msg.role, MessageRole::Human);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl ChatMessage {
    /// Creates a message with an explicit role
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Creates a human message
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Human, content)
    }

    /// Creates an AI message
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Ai, content)
    }

    /// Text content of the message
    pub fn content_text(&self) -> &str {
        &self.content
    }

    /// `(role, content)` pair, handy for assertions and logging
    pub fn as_pair(&self) -> (&'static str, &str) {
        (self.role.as_str(), &self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
