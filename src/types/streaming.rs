//! Streaming event types for real-time responses

use serde::{Deserialize, Serialize};

use super::response::{ChatResponse, Usage};

/// Chat streaming event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChatStreamEvent {
    /// Stream start event
    StreamStart {
        /// Model serving the stream, if known
        model: Option<String>,
    },
    /// Content delta (incremental text)
    ContentDelta {
        /// The incremental text content
        delta: String,
        /// Index of the choice (for multiple responses)
        index: Option<usize>,
    },
    /// Usage statistics update
    UsageUpdate {
        /// Token usage information
        usage: Usage,
    },
    /// Stream end event with final response
    StreamEnd {
        /// Final response
        response: ChatResponse,
    },
    /// Error occurred during streaming
    Error {
        /// Error message
        error: String,
    },
}

impl ChatStreamEvent {
    /// Shorthand for a `ContentDelta` on the first choice
    pub fn delta(text: impl Into<String>) -> Self {
        Self::ContentDelta {
            delta: text.into(),
            index: None,
        }
    }
}
