//! Stream Processor
//!
//! Folds `ChatStreamEvent`s into a final `ChatResponse`.

use crate::types::{ChatResponse, ChatStreamEvent, Usage};

/// Accumulates streamed content until the stream ends.
#[derive(Debug, Default)]
pub struct StreamProcessor {
    buffer: String,
    model: Option<String>,
    usage: Option<Usage>,
    end_response: Option<ChatResponse>,
    delta_count: usize,
}

impl StreamProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Returns the token text for `ContentDelta` events.
    pub fn process_event<'a>(&mut self, event: &'a ChatStreamEvent) -> Option<&'a str> {
        match event {
            ChatStreamEvent::StreamStart { model } => {
                if model.is_some() {
                    self.model = model.clone();
                }
                None
            }
            ChatStreamEvent::ContentDelta { delta, .. } => {
                self.buffer.push_str(delta);
                self.delta_count += 1;
                Some(delta.as_str())
            }
            ChatStreamEvent::UsageUpdate { usage } => {
                self.usage = Some(*usage);
                None
            }
            ChatStreamEvent::StreamEnd { response } => {
                self.end_response = Some(response.clone());
                None
            }
            ChatStreamEvent::Error { .. } => None,
        }
    }

    /// Text accumulated so far
    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Number of content deltas seen
    pub fn delta_count(&self) -> usize {
        self.delta_count
    }

    /// Build the final response.
    ///
    /// A `StreamEnd` response with content wins; its missing fields are
    /// filled from what the stream reported. Otherwise the accumulated
    /// deltas form the content.
    pub fn build_final_response(self) -> ChatResponse {
        match self.end_response {
            Some(mut response) if !response.content.is_empty() => {
                if response.model.is_none() {
                    response.model = self.model;
                }
                if response.usage.is_none() {
                    response.usage = self.usage;
                }
                response
            }
            Some(response) => ChatResponse {
                content: self.buffer,
                model: response.model.or(self.model),
                usage: response.usage.or(self.usage),
                ..response
            },
            None => ChatResponse {
                content: self.buffer,
                model: self.model,
                usage: self.usage,
                ..Default::default()
            },
        }
    }
}
