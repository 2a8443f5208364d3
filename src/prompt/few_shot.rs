//! Few-shot exemplar blocks

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChainError, Result};
use crate::types::ChatMessage;

use super::bindings::PlaceholderBindings;
use super::chat::ChatPromptTemplate;

/// One worked example: a question and its exemplary answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemplar {
    pub input: String,
    pub output: String,
}

impl Exemplar {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Bindings for the `input`/`output` placeholders
    pub fn to_bindings(&self) -> PlaceholderBindings {
        PlaceholderBindings::from([
            ("input", self.input.as_str()),
            ("output", self.output.as_str()),
        ])
    }
}

/// Renders every exemplar through an example prompt, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FewShotChatTemplate {
    examples: Vec<Exemplar>,
    example_prompt: ChatPromptTemplate,
}

impl FewShotChatTemplate {
    /// The example prompt may only use `input` and `output`.
    pub fn new(examples: Vec<Exemplar>, example_prompt: ChatPromptTemplate) -> Result<Self> {
        if let Some(name) = example_prompt
            .input_variables()
            .iter()
            .find(|name| !matches!(name.as_str(), "input" | "output"))
        {
            return Err(ChainError::InvalidParameter(format!(
                "example prompt '{}' uses '{name}'; only 'input' and 'output' are bound",
                example_prompt.name()
            )));
        }
        Ok(Self {
            examples,
            example_prompt,
        })
    }

    pub fn examples(&self) -> &[Exemplar] {
        &self.examples
    }

    pub fn example_prompt(&self) -> &ChatPromptTemplate {
        &self.example_prompt
    }

    pub fn message_count(&self) -> usize {
        self.examples.len() * self.example_prompt.message_count()
    }

    /// Render all exemplars; output is identical on every call.
    pub fn format_messages(&self) -> Result<Vec<ChatMessage>> {
        let mut messages = Vec::with_capacity(self.message_count());
        for example in &self.examples {
            messages.extend(self.example_prompt.format_messages(&example.to_bindings())?);
        }
        Ok(messages)
    }
}

/// Load exemplars from a JSON array of `{"input": ..., "output": ...}`.
pub fn load_exemplars(path: impl AsRef<Path>) -> Result<Vec<Exemplar>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let exemplars: Vec<Exemplar> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), count = exemplars.len(), "loaded exemplars");
    Ok(exemplars)
}
