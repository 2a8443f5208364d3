//! Chat prompt templates
//!
//! A [`ChatPromptTemplate`] is an ordered list of entries. Each entry is a
//! single role-tagged [`MessageTemplate`] or a block of few-shot exemplar
//! messages. Rendering validates the whole placeholder schema first, so a
//! missing binding fails before any message is produced.

use tracing::trace;

use crate::error::{ChainError, Result};
use crate::types::{ChatMessage, MessageRole};

use super::bindings::PlaceholderBindings;
use super::few_shot::FewShotChatTemplate;
use super::pattern::TextPattern;

/// One role-tagged message pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    role: MessageRole,
    pattern: TextPattern,
}

impl MessageTemplate {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            role,
            pattern: TextPattern::parse(text)?,
        })
    }

    pub fn system(text: impl Into<String>) -> Result<Self> {
        Self::new(MessageRole::System, text)
    }

    pub fn human(text: impl Into<String>) -> Result<Self> {
        Self::new(MessageRole::Human, text)
    }

    pub fn ai(text: impl Into<String>) -> Result<Self> {
        Self::new(MessageRole::Ai, text)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn pattern(&self) -> &TextPattern {
        &self.pattern
    }

    /// Render into a message. `template` names the owner in errors.
    pub fn format(&self, template: &str, values: &PlaceholderBindings) -> Result<ChatMessage> {
        Ok(ChatMessage::new(self.role, self.pattern.render(template, values)?))
    }
}

/// Entry of a chat prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEntry {
    Message(MessageTemplate),
    FewShot(FewShotChatTemplate),
}

impl PromptEntry {
    /// Number of messages this entry renders to
    pub fn message_count(&self) -> usize {
        match self {
            Self::Message(_) => 1,
            Self::FewShot(few_shot) => few_shot.message_count(),
        }
    }
}

/// Ordered sequence of message templates with an explicit placeholder schema.
///
/// # Example
///
/// ```rust,ignore
/// let template = ChatPromptTemplate::from_messages(
///     "explain",
///     [("system", "{explain_role}"), ("human", "question:\n{question}")],
/// )?;
/// assert_eq!(template.input_variables(), ["explain_role", "question"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPromptTemplate {
    name: String,
    entries: Vec<PromptEntry>,
    partials: PlaceholderBindings,
    input_variables: Vec<String>,
}

impl ChatPromptTemplate {
    /// Empty template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            partials: PlaceholderBindings::new(),
            input_variables: Vec::new(),
        }
    }

    /// Build from `(role, pattern)` pairs. Roles accept `system`,
    /// `human`/`user`, and `ai`/`assistant`.
    pub fn from_messages<I, R, T>(name: impl Into<String>, messages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (R, T)>,
        R: AsRef<str>,
        T: Into<String>,
    {
        let mut template = Self::new(name);
        for (role, text) in messages {
            let role: MessageRole = role.as_ref().parse()?;
            template = template.with_message(MessageTemplate::new(role, text)?);
        }
        Ok(template)
    }

    /// Append a message template
    pub fn with_message(mut self, message: MessageTemplate) -> Self {
        self.entries.push(PromptEntry::Message(message));
        self.refresh_schema();
        self
    }

    /// Append a block of few-shot exemplar messages
    pub fn with_few_shot(mut self, few_shot: FewShotChatTemplate) -> Self {
        self.entries.push(PromptEntry::FewShot(few_shot));
        self.refresh_schema();
        self
    }

    /// Fix a placeholder value for every render. The name leaves the
    /// required schema; per-call bindings still override it.
    pub fn partial(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.partials.insert(name, value);
        self.refresh_schema();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    /// Required placeholder names, first-appearance order, no repeats
    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// Number of messages a render produces
    pub fn message_count(&self) -> usize {
        self.entries.iter().map(PromptEntry::message_count).sum()
    }

    /// Check that every required placeholder is bound.
    pub fn validate(&self, values: &PlaceholderBindings) -> Result<()> {
        match self
            .input_variables
            .iter()
            .find(|name| !values.contains(name))
        {
            Some(missing) => Err(ChainError::missing_placeholder(&self.name, missing.as_str())),
            None => Ok(()),
        }
    }

    /// Render into an ordered list of role-tagged messages.
    pub fn format_messages(&self, values: &PlaceholderBindings) -> Result<Vec<ChatMessage>> {
        self.validate(values)?;

        for name in values.names() {
            if !self.input_variables.iter().any(|v| v == name) {
                trace!(template = %self.name, placeholder = name, "ignoring unused binding");
            }
        }

        let effective = if self.partials.is_empty() {
            None
        } else {
            Some(self.partials.merged(values))
        };
        let values = effective.as_ref().unwrap_or(values);

        let mut messages = Vec::with_capacity(self.message_count());
        for entry in &self.entries {
            match entry {
                PromptEntry::Message(message) => messages.push(message.format(&self.name, values)?),
                PromptEntry::FewShot(few_shot) => messages.extend(few_shot.format_messages()?),
            }
        }
        Ok(messages)
    }

    fn refresh_schema(&mut self) {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if let PromptEntry::Message(message) = entry {
                for name in message.pattern().placeholders() {
                    if !self.partials.contains(name) && !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
        self.input_variables = names;
    }
}
