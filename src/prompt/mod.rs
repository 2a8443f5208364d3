//! Prompt templates
//!
//! Patterns, placeholder bindings, chat templates, and few-shot blocks.

mod bindings;
mod chat;
mod few_shot;
mod pattern;

pub use bindings::PlaceholderBindings;
pub use chat::{ChatPromptTemplate, MessageTemplate, PromptEntry};
pub use few_shot::{Exemplar, FewShotChatTemplate, load_exemplars};
pub use pattern::TextPattern;
