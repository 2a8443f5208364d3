//! Few-shot template: system role, exemplar pairs, live query

use crate::defaults::chain_names;
use crate::error::{ChainError, Result};
use crate::prompt::{ChatPromptTemplate, Exemplar, FewShotChatTemplate, MessageTemplate};

use super::exemplars::math_exemplars;
use super::zero_shot::SPLIT_HUMAN;

/// Few-shot template over the built-in math exemplars.
pub fn few_shot_template() -> Result<ChatPromptTemplate> {
    few_shot_template_with(math_exemplars())
}

/// Few-shot template over a custom, non-empty exemplar set.
///
/// Renders `[system {system_role}]`, then a human/ai pair per exemplar,
/// then the human query with `{question}` and `{explanation}`.
pub fn few_shot_template_with(exemplars: Vec<Exemplar>) -> Result<ChatPromptTemplate> {
    if exemplars.is_empty() {
        return Err(ChainError::InvalidParameter(
            "few-shot template needs at least one exemplar".to_string(),
        ));
    }

    let example_prompt = ChatPromptTemplate::from_messages(
        chain_names::EXEMPLAR,
        [("human", "{input}"), ("ai", "{output}")],
    )?;
    let exemplars = FewShotChatTemplate::new(exemplars, example_prompt)?;

    Ok(ChatPromptTemplate::new(chain_names::FEW_SHOT)
        .with_message(MessageTemplate::system("{system_role}")?)
        .with_few_shot(exemplars)
        .with_message(MessageTemplate::human(SPLIT_HUMAN)?))
}
