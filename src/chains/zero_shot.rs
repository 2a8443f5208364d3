//! Zero-shot templates: explain, split, question

use crate::defaults::chain_names;
use crate::error::Result;
use crate::model::ModelHandle;
use crate::prompt::ChatPromptTemplate;

use super::{Chain, compose};

const EXPLAIN_HUMAN: &str = "question:\n{question}\n\nexplanation:\n{explanation}";
/// Split and few-shot queries are headed `quesiton:`, spelled as sent.
pub(crate) const SPLIT_HUMAN: &str = "quesiton:\n{question}\n\nexplanation:\n{explanation}";
const QUESTION_HUMAN: &str = "question:\n{question}\n\nexplanation steps:\n{steps}";

/// System `{explain_role}`; human question and explanation.
pub fn explain_template() -> Result<ChatPromptTemplate> {
    ChatPromptTemplate::from_messages(
        chain_names::EXPLAIN,
        [("system", "{explain_role}"), ("human", EXPLAIN_HUMAN)],
    )
}

/// System `{split_role}`; human question and explanation.
pub fn split_template() -> Result<ChatPromptTemplate> {
    ChatPromptTemplate::from_messages(
        chain_names::SPLIT,
        [("system", "{split_role}"), ("human", SPLIT_HUMAN)],
    )
}

/// System `{question_role}`; human question and explanation steps.
pub fn question_template() -> Result<ChatPromptTemplate> {
    ChatPromptTemplate::from_messages(
        chain_names::QUESTION,
        [("system", "{question_role}"), ("human", QUESTION_HUMAN)],
    )
}

/// The three independent zero-shot chains.
#[derive(Debug, Clone)]
pub struct ZeroShotChains {
    pub explain: Chain,
    pub split: Chain,
    pub question: Chain,
}

impl ZeroShotChains {
    pub fn new(model: ModelHandle) -> Result<Self> {
        Ok(Self {
            explain: compose(explain_template()?, model.clone()),
            split: compose(split_template()?, model.clone()),
            question: compose(question_template()?, model),
        })
    }

    /// `(explain, split, question)`
    pub fn into_tuple(self) -> (Chain, Chain, Chain) {
        (self.explain, self.split, self.question)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        [&self.explain, &self.split, &self.question].into_iter()
    }
}
