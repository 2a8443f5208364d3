//! Chain Composer
//!
//! A [`Chain`] binds one [`ChatPromptTemplate`] to one [`ModelHandle`].
//! Invoking it validates the bindings, renders the messages, and forwards
//! them to the model. Nothing is cached between invocations.

mod exemplars;
mod factory;
mod few_shot;
mod zero_shot;

pub use exemplars::{MATH_EXEMPLARS, math_exemplars};
pub use factory::{Chains, build_chains, get_chains};
pub use few_shot::{few_shot_template, few_shot_template_with};
pub use zero_shot::{ZeroShotChains, explain_template, question_template, split_template};

use std::sync::Arc;

use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::error::Result;
use crate::model::ModelHandle;
use crate::prompt::{ChatPromptTemplate, PlaceholderBindings};
use crate::types::{ChatMessage, ChatResponse};

/// A prompt template composed with a model handle.
#[derive(Debug, Clone)]
pub struct Chain {
    template: Arc<ChatPromptTemplate>,
    model: ModelHandle,
}

/// Compose a template with a model handle.
pub fn compose(template: ChatPromptTemplate, model: ModelHandle) -> Chain {
    Chain::new(template, model)
}

impl Chain {
    pub fn new(template: ChatPromptTemplate, model: ModelHandle) -> Self {
        Self {
            template: Arc::new(template),
            model,
        }
    }

    /// Chain name, taken from its template
    pub fn name(&self) -> &str {
        self.template.name()
    }

    pub fn template(&self) -> &ChatPromptTemplate {
        &self.template
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    /// Placeholders an invocation must bind
    pub fn input_variables(&self) -> &[String] {
        self.template.input_variables()
    }

    /// Validate and render without calling the model.
    pub fn render(&self, values: &PlaceholderBindings) -> Result<Vec<ChatMessage>> {
        self.template.format_messages(values)
    }

    /// Render and send to the model.
    ///
    /// A missing placeholder fails before any remote call. Model errors are
    /// returned unchanged.
    pub async fn invoke(&self, values: &PlaceholderBindings) -> Result<ChatResponse> {
        let span = info_span!(
            "chain.invoke",
            chain = %self.name(),
            model = %self.model.model(),
            run_id = %Uuid::new_v4(),
        );

        async {
            let messages = self.render(values)?;
            debug!(messages = messages.len(), "rendered prompt");
            self.model.invoke(messages).await
        }
        .instrument(span)
        .await
    }

    /// Like [`Chain::invoke`], returning only the response text.
    pub async fn invoke_text(&self, values: &PlaceholderBindings) -> Result<String> {
        Ok(self.invoke(values).await?.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChainError;
    use crate::traits::ChatCapability;
    use crate::types::ChatRequest;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<ChatRequest>>,
    }

    #[async_trait]
    impl ChatCapability for Recorder {
        async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse> {
            let reply = format!("{} messages", request.messages.len());
            self.requests.lock().unwrap().push(request);
            Ok(ChatResponse::new(reply))
        }
    }

    fn chain(backend: Arc<Recorder>) -> Chain {
        let model = ModelHandle::builder()
            .streaming(false)
            .stdout(false)
            .backend(backend)
            .build()
            .unwrap();
        compose(explain_template().unwrap(), model)
    }

    #[tokio::test]
    async fn test_invoke_forwards_rendered_messages() {
        let backend = Arc::new(Recorder::default());
        let chain = chain(backend.clone());
        let values = crate::bindings! {
            "explain_role" => "R",
            "question" => "Q",
            "explanation" => "E",
            "unused" => "ignored",
        };

        let text = chain.invoke_text(&values).await.unwrap();
        assert_eq!(text, "2 messages");

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages, chain.render(&values).unwrap());
    }

    #[tokio::test]
    async fn test_missing_placeholder_skips_model() {
        let backend = Arc::new(Recorder::default());
        let chain = chain(backend.clone());

        let err = chain
            .invoke(&crate::bindings! { "explain_role" => "R", "question" => "Q" })
            .await
            .unwrap_err();
        assert_eq!(err, ChainError::missing_placeholder("explain", "explanation"));
        assert!(backend.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_template() {
        let chain = chain(Arc::new(Recorder::default()));
        let copy = chain.clone();
        assert!(Arc::ptr_eq(&chain.template, &copy.template));
        assert_eq!(copy.name(), "explain");
        assert_eq!(copy.input_variables(), ["explain_role", "question", "explanation"]);
    }
}
