//! Model Client Factory
//!
//! A [`ModelHandle`] binds a [`ModelConfig`] to a [`ChatCapability`] backend
//! and the observers that receive streamed tokens. Handles are cheap to clone
//! and immutable after [`ModelBuilder::build`].

mod builder;

pub use builder::ModelBuilder;

use std::fmt;
use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, trace, warn};

use crate::error::{ChainError, Result};
use crate::streaming::{StreamObserver, StreamProcessor};
use crate::traits::ChatCapability;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ChatStreamEvent, ModelConfig};

/// Configured, chat-capable model handle.
#[derive(Clone)]
pub struct ModelHandle {
    config: Arc<ModelConfig>,
    backend: Arc<dyn ChatCapability>,
    observers: Arc<[Arc<dyn StreamObserver>]>,
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("config", &self.config)
            .field("provider", &self.backend.provider_id())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ModelHandle {
    /// Start building a handle with default configuration.
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    pub(crate) fn from_parts(
        config: ModelConfig,
        backend: Arc<dyn ChatCapability>,
        observers: Vec<Arc<dyn StreamObserver>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            backend,
            observers: observers.into(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn temperature(&self) -> f64 {
        self.config.temperature
    }

    pub fn is_streaming(&self) -> bool {
        self.config.streaming
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Send a rendered message sequence to the backend.
    ///
    /// With streaming enabled, every content delta reaches every observer in
    /// arrival order before the aggregated response is returned. Backend
    /// errors are returned unchanged.
    pub async fn invoke(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse> {
        let request = ChatRequest::from_config(messages, &self.config);
        debug!(
            provider = self.backend.provider_id(),
            model = %self.config.model,
            temperature = self.config.temperature,
            stream = request.stream,
            messages = request.messages.len(),
            "sending chat request"
        );

        if request.stream {
            self.invoke_streaming(request).await
        } else {
            self.backend.chat_request(request).await
        }
    }

    async fn invoke_streaming(&self, request: ChatRequest) -> Result<ChatResponse> {
        let mut stream = match self.backend.chat_stream_request(request).await {
            Ok(stream) => stream,
            Err(e) => {
                self.notify_error(&e);
                return Err(e);
            }
        };

        for observer in self.observers.iter() {
            observer.on_stream_start(&self.config.model);
        }

        let mut processor = StreamProcessor::new();
        while let Some(item) = stream.next().await {
            let event = match item {
                Ok(ChatStreamEvent::Error { error }) => {
                    let e = ChainError::StreamError(error);
                    self.notify_error(&e);
                    return Err(e);
                }
                Ok(event) => event,
                Err(e) => {
                    self.notify_error(&e);
                    return Err(e);
                }
            };

            if let Some(token) = processor.process_event(&event) {
                trace!(token_len = token.len(), "stream delta");
                for observer in self.observers.iter() {
                    observer.on_token(token);
                }
            }
        }

        debug!(deltas = processor.delta_count(), "stream finished");
        let response = processor.build_final_response();
        for observer in self.observers.iter() {
            observer.on_stream_end(&response);
        }
        Ok(response)
    }

    fn notify_error(&self, error: &ChainError) {
        warn!(provider = self.backend.provider_id(), "model call failed: {}", error);
        for observer in self.observers.iter() {
            observer.on_error(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::{ChatStream, CollectingObserver};
    use crate::types::Usage;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct ScriptedBackend {
        calls: AtomicU32,
        stream_calls: AtomicU32,
    }

    #[async_trait]
    impl ChatCapability for ScriptedBackend {
        fn provider_id(&self) -> &str {
            "scripted"
        }

        async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChatResponse::new(format!("{} messages", request.messages.len()))
                .with_model(request.common_params.model))
        }

        async fn chat_stream_request(&self, _request: ChatRequest) -> Result<ChatStream> {
            self.stream_calls.fetch_add(1, Ordering::SeqCst);
            let events = vec![
                Ok(ChatStreamEvent::StreamStart { model: None }),
                Ok(ChatStreamEvent::delta("[1단계]")),
                Ok(ChatStreamEvent::delta(" ")),
                Ok(ChatStreamEvent::delta("ok")),
                Ok(ChatStreamEvent::UsageUpdate {
                    usage: Usage::new(10, 3),
                }),
            ];
            Ok(Box::pin(futures::stream::iter(events)))
        }
    }

    #[tokio::test]
    async fn test_non_streaming_calls_chat_request_once() {
        let backend = Arc::new(ScriptedBackend::default());
        let handle = ModelHandle::builder()
            .model("test-model")
            .streaming(false)
            .stdout(false)
            .backend(backend.clone())
            .build()
            .unwrap();

        let response = handle
            .invoke(vec![ChatMessage::system("R"), ChatMessage::human("Q")])
            .await
            .unwrap();

        assert_eq!(response.content, "2 messages");
        assert_eq!(response.model.as_deref(), Some("test-model"));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.stream_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_streaming_forwards_tokens_and_aggregates() {
        let backend = Arc::new(ScriptedBackend::default());
        let observer = Arc::new(CollectingObserver::new());
        let handle = ModelHandle::builder()
            .stdout(false)
            .observer(observer.clone())
            .backend(backend.clone())
            .build()
            .unwrap();

        let response = handle.invoke(vec![ChatMessage::human("Q")]).await.unwrap();

        assert_eq!(observer.tokens(), vec!["[1단계]", " ", "ok"]);
        assert_eq!(response.content, observer.text());
        assert_eq!(response.usage, Some(Usage::new(10, 3)));
        assert_eq!(backend.stream_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }
}
