//! Model provider boundary
//!
//! The hosted chat endpoint is an external collaborator. Anything that can
//! answer a [`ChatRequest`] implements [`ChatCapability`]; the model handle
//! and every chain built on top of it only talk to this trait.

use async_trait::async_trait;

use crate::error::ChainError;
use crate::streaming::ChatStream;
use crate::types::{ChatRequest, ChatResponse, ChatStreamEvent};

#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Provider identifier used in logs
    fn provider_id(&self) -> &str {
        "custom"
    }

    /// Atomic chat call.
    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, ChainError>;

    /// Streaming chat call.
    ///
    /// Default performs one `chat_request` and replays the result as
    /// `StreamStart`, a single `ContentDelta`, and `StreamEnd`.
    async fn chat_stream_request(&self, request: ChatRequest) -> Result<ChatStream, ChainError> {
        let model = Some(request.common_params.model.clone());
        let response = self.chat_request(request).await?;
        let events = vec![
            Ok(ChatStreamEvent::StreamStart { model }),
            Ok(ChatStreamEvent::delta(response.content.clone())),
            Ok(ChatStreamEvent::StreamEnd { response }),
        ];
        Ok(Box::pin(futures::stream::iter(events)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    struct Echo;

    #[async_trait]
    impl ChatCapability for Echo {
        async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse, ChainError> {
            let text = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(ChatResponse::new(text))
        }
    }

    #[tokio::test]
    async fn test_default_stream_replays_atomic_response() {
        let request = ChatRequest::new(vec![crate::types::ChatMessage::human("hello")])
            .with_model("echo");
        let events: Vec<_> = Echo
            .chat_stream_request(request)
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0].as_ref().unwrap(),
            &ChatStreamEvent::StreamStart {
                model: Some("echo".to_string())
            }
        );
        assert_eq!(events[1].as_ref().unwrap(), &ChatStreamEvent::delta("hello"));
        assert!(matches!(
            events[2].as_ref().unwrap(),
            ChatStreamEvent::StreamEnd { response } if response.content == "hello"
        ));
    }
}
