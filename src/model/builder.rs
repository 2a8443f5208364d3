//! Builder for [`ModelHandle`]

use std::sync::Arc;

use crate::error::{ChainError, Result};
use crate::streaming::{StdoutObserver, StreamObserver};
use crate::traits::ChatCapability;
use crate::types::ModelConfig;

use super::ModelHandle;

/// Builds a [`ModelHandle`].
///
/// The stdout observer is registered by default; call `stdout(false)` to
/// stream only to explicitly added observers.
///
/// # Example
///
/// ```rust,ignore
/// let handle = ModelHandle::builder()
///     .temperature(0.2)
///     .model("gpt-4")
///     .streaming(true)
///     .backend(Arc::new(my_backend))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct ModelBuilder {
    config: ModelConfig,
    backend: Option<Arc<dyn ChatCapability>>,
    observers: Vec<Arc<dyn StreamObserver>>,
    stdout: bool,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            config: ModelConfig::default(),
            backend: None,
            observers: Vec::new(),
            stdout: true,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn streaming(mut self, streaming: bool) -> Self {
        self.config.streaming = streaming;
        self
    }

    /// Register the stdout token sink (on by default).
    pub fn stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    /// Register an additional observer. Observers are called in the order
    /// they were added, after the stdout sink.
    pub fn observer(mut self, observer: Arc<dyn StreamObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Set the chat backend the handle forwards requests to.
    pub fn backend(mut self, backend: Arc<dyn ChatCapability>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<ModelHandle> {
        self.config.validate()?;

        let backend = self.backend.ok_or_else(|| {
            ChainError::ConfigurationError("No chat backend configured".to_string())
        })?;

        let mut observers: Vec<Arc<dyn StreamObserver>> = Vec::with_capacity(self.observers.len() + 1);
        if self.stdout {
            observers.push(Arc::new(StdoutObserver::new()));
        }
        observers.extend(self.observers);

        tracing::debug!(
            provider = backend.provider_id(),
            model = %self.config.model,
            temperature = self.config.temperature,
            streaming = self.config.streaming,
            observers = observers.len(),
            "model handle built"
        );

        Ok(ModelHandle::from_parts(self.config, backend, observers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatRequest, ChatResponse};
    use async_trait::async_trait;

    struct Noop;

    #[async_trait]
    impl ChatCapability for Noop {
        async fn chat_request(&self, _request: ChatRequest) -> Result<ChatResponse> {
            Ok(ChatResponse::default())
        }
    }

    #[test]
    fn test_build_requires_backend() {
        let err = ModelBuilder::new().build().unwrap_err();
        assert!(matches!(err, ChainError::ConfigurationError(_)));
    }

    #[test]
    fn test_build_validates_config() {
        let err = ModelBuilder::new()
            .temperature(3.0)
            .backend(Arc::new(Noop))
            .build()
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidParameter(_)));
    }

    #[test]
    fn test_defaults_and_observers() {
        let handle = ModelBuilder::new().backend(Arc::new(Noop)).build().unwrap();
        assert_eq!(handle.model(), "gpt-4");
        assert_eq!(handle.temperature(), 0.5);
        assert!(handle.is_streaming());
        assert_eq!(handle.observer_count(), 1);

        let handle = ModelBuilder::new()
            .stdout(false)
            .backend(Arc::new(Noop))
            .build()
            .unwrap();
        assert_eq!(handle.observer_count(), 0);
    }
}
