//! Chat request types

use serde::{Deserialize, Serialize};

use super::config::ModelConfig;
use super::message::ChatMessage;

/// Sampling parameters forwarded to the provider
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CommonParams {
    /// Model name
    pub model: String,

    /// Temperature parameter
    pub temperature: Option<f64>,
}

/// Chat request sent across the provider boundary
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChatRequest {
    /// The conversation messages
    pub messages: Vec<ChatMessage>,
    /// Common parameters
    pub common_params: CommonParams,
    /// Stream the response
    pub stream: bool,
}

impl ChatRequest {
    /// Create a new chat request with messages
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Create a request carrying the parameters of a model configuration
    pub fn from_config(messages: Vec<ChatMessage>, config: &ModelConfig) -> Self {
        Self {
            messages,
            common_params: CommonParams {
                model: config.model.clone(),
                temperature: Some(config.temperature),
            },
            stream: config.streaming,
        }
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.common_params.model = model.into();
        self
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.common_params.temperature = Some(temperature);
        self
    }

    /// Enable or disable streaming
    pub fn with_streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}
