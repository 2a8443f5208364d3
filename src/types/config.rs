//! Model configuration

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{ChainError, Result};

/// Sampling configuration for a model handle.
///
/// Immutable once a handle has been built from it.
///
/// # Example
///
/// ```rust
/// use stepchain::types::ModelConfig;
///
/// let config = ModelConfig::new()
///     .with_temperature(0.2)
///     .with_streaming(false)
///     .with_model("test-model");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Sampling temperature
    pub temperature: f64,
    /// Model identifier
    pub model: String,
    /// Emit tokens to observers as they arrive
    pub streaming: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            temperature: defaults::model::TEMPERATURE,
            model: defaults::model::MODEL.to_string(),
            streaming: defaults::model::STREAMING,
        }
    }
}

impl ModelConfig {
    /// Configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Check that the model identifier and temperature are usable
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ChainError::InvalidParameter(
                "Model name cannot be empty".to_string(),
            ));
        }

        if !self.temperature.is_finite()
            || !(0.0..=defaults::model::MAX_TEMPERATURE).contains(&self.temperature)
        {
            return Err(ChainError::InvalidParameter(format!(
                "Temperature must be between 0.0 and {}, got {}",
                defaults::model::MAX_TEMPERATURE,
                self.temperature
            )));
        }

        Ok(())
    }

    /// Defaults overlaid with `STEPCHAIN_MODEL`, `STEPCHAIN_TEMPERATURE`
    /// and `STEPCHAIN_STREAMING`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(model) = lookup(defaults::env::MODEL) {
            config.model = model;
        }

        if let Some(raw) = lookup(defaults::env::TEMPERATURE) {
            config.temperature = raw.trim().parse().map_err(|_| {
                ChainError::ConfigurationError(format!(
                    "{} must be a number, got '{raw}'",
                    defaults::env::TEMPERATURE
                ))
            })?;
        }

        if let Some(raw) = lookup(defaults::env::STREAMING) {
            config.streaming = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ChainError::ConfigurationError(format!(
                        "{} must be a boolean, got '{raw}'",
                        defaults::env::STREAMING
                    )));
                }
            };
        }

        config.validate()?;
        Ok(config)
    }
}
