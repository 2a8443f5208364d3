//! Default Configuration Values
//!
//! This module centralizes the default values used by the model factory,
//! the chain factory, and the telemetry helpers.

/// Model handle defaults
pub mod model {
    /// Sampling temperature used when none is configured
    pub const TEMPERATURE: f64 = 0.5;

    /// Model identifier used when none is configured
    pub const MODEL: &str = "gpt-4";

    /// Whether responses are streamed token by token
    pub const STREAMING: bool = true;

    /// Highest temperature accepted by `ModelConfig::validate`
    pub const MAX_TEMPERATURE: f64 = 2.0;
}

/// Environment variables read by `ModelConfig::from_env`
pub mod env {
    pub const MODEL: &str = "STEPCHAIN_MODEL";
    pub const TEMPERATURE: &str = "STEPCHAIN_TEMPERATURE";
    pub const STREAMING: &str = "STEPCHAIN_STREAMING";

    pub const LOG_LEVEL: &str = "STEPCHAIN_LOG_LEVEL";
    pub const LOG_FORMAT: &str = "STEPCHAIN_LOG_FORMAT";
    pub const LOG_FILE: &str = "STEPCHAIN_LOG_FILE";
}

/// Chain names used in errors and tracing spans
pub mod chain_names {
    pub const EXPLAIN: &str = "explain";
    pub const SPLIT: &str = "split";
    pub const QUESTION: &str = "question";
    pub const FEW_SHOT: &str = "few_shot";
    pub const EXEMPLAR: &str = "exemplar";
}
