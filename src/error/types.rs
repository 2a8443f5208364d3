//! Core error types

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors produced while building, rendering, or invoking prompt chains.
///
/// The first group is raised locally (templates, configuration, mode
/// selection). The second group is what a `ChatCapability` backend returns;
/// chains pass those through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    /// A placeholder declared by the template has no binding.
    #[error("Missing placeholder '{placeholder}' for template '{template}'")]
    MissingPlaceholder {
        /// Name of the template being rendered
        template: String,
        /// Name of the unbound placeholder
        placeholder: String,
    },

    /// The requested chain mode is not recognised.
    #[error("Invalid mode '{0}': expected 'zero-shot' or 'few-shot'")]
    InvalidMode(String),

    /// A text pattern could not be parsed.
    #[error("Template syntax error at byte {position}: {message}")]
    TemplateSyntax {
        /// Byte offset into the pattern
        position: usize,
        /// Description of the problem
        message: String,
    },

    /// A parameter value is out of range or malformed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The factory or builder is missing something it needs.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Reading a file failed.
    #[error("IO error: {0}")]
    IoError(String),

    /// Transport-level failure reported by the backend.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Error response from the model provider.
    #[error("API error {code}: {message}")]
    ApiError {
        /// Status code reported by the provider
        code: u16,
        /// Provider message
        message: String,
    },

    /// The provider rejected the call for rate limiting.
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Credentials were missing or rejected.
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// The response stream broke or reported an error event.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Provider-specific failure.
    #[error("Provider error ({provider}): {message}")]
    ProviderError {
        /// Provider identifier
        provider: String,
        /// Provider message
        message: String,
    },

    /// The backend does not support the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invariant violation inside the crate or backend.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse classification of a [`ChainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Template parsing or rendering
    Template,
    /// Mode, parameter, or builder configuration
    Configuration,
    /// Failure surfaced by the model provider
    Remote,
    /// Local serialization, IO, or invariant failure
    Internal,
}
