//! Constructors and classification helpers for `ChainError`

use super::types::{ChainError, ErrorCategory};

impl ChainError {
    /// Create a missing-placeholder error.
    pub fn missing_placeholder(template: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::MissingPlaceholder {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Create a template syntax error at a byte offset.
    pub fn template_syntax(position: usize, message: impl Into<String>) -> Self {
        Self::TemplateSyntax {
            position,
            message: message.into(),
        }
    }

    /// Create an API error.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// Create a provider error.
    pub fn provider_error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Category of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingPlaceholder { .. } | Self::TemplateSyntax { .. } => ErrorCategory::Template,
            Self::InvalidMode(_) | Self::InvalidParameter(_) | Self::ConfigurationError(_) => {
                ErrorCategory::Configuration
            }
            Self::HttpError(_)
            | Self::ApiError { .. }
            | Self::RateLimitError(_)
            | Self::AuthenticationError(_)
            | Self::StreamError(_)
            | Self::ProviderError { .. }
            | Self::UnsupportedOperation(_) => ErrorCategory::Remote,
            Self::JsonError(_) | Self::IoError(_) | Self::InternalError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// Whether the error came from the model provider boundary.
    pub const fn is_remote(&self) -> bool {
        matches!(self.category(), ErrorCategory::Remote)
    }

    /// Whether the error came from parsing or rendering a template.
    pub const fn is_template_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Template)
    }

    /// The unbound placeholder name, if this is a `MissingPlaceholder`.
    pub fn missing_placeholder_name(&self) -> Option<&str> {
        match self {
            Self::MissingPlaceholder { placeholder, .. } => Some(placeholder),
            _ => None,
        }
    }

    /// HTTP-like status code, if the provider reported one.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::RateLimitError(_) => Some(429),
            Self::AuthenticationError(_) => Some(401),
            _ => None,
        }
    }
}
