//! Stream observers
//!
//! An observer is the output sink for streamed tokens. The model handle calls
//! every registered observer, in registration order, for each token as it
//! arrives.

use std::io::Write;
use std::sync::Mutex;

use crate::error::ChainError;
use crate::types::ChatResponse;

/// Receives streaming callbacks from a model handle.
///
/// All methods default to no-ops so implementors only override what they need.
pub trait StreamObserver: Send + Sync {
    /// A streaming call has started.
    fn on_stream_start(&self, _model: &str) {}

    /// A new token (content delta) arrived.
    fn on_token(&self, _token: &str) {}

    /// The stream finished and was aggregated into `response`.
    fn on_stream_end(&self, _response: &ChatResponse) {}

    /// The stream failed.
    fn on_error(&self, _error: &ChainError) {}
}

/// Writes every token to stdout as it arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutObserver;

impl StdoutObserver {
    pub fn new() -> Self {
        Self
    }
}

impl StreamObserver for StdoutObserver {
    fn on_token(&self, token: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(token.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("failed to write token to stdout: {}", e);
        }
    }
}

/// Records tokens in memory.
///
/// Useful for tests and for callers that want the token sequence alongside
/// the aggregated response.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    tokens: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens received so far, in arrival order
    pub fn tokens(&self) -> Vec<String> {
        self.tokens
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// Concatenation of all tokens received so far
    pub fn text(&self) -> String {
        self.tokens().concat()
    }

    /// Error messages received so far
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

impl StreamObserver for CollectingObserver {
    fn on_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(token.to_string());
        }
    }

    fn on_error(&self, error: &ChainError) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error.to_string());
        }
    }
}
