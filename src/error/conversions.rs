//! Type Conversions for ChainError
//!
//! This module contains From trait implementations for converting
//! common error types into ChainError.

use super::types::ChainError;

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ChainError = json_err.into();
        assert!(matches!(err, ChainError::JsonError(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChainError = io_err.into();
        assert!(matches!(err, ChainError::IoError(ref m) if m.contains("missing")));
    }
}
