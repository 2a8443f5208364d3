//! Error Handling Module
//!
//! This module provides error handling for prompt chains, including:
//! - Core error types (`ChainError`, `ErrorCategory`)
//! - Classification helpers
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use stepchain::error::{ChainError, ErrorCategory};
//!
//! let error = ChainError::missing_placeholder("explain", "question");
//! assert_eq!(error.category(), ErrorCategory::Template);
//! assert!(!error.is_remote());
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;
