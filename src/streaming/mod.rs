//! Streaming Module
//!
//! Consumer side of token streaming:
//! - the `ChatStream` type every backend returns
//! - observers that receive tokens in arrival order
//! - the processor that folds events into a final `ChatResponse`

mod observer;
mod processor;

pub use observer::*;
pub use processor::*;

use futures::Stream;
use std::pin::Pin;

use crate::error::ChainError;

pub use crate::types::ChatStreamEvent;

/// Chat Stream
///
/// A pinned, boxed stream of `ChatStreamEvent` items. Backends implement
/// streaming by returning this type.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatStreamEvent, ChainError>> + Send>>;
