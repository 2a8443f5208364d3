//! # Stepchain - Prompt Chains for Step-by-Step Math Explanations
//!
//! Stepchain assembles chat prompts that ask a language model to restate a
//! math problem's explanation as numbered, learner-friendly steps.
//!
#![deny(unsafe_code)]

//! ## Modes
//!
//! - **zero-shot**: three independent chains. *explain* reframes an
//!   explanation, *split* breaks it into steps, *question* generates
//!   questions from given steps.
//! - **few-shot**: one chain whose prompt is seeded with five worked
//!   exemplar pairs before the live query.
//!
//! The hosted model sits behind the [`ChatCapability`] trait; bring your own
//! backend.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepchain::prelude::*;
//!
//! let chains = get_chains("zero-shot", ModelConfig::default(), backend)?;
//! let (explain, _split, _question) = chains.into_zero_shot().unwrap().into_tuple();
//!
//! let response = explain
//!     .invoke(&bindings! {
//!         "explain_role" => "You are a patient math tutor.",
//!         "question" => "Solve x^2 - 1 = 0",
//!         "explanation" => "x = 1 or x = -1",
//!     })
//!     .await?;
//! println!("{}", response.content_text());
//! ```

#[macro_use]
mod macros;

pub mod chains;
pub mod defaults;
pub mod error;
pub mod model;
pub mod prompt;
pub mod streaming;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use chains::{Chain, Chains, ZeroShotChains, build_chains, compose, get_chains};
pub use error::{ChainError, Result};
pub use model::{ModelBuilder, ModelHandle};
pub use traits::ChatCapability;

/// Common imports
pub mod prelude {
    pub use crate::chains::{
        Chain, Chains, ZeroShotChains, build_chains, compose, few_shot_template, get_chains,
        math_exemplars,
    };
    pub use crate::error::{ChainError, Result};
    pub use crate::model::{ModelBuilder, ModelHandle};
    pub use crate::prompt::{ChatPromptTemplate, Exemplar, PlaceholderBindings};
    pub use crate::streaming::{ChatStream, StreamObserver};
    pub use crate::traits::ChatCapability;
    pub use crate::types::{
        ChainMode, ChatMessage, ChatRequest, ChatResponse, ChatStreamEvent, MessageRole,
        ModelConfig,
    };
    pub use crate::{ai, bindings, human, system};
}
