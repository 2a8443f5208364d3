//! Core data types shared by templates, chains, and model handles

pub mod config;
pub mod message;
pub mod mode;
pub mod request;
pub mod response;
pub mod streaming;

pub use config::ModelConfig;
pub use message::{ChatMessage, MessageRole};
pub use mode::ChainMode;
pub use request::{ChatRequest, CommonParams};
pub use response::{ChatResponse, FinishReason, Usage};
pub use streaming::ChatStreamEvent;
