//! OpenAI-compatible chat-completions adapter

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::OpenAiError;
pub use gateway::{OpenAiConfig, OpenAiLlmGateway};
pub use session::OpenAiSession;
