//! Infrastructure layer for support-crew
//!
//! Adapters for the application ports: the OpenAI-compatible gateway, the
//! web tools, the JSONL transcript, plus config loading and credential
//! resolution.

pub mod config;
pub mod credential;
pub mod logging;
pub mod openai;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use credential::{CredentialError, DEFAULT_API_KEY_ENV, resolve_api_key};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiConfig, OpenAiError, OpenAiLlmGateway, OpenAiSession};
pub use tools::{CrewToolExecutor, CrewToolFactory, JsonSchemaToolConverter, WebToolSettings};
