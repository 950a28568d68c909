//! Structured transcript of crew runs.
//!
//! [`JsonlConversationLogger`] implements the
//! [`ConversationLogger`](crew_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
