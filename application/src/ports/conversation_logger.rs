//! Port for structured conversation logging.
//!
//! Separate from `tracing`: tracing carries diagnostics, this port carries
//! the machine-readable transcript of a crew run (prompts, model replies,
//! tool calls).

use serde_json::Value;

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "task_started", "tool_call").
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Records conversation events.
///
/// `log` is synchronous and infallible; a logger that cannot write drops
/// the event.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
