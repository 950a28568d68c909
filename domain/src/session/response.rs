//! Model responses for the function-calling loop.
//!
//! A response is a list of content blocks. When the model wants a tool it
//! emits `ToolUse` blocks and stops with [`StopReason::ToolUse`]; the caller
//! runs the tools and sends the results back on the same session.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within a model response.
///
/// ```
/// use crew_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Let me check the docs.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "call_1".to_string(),
///     name: "read_company_docs".to_string(),
///     input: Default::default(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text(String),

    /// A function call requested by the model
    ToolUse {
        /// Provider-assigned call ID, echoed back with the result
        id: String,
        name: String,
        /// Decoded JSON arguments
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    /// Execute the requested tools and send the results back
    ToolUse,
    /// Output was cut at the token limit
    MaxTokens,
    Other(String),
}

impl StopReason {
    /// Map an OpenAI-style `finish_reason`
    pub fn from_finish_reason(reason: &str) -> Self {
        match reason {
            "stop" => StopReason::EndTurn,
            "tool_calls" | "function_call" => StopReason::ToolUse,
            "length" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A structured response from the model.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    /// Model identifier reported by the API
    pub model: Option<String>,
}

impl LlmResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` blocks.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` blocks as [`ToolCall`]s carrying their native ID.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    /// Whether the caller has to run tools before the model can continue
    pub fn needs_tools(&self) -> bool {
        self.has_tool_calls() || self.stop_reason == Some(StopReason::ToolUse)
    }
}
