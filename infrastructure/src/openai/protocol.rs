//! Chat-completions wire types.
//!
//! Only the fields the crew uses are modelled; unknown response fields are
//! ignored.

use crew_domain::{ContentBlock, LlmResponse, StopReason};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One message of the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Null for assistant messages that only carry tool calls
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    /// Result of one tool call
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }
}

/// A function call as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: WireFunction,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunction {
    pub name: String,
    /// JSON-encoded argument object
    pub arguments: String,
}

/// `POST /v1/chat/completions` body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'a [serde_json::Value]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl ChatResponse {
    /// First choice, which is the only one requested
    pub fn into_first_choice(self) -> Option<(Choice, Option<String>)> {
        let model = self.model;
        self.choices.into_iter().next().map(|c| (c, model))
    }
}

/// Convert an assistant message into the domain response.
///
/// Tool arguments that are not a JSON object decode to an empty map; the
/// validator then reports the missing parameters back to the model.
pub fn to_llm_response(message: &ChatMessage, finish_reason: Option<&str>, model: Option<String>) -> LlmResponse {
    let mut content = Vec::new();

    if let Some(text) = message.content.as_deref()
        && !text.is_empty()
    {
        content.push(ContentBlock::Text(text.to_string()));
    }

    for call in &message.tool_calls {
        let input: HashMap<String, serde_json::Value> =
            serde_json::from_str(&call.function.arguments).unwrap_or_default();
        content.push(ContentBlock::ToolUse {
            id: call.id.clone(),
            name: call.function.name.clone(),
            input,
        });
    }

    let stop_reason = match finish_reason {
        Some(reason) => Some(StopReason::from_finish_reason(reason)),
        None if !message.tool_calls.is_empty() => Some(StopReason::ToolUse),
        None => None,
    };

    LlmResponse {
        content,
        stop_reason,
        model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_empty_options() {
        let messages = vec![ChatMessage::system("You are helpful"), ChatMessage::user("Hi")];
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            tools: None,
            max_tokens: Some(1024),
            temperature: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hi");
        assert!(json["messages"][1].get("tool_calls").is_none());
        assert!(json.get("tools").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_parse_tool_call_response() {
        let body = r#"{
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini-2024-07-18",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": { "name": "read_company_docs", "arguments": "{}" }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        let (choice, model) = response.into_first_choice().unwrap();
        let llm = to_llm_response(&choice.message, choice.finish_reason.as_deref(), model);

        assert!(llm.needs_tools());
        assert_eq!(llm.model.as_deref(), Some("gpt-4o-mini-2024-07-18"));
        let calls = llm.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "read_company_docs");
        assert_eq!(calls[0].native_id.as_deref(), Some("call_abc"));
    }

    #[test]
    fn test_parse_text_response() {
        let body = r#"{
            "choices": [{
                "message": { "role": "assistant", "content": "Dear Andrew, ..." },
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        let (choice, model) = response.into_first_choice().unwrap();
        let llm = to_llm_response(&choice.message, choice.finish_reason.as_deref(), model);

        assert_eq!(llm.text_content(), "Dear Andrew, ...");
        assert_eq!(llm.stop_reason, Some(StopReason::EndTurn));
        assert!(!llm.has_tool_calls());
    }

    #[test]
    fn test_malformed_arguments_decode_empty() {
        let message = ChatMessage {
            role: Role::Assistant,
            content: None,
            tool_calls: vec![WireToolCall {
                id: "call_1".to_string(),
                call_type: "function".to_string(),
                function: WireFunction {
                    name: "search_web".to_string(),
                    arguments: "not json".to_string(),
                },
            }],
            tool_call_id: None,
        };

        let llm = to_llm_response(&message, None, None);
        assert_eq!(llm.stop_reason, Some(StopReason::ToolUse));
        assert!(llm.tool_calls()[0].arguments.is_empty());
    }

    #[test]
    fn test_tool_message_serialization() {
        let json = serde_json::to_value(ChatMessage::tool("call_1", "page text")).unwrap();
        assert_eq!(json["role"], "tool");
        assert_eq!(json["tool_call_id"], "call_1");
        assert_eq!(json["content"], "page text");
    }
}
