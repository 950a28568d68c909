//! OpenAI LLM session implementation
//!
//! The chat-completions API is stateless, so the session keeps the full
//! message history and replays it on every call.

use super::error::OpenAiError;
use super::gateway::Connection;
use super::protocol::{self, ChatMessage, ChatRequest, ChatResponse, Role, WireFunction, WireToolCall};
use async_trait::async_trait;
use crew_application::ports::llm_gateway::{GatewayError, LlmSession, ToolResultMessage};
use crew_domain::{ContentBlock, LlmResponse, Model};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct OpenAiSession {
    connection: Arc<Connection>,
    model: Model,
    /// Conversation history, starting with the system prompt
    messages: Mutex<Vec<ChatMessage>>,
    /// Tool schemas offered with `send_with_tools`, re-sent with results
    tools: Mutex<Vec<serde_json::Value>>,
}

impl OpenAiSession {
    pub(crate) fn new(connection: Arc<Connection>, model: Model, system_prompt: &str) -> Self {
        let mut messages = Vec::new();
        if !system_prompt.is_empty() {
            messages.push(ChatMessage::system(system_prompt));
        }

        Self {
            connection,
            model,
            messages: Mutex::new(messages),
            tools: Mutex::new(Vec::new()),
        }
    }

    /// Append `new_messages`, call the API, and record the assistant reply.
    ///
    /// The history is only extended when the call succeeds.
    async fn exchange(&self, new_messages: Vec<ChatMessage>) -> Result<LlmResponse, GatewayError> {
        let mut messages = self.messages.lock().await;
        let tools = self.tools.lock().await;

        let mut pending = messages.clone();
        pending.extend(new_messages.iter().cloned());

        let config = &self.connection.config;
        let request = ChatRequest {
            model: self.model.as_str(),
            messages: &pending,
            tools: if tools.is_empty() { None } else { Some(tools.as_slice()) },
            max_tokens: Some(config.max_tokens),
            temperature: config.temperature,
        };

        debug!(
            model = %self.model,
            messages = pending.len(),
            tools = tools.len(),
            "Calling chat completions"
        );

        let (choice, model) = self.post(&request).await?;
        let response = protocol::to_llm_response(
            &choice.message,
            choice.finish_reason.as_deref(),
            model,
        );

        messages.extend(new_messages);
        messages.push(assistant_message(&response));
        Ok(response)
    }

    async fn post(&self, request: &ChatRequest<'_>) -> Result<(protocol::Choice, Option<String>), OpenAiError> {
        let http = self
            .connection
            .client
            .post(self.connection.config.completions_url())
            .bearer_auth(self.connection.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = http.status();
        let body = http.text().await?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(OpenAiError::Unauthorized {
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        parsed.into_first_choice().ok_or(OpenAiError::NoChoices)
    }
}

/// Rebuild the assistant turn for the history
fn assistant_message(response: &LlmResponse) -> ChatMessage {
    let text = response.text_content();
    let tool_calls = response
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::ToolUse { id, name, input } => Some(WireToolCall {
                id: id.clone(),
                call_type: "function".to_string(),
                function: WireFunction {
                    name: name.clone(),
                    arguments: serde_json::to_string(input).unwrap_or_else(|_| "{}".to_string()),
                },
            }),
            ContentBlock::Text(_) => None,
        })
        .collect();

    ChatMessage {
        role: Role::Assistant,
        content: if text.is_empty() { None } else { Some(text) },
        tool_calls,
        tool_call_id: None,
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self.exchange(vec![ChatMessage::user(content)]).await?;
        Ok(response.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        *self.tools.lock().await = tools.to_vec();
        self.exchange(vec![ChatMessage::user(content)]).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        let messages = results
            .iter()
            .map(|r| ChatMessage::tool(&r.tool_use_id, &r.output))
            .collect();
        self.exchange(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_assistant_message_with_tool_call() {
        let mut input = HashMap::new();
        input.insert("search_query".to_string(), serde_json::json!("memory"));
        let response = LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: "call_1".to_string(),
                name: "search_web".to_string(),
                input,
            }],
            stop_reason: None,
            model: None,
        };

        let message = assistant_message(&response);
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, None);
        assert_eq!(message.tool_calls.len(), 1);
        assert_eq!(message.tool_calls[0].function.name, "search_web");
        assert_eq!(message.tool_calls[0].function.arguments, r#"{"search_query":"memory"}"#);
    }

    #[test]
    fn test_assistant_message_text_only() {
        let message = assistant_message(&LlmResponse::from_text("Hello"));
        assert_eq!(message.content.as_deref(), Some("Hello"));
        assert!(message.tool_calls.is_empty());
    }
}
