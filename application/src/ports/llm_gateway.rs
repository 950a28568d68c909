//! LLM Gateway port
//!
//! Defines the interface for talking to a chat model.

use async_trait::async_trait;
use crew_domain::{LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the failure is about the credential rather than the request
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// Result of one tool call, sent back to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResultMessage {
    /// Call ID the model assigned to the request
    pub tool_use_id: String,
    pub tool_name: String,
    pub output: String,
    pub is_error: bool,
}

/// Gateway for LLM communication
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a conversation whose first message is `system_prompt`
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active conversation with one model
///
/// Sessions keep their own history; every call appends to it.
#[async_trait]
pub trait LlmSession: Send + Sync {
    fn model(&self) -> &Model;

    /// Send a user message and get the text reply
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a user message and offer the model `tools` (function schemas)
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;

    /// Answer the tool calls of the previous response
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError>;
}
