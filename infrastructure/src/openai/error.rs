//! Error types for the OpenAI adapter

use crew_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API rejected the credential (status {status}): {body}")]
    Unauthorized { status: u16, body: String },

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            e @ OpenAiError::Unauthorized { .. } => GatewayError::Authentication(e.to_string()),
            e @ OpenAiError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            e @ (OpenAiError::Parse(_) | OpenAiError::NoChoices) => {
                GatewayError::InvalidResponse(e.to_string())
            }
        }
    }
}
