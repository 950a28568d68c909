//! OpenAI-compatible LLM Gateway implementation

use super::session::OpenAiSession;
use async_trait::async_trait;
use crew_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crew_domain::{ApiKey, Model};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default API root; sessions post to `{base_url}/v1/chat/completions`
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Connection settings for a chat-completions endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            max_tokens: 4096,
            temperature: None,
        }
    }
}

impl OpenAiConfig {
    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// State shared by every session the gateway opens
pub(crate) struct Connection {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: ApiKey,
    pub(crate) config: OpenAiConfig,
}

/// LLM Gateway for OpenAI and compatible servers
pub struct OpenAiLlmGateway {
    connection: Arc<Connection>,
}

impl OpenAiLlmGateway {
    pub fn new(config: OpenAiConfig, api_key: ApiKey) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(base_url = %config.base_url, key = %api_key, "OpenAiLlmGateway initialized");

        Ok(Self {
            connection: Arc::new(Connection {
                client,
                api_key,
                config,
            }),
        })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.connection.config
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        if model.is_blank() {
            return Err(GatewayError::Other("No model configured".to_string()));
        }

        Ok(Box::new(OpenAiSession::new(
            Arc::clone(&self.connection),
            model.clone(),
            system_prompt,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::try_new("sk-test-1234567890").unwrap()
    }

    #[test]
    fn test_completions_url() {
        let mut config = OpenAiConfig::default();
        assert_eq!(config.completions_url(), "https://api.openai.com/v1/chat/completions");

        config.base_url = "http://localhost:11434/".to_string();
        assert_eq!(config.completions_url(), "http://localhost:11434/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_session_creation_is_local() {
        let gateway = OpenAiLlmGateway::new(OpenAiConfig::default(), key()).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::Gpt4oMini, "You are helpful")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gpt4oMini);
    }

    #[tokio::test]
    async fn test_blank_model_rejected() {
        let gateway = OpenAiLlmGateway::new(OpenAiConfig::default(), key()).unwrap();
        let result = gateway
            .create_session_with_system_prompt(&Model::from(""), "You are helpful")
            .await;
        assert!(matches!(result, Err(GatewayError::Other(_))));
    }
}
