//! Wiring of infrastructure adapters into use cases

use crew_application::{
    ConversationLogger, GatewayError, ProcessInquiryUseCase, RunCrewUseCase,
};
use crew_domain::{ApiKey, agent_tools, create_agents};
use crew_infrastructure::credential::{CredentialError, resolve_api_key_with};
use crew_infrastructure::{
    CrewToolFactory, FileConfig, JsonSchemaToolConverter, JsonlConversationLogger,
    OpenAiLlmGateway,
};
use crew_presentation::{InquiryBackend, SetupError, SystemStatus};
use std::sync::Arc;

/// Builds [`ProcessInquiryUseCase`]s from the loaded config
pub struct CrewBackend {
    config: FileConfig,
    server_key: Option<ApiKey>,
    tools: Arc<CrewToolFactory>,
    conversation_logger: Option<Arc<JsonlConversationLogger>>,
}

impl CrewBackend {
    pub fn new(
        config: FileConfig,
        server_key: Option<ApiKey>,
        tools: CrewToolFactory,
    ) -> Self {
        let conversation_logger = config
            .logging
            .conversation_log
            .as_ref()
            .and_then(JsonlConversationLogger::try_open)
            .map(Arc::new);

        Self {
            config,
            server_key,
            tools: Arc::new(tools),
            conversation_logger,
        }
    }

    pub fn build(&self, api_key: ApiKey) -> Result<Arc<ProcessInquiryUseCase>, GatewayError> {
        let gateway = OpenAiLlmGateway::new(self.config.openai_config(), api_key)?;

        let mut run_crew = RunCrewUseCase::new(
            Arc::new(gateway),
            self.tools.clone(),
            Arc::new(JsonSchemaToolConverter),
        );
        if let Some(logger) = &self.conversation_logger {
            run_crew = run_crew.with_conversation_logger(logger.clone() as Arc<dyn ConversationLogger>);
        }

        Ok(Arc::new(ProcessInquiryUseCase::new(
            run_crew,
            self.config.execution_params(),
        )))
    }

    pub fn missing_key(&self) -> CredentialError {
        CredentialError::Missing {
            env_var: self.config.providers.openai.api_key_env.clone(),
        }
    }
}

impl InquiryBackend for CrewBackend {
    fn use_case(&self, api_key: Option<&str>) -> Result<Arc<ProcessInquiryUseCase>, SetupError> {
        let key = match api_key {
            Some(explicit) => resolve_api_key_with(
                Some(explicit),
                None,
                &self.config.providers.openai.api_key_env,
                |_| None,
            ),
            None => self.server_key.clone().ok_or_else(|| self.missing_key()),
        }
        .map_err(|e| SetupError(e.to_string()))?;

        self.build(key).map_err(|e| SetupError(e.to_string()))
    }

    fn status(&self) -> SystemStatus {
        let company = &self.config.crew.default_company;
        SystemStatus {
            agents: create_agents(company).as_vec().len(),
            tools: agent_tools(company).all().len(),
            memory: self.config.crew.memory,
            api_configured: self.server_key.is_some(),
            model: self.config.llm.model.clone(),
        }
    }

    fn default_company(&self) -> &str {
        &self.config.crew.default_company
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_infrastructure::WebToolSettings;

    fn backend(server_key: Option<&str>) -> CrewBackend {
        CrewBackend::new(
            FileConfig::default(),
            server_key.and_then(ApiKey::try_new),
            CrewToolFactory::new(WebToolSettings::default()).unwrap(),
        )
    }

    #[test]
    fn test_status_counts() {
        let status = backend(None).status();
        assert_eq!(status.agents, 2);
        assert_eq!(status.tools, 3);
        assert!(status.memory);
        assert!(!status.api_configured);
    }

    #[test]
    fn test_missing_key_is_setup_error() {
        let err = backend(None).use_case(None).err().unwrap();
        assert!(err.0.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_form_key_or_server_key() {
        assert!(backend(None).use_case(Some("sk-form-key-123456")).is_ok());
        assert!(backend(Some("sk-server-key-123456")).use_case(None).is_ok());
    }
}
