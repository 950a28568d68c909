//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Every section has defaults, so a
//! partial file (or none) still deserializes.

mod crew;
mod llm;
mod logging;
mod output;
mod providers;
mod server;
mod tools;

pub use crew::FileCrewConfig;
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use server::FileServerConfig;
pub use tools::FileToolsConfig;

use crate::openai::OpenAiConfig;
use crate::tools::WebToolSettings;
use crew_application::ExecutionParams;
use crew_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub llm: FileLlmConfig,
    pub providers: FileProvidersConfig,
    pub crew: FileCrewConfig,
    pub tools: FileToolsConfig,
    pub output: FileOutputConfig,
    pub server: FileServerConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.llm.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModel {
                    field: "llm.model".to_string(),
                },
                "llm.model: model name must not be empty",
            ));
        }

        if let Some(t) = self.llm.temperature
            && !(0.0..=2.0).contains(&t)
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "llm.temperature".to_string(),
                    value: t.to_string(),
                },
                format!("llm.temperature: {} is outside 0.0..=2.0", t),
            ));
        }

        if self.crew.max_tool_turns == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "crew.max_tool_turns".to_string(),
                    value: "0".to_string(),
                },
                "crew.max_tool_turns: must be at least 1",
            ));
        }

        if self.server.port == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "server.port".to_string(),
                    value: "0".to_string(),
                },
                "server.port: 0 binds a random port",
            ));
        }

        issues
    }

    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_model(self.llm.model())
            .with_max_tool_turns(self.crew.max_tool_turns)
            .with_verbose(self.crew.verbose)
            .with_memory(self.crew.memory)
    }

    pub fn openai_config(&self) -> OpenAiConfig {
        let openai = &self.providers.openai;
        OpenAiConfig {
            base_url: openai.base_url.clone(),
            timeout: Duration::from_secs(openai.timeout_secs),
            max_tokens: self.llm.max_tokens,
            temperature: self.llm.temperature,
        }
    }

    pub fn web_tool_settings(&self) -> WebToolSettings {
        let mut settings = WebToolSettings {
            timeout: Duration::from_secs(self.tools.timeout_secs),
            max_body_bytes: self.tools.max_body_bytes,
            max_text_bytes: self.tools.max_text_bytes,
            ..WebToolSettings::default()
        };
        if let Some(ua) = &self.tools.user_agent {
            settings.user_agent = ua.clone();
        }
        settings
    }
}
