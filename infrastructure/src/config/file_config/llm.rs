//! Model configuration from TOML (`[llm]` section)

use crew_domain::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Chat-completions model identifier
    pub model: String,
    /// Sampling temperature; the API default when unset
    pub temperature: Option<f32>,
    /// Max tokens per response
    pub max_tokens: u32,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: None,
            max_tokens: 4096,
        }
    }
}

impl FileLlmConfig {
    pub fn model(&self) -> Model {
        Model::from(self.model.trim())
    }
}
