//! Web tool configuration from TOML (`[tools]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Largest page body downloaded
    pub max_body_bytes: usize,
    /// Largest extracted text handed to the model
    pub max_text_bytes: usize,
    /// User-Agent override
    pub user_agent: Option<String>,
}

impl Default for FileToolsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_body_bytes: 5 * 1024 * 1024,
            max_text_bytes: 50 * 1024,
            user_agent: None,
        }
    }
}
