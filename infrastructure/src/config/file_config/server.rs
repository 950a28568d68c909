//! HTTP form server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl FileServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
