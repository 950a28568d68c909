//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of crew runs; off when unset
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily rolling log files
    pub log_dir: Option<PathBuf>,
}
