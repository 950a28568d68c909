//! Crew configuration from TOML (`[crew]` section)

use crew_domain::DEFAULT_COMPANY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCrewConfig {
    /// Print per-task narration
    pub verbose: bool,
    /// Share earlier task outputs with later tasks
    pub memory: bool,
    /// Max tool-use rounds per task
    pub max_tool_turns: usize,
    /// Company preselected in the form and used when none is given
    pub default_company: String,
}

impl Default for FileCrewConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            memory: true,
            max_tool_turns: 8,
            default_company: DEFAULT_COMPANY.to_string(),
        }
    }
}
