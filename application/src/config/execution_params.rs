//! Execution parameters for a crew run.

use crew_domain::Model;
use serde::{Deserialize, Serialize};

/// Model choice and loop control for [`RunCrewUseCase`](crate::use_cases::run_crew::RunCrewUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Model every agent runs on.
    pub model: Model,
    /// Maximum tool-use rounds per task.
    pub max_tool_turns: usize,
    /// Narrate agent turns in the logs.
    pub verbose: bool,
    /// Share earlier task outputs with later tasks.
    pub memory: bool,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tool_turns: 8,
            verbose: true,
            memory: true,
        }
    }
}

impl ExecutionParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_memory(mut self, memory: bool) -> Self {
        self.memory = memory;
        self
    }
}
