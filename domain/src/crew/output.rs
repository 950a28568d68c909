//! Outputs produced by a crew run

use serde::{Deserialize, Serialize};

/// Final answer of one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task_name: String,
    pub agent_role: String,
    /// Task description after interpolation
    pub description: String,
    pub raw: String,
}

/// Result of a whole crew run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewOutput {
    /// Output of the last task
    pub raw: String,
    pub tasks_output: Vec<TaskOutput>,
}

impl CrewOutput {
    /// Assemble from per-task outputs; `raw` is taken from the last one.
    pub fn from_tasks(tasks_output: Vec<TaskOutput>) -> Self {
        let raw = tasks_output
            .last()
            .map(|t| t.raw.clone())
            .unwrap_or_default();
        Self { raw, tasks_output }
    }

    pub fn task(&self, name: &str) -> Option<&TaskOutput> {
        self.tasks_output.iter().find(|t| t.task_name == name)
    }
}

impl std::fmt::Display for CrewOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
