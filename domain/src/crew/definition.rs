//! Crew definition (Entity)

use crate::agent::AgentDescriptor;
use crate::core::error::DomainError;
use crate::task::TaskDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How tasks are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    /// One task after another, in declaration order
    #[default]
    Sequential,
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Process::Sequential => write!(f, "sequential"),
        }
    }
}

/// A crew ready to be kicked off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    pub agents: Vec<AgentDescriptor>,
    pub tasks: Vec<TaskDescriptor>,
    pub process: Process,
    pub verbose: bool,
    /// Share earlier task outputs with later tasks
    pub memory: bool,
}

impl Crew {
    pub fn new(agents: Vec<AgentDescriptor>, tasks: Vec<TaskDescriptor>) -> Self {
        Self {
            agents,
            tasks,
            process: Process::Sequential,
            verbose: true,
            memory: true,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_memory(mut self, memory: bool) -> Self {
        self.memory = memory;
        self
    }

    /// Check the crew can run: at least one task, and every `context`
    /// entry names a task scheduled earlier.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tasks.is_empty() {
            return Err(DomainError::NoTasks);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for task in &self.tasks {
            if let Some(missing) = task.context.iter().find(|dep| !seen.contains(dep.as_str())) {
                return Err(DomainError::UnknownContext {
                    task: task.name.clone(),
                    dependency: missing.clone(),
                });
            }
            seen.insert(&task.name);
        }
        Ok(())
    }
}
