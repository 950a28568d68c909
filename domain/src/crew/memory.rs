//! Short-term crew memory
//!
//! Every finished task is recorded. A later task sees the recorded outputs
//! it does not already receive as explicit context.

use super::output::TaskOutput;
use crate::task::TaskDescriptor;

#[derive(Debug, Clone, Default)]
pub struct CrewMemory {
    entries: Vec<TaskOutput>,
}

impl CrewMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, output: TaskOutput) {
        self.entries.push(output);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Outputs of the tasks named in `task.context`, in context order
    pub fn context_for(&self, task: &TaskDescriptor) -> Vec<&TaskOutput> {
        task.context
            .iter()
            .filter_map(|name| self.entries.iter().find(|e| &e.task_name == name))
            .collect()
    }

    /// Recorded outputs not covered by `task.context`
    pub fn recall_for(&self, task: &TaskDescriptor) -> Vec<&TaskOutput> {
        self.entries
            .iter()
            .filter(|e| !task.context.contains(&e.task_name))
            .collect()
    }

    pub fn into_outputs(self) -> Vec<TaskOutput> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentDescriptor;

    fn output(name: &str) -> TaskOutput {
        TaskOutput {
            task_name: name.to_string(),
            agent_role: "Agent".to_string(),
            description: String::new(),
            raw: format!("{name} result"),
        }
    }

    fn task(context: &[&str]) -> TaskDescriptor {
        let mut task = TaskDescriptor::new("next", "d", "e", AgentDescriptor::new("r", "g", "b"));
        for c in context {
            task = task.with_context(*c);
        }
        task
    }

    #[test]
    fn test_context_and_recall_are_disjoint() {
        let mut memory = CrewMemory::new();
        memory.record(output("a"));
        memory.record(output("b"));

        let task = task(&["b"]);
        let context: Vec<&str> = memory.context_for(&task).iter().map(|o| o.task_name.as_str()).collect();
        let recalled: Vec<&str> = memory.recall_for(&task).iter().map(|o| o.task_name.as_str()).collect();

        assert_eq!(context, vec!["b"]);
        assert_eq!(recalled, vec!["a"]);
    }

    #[test]
    fn test_unknown_context_is_skipped() {
        let mut memory = CrewMemory::new();
        memory.record(output("a"));
        assert!(memory.context_for(&task(&["zzz"])).is_empty());
        assert_eq!(memory.len(), 1);
    }
}
