//! Task descriptor value object

use crate::agent::AgentDescriptor;
use crate::inquiry::InquiryInputs;
use crate::tool::ToolHandle;
use serde::{Deserialize, Serialize};

/// One unit of work assigned to an agent (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Stable identifier, referenced by other tasks' `context`
    pub name: String,
    /// Instruction template
    pub description: String,
    /// What a good answer looks like
    pub expected_output: String,
    /// Tools the agent may call while working on this task
    pub tools: Vec<ToolHandle>,
    pub agent: AgentDescriptor,
    /// Names of earlier tasks whose output is fed into this one
    pub context: Vec<String>,
}

impl TaskDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: AgentDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            tools: Vec::new(),
            agent,
            context: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: ToolHandle) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_context(mut self, task_name: impl Into<String>) -> Self {
        self.context.push(task_name.into());
        self
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }

    /// Copy with the request inputs substituted into the task and its agent
    pub fn interpolate(&self, inputs: &InquiryInputs) -> Self {
        Self {
            description: inputs.interpolate(&self.description),
            expected_output: inputs.interpolate(&self.expected_output),
            agent: self.agent.interpolate(inputs),
            ..self.clone()
        }
    }
}
