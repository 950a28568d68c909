//! Prompt templates for running a task with an agent

use crate::agent::AgentDescriptor;
use crate::crew::TaskOutput;
use crate::task::TaskDescriptor;

/// Templates for the system and user prompts of a task session
pub struct CrewPromptTemplate;

impl CrewPromptTemplate {
    /// System prompt describing the agent.
    ///
    /// `with_tools` adds a short hint on function calling.
    pub fn agent_system(agent: &AgentDescriptor, with_tools: bool) -> String {
        let mut prompt = format!(
            "You are {}. {}\nYour personal goal is: {}",
            agent.role, agent.backstory, agent.goal
        );
        if with_tools {
            prompt.push_str(
                "\n\nYou have access to tools. Call them whenever they help you give an accurate answer. \
                 Once you have what you need, reply with your final answer as plain text.",
            );
        }
        prompt
    }

    /// User prompt for a task.
    ///
    /// `context` holds the outputs the task depends on; `recalled` holds the
    /// rest of the crew's earlier work when memory is on.
    pub fn task_prompt(task: &TaskDescriptor, context: &[&TaskOutput], recalled: &[&TaskOutput]) -> String {
        let mut prompt = format!(
            "Current Task: {}\n\n\
             This is the expected criteria for your final answer: {}\n\
             You MUST return the actual complete content as the final answer, not a summary.",
            task.description, task.expected_output
        );

        if !context.is_empty() {
            prompt.push_str("\n\nThis is the context you're working with:\n");
            prompt.push_str(&Self::join_outputs(context));
        }

        if !recalled.is_empty() {
            prompt.push_str("\n\n## Previous crew activity\n");
            prompt.push_str(&Self::join_outputs(recalled));
        }

        prompt.push_str(
            "\n\nBegin! This is VERY important to you, use the tools available and give your best Final Answer, \
             your job depends on it!",
        );
        prompt
    }

    fn join_outputs(outputs: &[&TaskOutput]) -> String {
        outputs
            .iter()
            .map(|o| format!("[{}] {}", o.agent_role, o.raw.trim()))
            .collect::<Vec<_>>()
            .join("\n\n----------\n\n")
    }
}
