//! Agent personas for the support crew.
//!
//! An agent is a role/goal/backstory bundle. It becomes the system prompt
//! of every LLM session opened for the agent's tasks.

mod descriptor;
mod factory;

pub use descriptor::AgentDescriptor;
pub use factory::{
    QA_ROLE_PREFIX, RESPONDER_GOAL, RESPONDER_ROLE, SupportAgents, create_agents,
};
