//! Agent descriptor value object

use crate::inquiry::InquiryInputs;
use serde::{Deserialize, Serialize};

/// Persona handed to the model as its system prompt (Value Object)
///
/// Text fields may contain `{customer}`, `{person}` and `{inquiry}`
/// placeholders; they are filled per request via [`interpolate`](Self::interpolate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    /// Whether the agent may hand work to a teammate
    pub allow_delegation: bool,
    /// Whether the agent's turns are narrated in the logs
    pub verbose: bool,
}

impl AgentDescriptor {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            allow_delegation: true,
            verbose: false,
        }
    }

    pub fn with_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = allow;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Copy of this descriptor with the request inputs substituted
    pub fn interpolate(&self, inputs: &InquiryInputs) -> Self {
        Self {
            role: inputs.interpolate(&self.role),
            goal: inputs.interpolate(&self.goal),
            backstory: inputs.interpolate(&self.backstory),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let agent = AgentDescriptor::new("Role", "Goal", "Backstory");
        assert!(agent.allow_delegation);
        assert!(!agent.verbose);
    }

    #[test]
    fn test_interpolate_keeps_flags() {
        let agent = AgentDescriptor::new("Helper for {customer}", "Help {person}", "Story")
            .with_delegation(false)
            .with_verbose(true);
        let inputs = InquiryInputs::new("Acme", "Jane", "Refund?");

        let filled = agent.interpolate(&inputs);
        assert_eq!(filled.role, "Helper for Acme");
        assert_eq!(filled.goal, "Help Jane");
        assert!(!filled.allow_delegation);
        assert!(filled.verbose);
        // template descriptor untouched
        assert_eq!(agent.role, "Helper for {customer}");
    }
}
