//! Domain layer for support-crew
//!
//! Value objects and pure factories. Nothing here performs I/O.
//!
//! # Core Concepts
//!
//! ## Crew
//!
//! A support run is a [`Crew`]: two agents and two tasks executed in order.
//!
//! - **Responder** drafts the answer (`inquiry_resolution`), with the
//!   company documentation page as its only tool
//! - **Reviewer** checks and rewrites the draft (`quality_assurance_review`),
//!   receiving the draft as explicit context
//!
//! ## Company
//!
//! Every factory takes a company name and resolves it to a
//! [`CompanyProfile`]. Unknown names get a profile derived from the name.

pub mod agent;
pub mod company;
pub mod config;
pub mod core;
pub mod crew;
pub mod inquiry;
pub mod progress;
pub mod prompt;
pub mod session;
pub mod task;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentDescriptor, SupportAgents, create_agents};
pub use company::{CUSTOM_OPTION, CompanyProfile, CompanySelection, DEFAULT_COMPANY, KNOWN_COMPANIES};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::{credential::ApiKey, error::DomainError, model::Model};
pub use crew::{Crew, CrewMemory, CrewOutput, Process, TaskOutput};
pub use inquiry::InquiryInputs;
pub use progress::{ERROR_LABEL, ProgressStage};
pub use prompt::CrewPromptTemplate;
pub use session::response::{ContentBlock, LlmResponse, StopReason};
pub use task::{
    INQUIRY_RESOLUTION, QUALITY_ASSURANCE_REVIEW, SupportTasks, TaskDescriptor, create_tasks,
};
pub use tool::{
    AgentTools, DefaultToolValidator, READ_COMPANY_DOCS, SCRAPE_WEBSITE, SEARCH_WEB, ToolCall,
    ToolDefinition, ToolError, ToolHandle, ToolKind, ToolParameter, ToolResult,
    ToolResultMetadata, ToolSpec, ToolValidator, agent_tools, tool_spec_for,
};

#[cfg(test)]
mod tests {
    #[test]
    fn test_tool_names_reachable_from_crate_root() {
        let tools = crate::agent_tools("CrewAI");
        let names: Vec<&str> = tools.all().iter().map(|h| h.name()).collect();
        assert_eq!(
            names,
            vec![crate::SEARCH_WEB, crate::SCRAPE_WEBSITE, crate::READ_COMPANY_DOCS]
        );
    }
}
