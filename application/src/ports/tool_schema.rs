//! Tool schema conversion port.
//!
//! The domain decides which tools a task gets; this port turns their
//! definitions into the JSON the model API expects.

use crew_domain::{ToolDefinition, ToolSpec};

pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to a function schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools, sorted by name.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
