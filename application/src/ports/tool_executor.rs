//! Tool Executor port
//!
//! Runs the web tools a task was given.

use async_trait::async_trait;
use crew_domain::{ToolCall, ToolDefinition, ToolHandle, ToolResult, ToolSpec};
use std::sync::Arc;

/// Port for tool execution
///
/// An executor serves one fixed set of tools. Calls to anything outside
/// [`tool_spec`](Self::tool_spec) fail with a `NOT_FOUND` result.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    fn tool_spec(&self) -> &ToolSpec;

    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get_resolved(name).is_some()
    }

    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get_resolved(name)
    }

    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a tool call. Failures come back as a failed [`ToolResult`].
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}

/// Builds an executor for the tools attached to a task
pub trait ToolExecutorFactory: Send + Sync {
    fn for_handles(&self, handles: &[ToolHandle]) -> Arc<dyn ToolExecutorPort>;
}
