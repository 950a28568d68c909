//! Tool domain module
//!
//! Tools give the support agents access to the web while they work on a
//! task. The domain only describes them; execution lives behind the
//! application layer's `ToolExecutorPort`.
//!
//! ```text
//! ToolHandle ──definition()──▶ ToolDefinition ──▶ ToolSpec (per task)
//!                                                   │
//!                      model emits ToolCall ◀───────┘
//!                                  │
//!                                  ▼
//!                              ToolResult
//! ```
//!
//! | Handle | Tool name | Arguments |
//! |--------|-----------|-----------|
//! | search | `search_web` | `search_query`, optional `website` |
//! | scrape | `scrape_website` | `website_url` |
//! | scoped scrape | `read_company_docs` | none (bound URL) |

pub mod entities;
pub mod handle;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use handle::{
    AgentTools, READ_COMPANY_DOCS, SCRAPE_WEBSITE, SEARCH_WEB, ToolHandle, ToolKind, agent_tools,
    tool_spec_for,
};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
