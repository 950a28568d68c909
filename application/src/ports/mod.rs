//! Ports: the interfaces the use cases drive.
//!
//! Adapters live in the infrastructure and presentation layers.

pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
pub mod tool_executor;
pub mod tool_schema;
