//! Application layer for support-crew
//!
//! Ports and use cases. Depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    progress::{NoProgress, ProgressNotifier},
    tool_executor::{ToolExecutorFactory, ToolExecutorPort},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::process_inquiry::{
    InquiryReport, InquiryRequest, ProcessInquiryError, ProcessInquiryUseCase,
};
pub use use_cases::run_crew::{RunCrewError, RunCrewUseCase};
