//! Presentation layer for support-crew
//!
//! CLI definitions, the interactive form, progress reporters, console
//! output, and the HTTP form server.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{FormConfig, OutputConfig};
pub use form::InquiryForm;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::status::SystemStatus;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{InquiryBackend, SetupError, serve};
