//! Presentation-level configuration
//!
//! Output and form behavior, resolved from the CLI flags on top of the
//! config file.

use crew_domain::{DEFAULT_COMPANY, OutputFormat};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Hide progress indicators
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            quiet: false,
        }
    }
}

/// Interactive form configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Preselected company (used when the selector is left blank)
    pub default_company: String,
    /// Print per-task activity above the progress bar
    pub verbose: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_company: DEFAULT_COMPANY.to_string(),
            verbose: true,
        }
    }
}
