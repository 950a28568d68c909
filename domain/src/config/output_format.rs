//! Output format value object

use serde::{Deserialize, Serialize};

/// How an inquiry report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header, response and metadata row
    Full,
    /// Only the final response (default)
    #[default]
    Result,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "result" => Ok(Self::Result),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected full, result or json)")),
        }
    }
}
