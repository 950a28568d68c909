//! Company selector choice

use super::profile::{DEFAULT_COMPANY, KNOWN_COMPANIES};
use serde::{Deserialize, Serialize};

/// Label of the free-text entry in the company selector
pub const CUSTOM_OPTION: &str = "Custom";

/// What the user picked in the company selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum CompanySelection {
    /// One of the curated companies
    Known(String),
    /// Free-text company name
    Custom(String),
}

impl CompanySelection {
    /// Selector options: the curated companies followed by `Custom`
    pub fn options() -> Vec<&'static str> {
        let mut options = KNOWN_COMPANIES.to_vec();
        options.push(CUSTOM_OPTION);
        options
    }

    /// Interpret a raw company string (e.g. a CLI flag or form value)
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if KNOWN_COMPANIES.contains(&trimmed) {
            CompanySelection::Known(trimmed.to_string())
        } else {
            CompanySelection::Custom(trimmed.to_string())
        }
    }

    /// The company name to resolve. A blank custom entry falls back to
    /// [`DEFAULT_COMPANY`].
    pub fn company_name(&self) -> &str {
        match self {
            CompanySelection::Known(name) => name,
            CompanySelection::Custom(name) if name.trim().is_empty() => DEFAULT_COMPANY,
            CompanySelection::Custom(name) => name.trim(),
        }
    }
}

impl Default for CompanySelection {
    fn default() -> Self {
        CompanySelection::Known(DEFAULT_COMPANY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_end_with_custom() {
        let options = CompanySelection::options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], "CrewAI");
        assert_eq!(options[5], "Custom");
    }

    #[test]
    fn test_from_input() {
        assert_eq!(
            CompanySelection::from_input("Google"),
            CompanySelection::Known("Google".to_string())
        );
        assert_eq!(
            CompanySelection::from_input(" TechCorp Inc. "),
            CompanySelection::Custom("TechCorp Inc.".to_string())
        );
    }

    #[test]
    fn test_blank_custom_falls_back_to_default() {
        assert_eq!(CompanySelection::Custom("  ".into()).company_name(), "CrewAI");
        assert_eq!(CompanySelection::default().company_name(), "CrewAI");
        assert_eq!(
            CompanySelection::Custom("Acme".into()).company_name(),
            "Acme"
        );
    }
}
