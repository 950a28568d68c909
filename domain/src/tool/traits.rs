//! Tool call validation
//!
//! Pure checks run before a call reaches the network. A rejected call is
//! reported back to the model as `INVALID_ARGUMENT` so it can retry with
//! corrected arguments.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls against their definitions
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Checks required parameters are present and non-blank, and that no
/// undeclared parameter is passed
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for name in definition.required_parameters() {
            let present = match call.arguments.get(name) {
                Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
                Some(serde_json::Value::Null) | None => false,
                Some(_) => true,
            };
            if !present {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    name, definition.name
                ));
            }
        }

        if let Some(unknown) = call
            .arguments
            .keys()
            .find(|arg| !definition.parameters.iter().any(|p| &p.name == *arg))
        {
            return Err(format!(
                "Unknown parameter '{}' for tool '{}'",
                unknown, definition.name
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn scrape_definition() -> ToolDefinition {
        ToolDefinition::new("scrape_website", "Read a page")
            .with_parameter(ToolParameter::new("website_url", "Page URL", true))
            .with_parameter(ToolParameter::new("max_length", "Limit", false))
    }

    #[test]
    fn test_missing_required_parameter() {
        let call = ToolCall::new("scrape_website");
        let err = DefaultToolValidator
            .validate(&call, &scrape_definition())
            .unwrap_err();
        assert!(err.contains("Missing required parameter 'website_url'"));
    }

    #[test]
    fn test_blank_or_null_required_parameter() {
        let blank = ToolCall::new("scrape_website").with_arg("website_url", " ");
        assert!(DefaultToolValidator.validate(&blank, &scrape_definition()).is_err());

        let null = ToolCall::new("scrape_website").with_arg("website_url", serde_json::Value::Null);
        assert!(DefaultToolValidator.validate(&null, &scrape_definition()).is_err());
    }

    #[test]
    fn test_unknown_parameter() {
        let call = ToolCall::new("scrape_website")
            .with_arg("website_url", "https://example.com")
            .with_arg("selector", "main");
        let err = DefaultToolValidator
            .validate(&call, &scrape_definition())
            .unwrap_err();
        assert!(err.contains("Unknown parameter 'selector'"));
    }

    #[test]
    fn test_valid_call() {
        let call = ToolCall::new("scrape_website")
            .with_arg("website_url", "https://example.com")
            .with_arg("max_length", 1000);
        assert!(DefaultToolValidator.validate(&call, &scrape_definition()).is_ok());
    }
}
