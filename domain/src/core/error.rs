//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Crew has no tasks")]
    NoTasks,

    #[error("Task '{task}' depends on '{dependency}', which does not run before it")]
    UnknownContext { task: String, dependency: String },

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl DomainError {
    /// Check if this error was caused by incomplete user input
    pub fn is_missing_input(&self) -> bool {
        matches!(self, DomainError::MissingField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = DomainError::MissingField("customer");
        assert_eq!(error.to_string(), "Missing required field: customer");
    }

    #[test]
    fn test_is_missing_input_check() {
        assert!(DomainError::MissingField("inquiry").is_missing_input());
        assert!(!DomainError::NoTasks.is_missing_input());
        assert!(!DomainError::InvalidModel("x".to_string()).is_missing_input());
    }

    #[test]
    fn test_unknown_context_display() {
        let error = DomainError::UnknownContext {
            task: "review".to_string(),
            dependency: "draft".to_string(),
        };
        assert!(error.to_string().contains("'review'"));
        assert!(error.to_string().contains("'draft'"));
    }
}
