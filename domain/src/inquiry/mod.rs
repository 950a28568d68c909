//! Inquiry inputs supplied by the end user for one request.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The three values substituted into agent and task templates at kickoff
///
/// Missing fields deserialize as empty so [`validate`](Self::validate) can
/// name them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryInputs {
    /// Customer (usually a company) making the inquiry
    pub customer: String,
    /// Contact person at the customer
    pub person: String,
    /// Free-text description of the issue or question
    pub inquiry: String,
}

impl InquiryInputs {
    pub fn new(
        customer: impl Into<String>,
        person: impl Into<String>,
        inquiry: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            person: person.into(),
            inquiry: inquiry.into(),
        }
    }

    /// Check that every field has non-whitespace content.
    ///
    /// Reports the first missing field in the order customer, person, inquiry.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(DomainError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Replace `{customer}`, `{person}` and `{inquiry}` in `template`.
    ///
    /// Any other `{...}` sequence is left untouched. Substitution is a single
    /// pass, so placeholder-like text inside a value is never expanded.
    pub fn interpolate(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let replacement = after.find('}').and_then(|close| {
                let key = &after[..close];
                self.fields()
                    .into_iter()
                    .find(|(field, _)| *field == key)
                    .map(|(_, value)| (value, close))
            });

            match replacement {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("customer", self.customer.as_str()),
            ("person", self.person.as_str()),
            ("inquiry", self.inquiry.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> InquiryInputs {
        InquiryInputs::new("DeepLearningAI", "Andrew Ng", "How do I add memory to my crew?")
    }

    #[test]
    fn test_validate_complete_inputs() {
        assert!(inputs().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let empty = InquiryInputs::default();
        assert_eq!(empty.validate(), Err(DomainError::MissingField("customer")));

        let mut missing_person = inputs();
        missing_person.person = "   ".to_string();
        assert_eq!(
            missing_person.validate(),
            Err(DomainError::MissingField("person"))
        );

        let mut missing_inquiry = inputs();
        missing_inquiry.inquiry = String::new();
        assert_eq!(
            missing_inquiry.validate(),
            Err(DomainError::MissingField("inquiry"))
        );
    }

    #[test]
    fn test_interpolate_all_placeholders() {
        let text = inputs().interpolate("{person} from {customer} asks: {inquiry} ({customer})");
        assert_eq!(
            text,
            "Andrew Ng from DeepLearningAI asks: How do I add memory to my crew? (DeepLearningAI)"
        );
    }

    #[test]
    fn test_interpolate_does_not_expand_values() {
        let tricky = InquiryInputs::new("{person}", "Ada", "hi");
        assert_eq!(tricky.interpolate("{customer}/{person}"), "{person}/Ada");
    }

    #[test]
    fn test_interpolate_leaves_unknown_braces() {
        let text = inputs().interpolate("{unknown} and {customer} and {}");
        assert_eq!(text, "{unknown} and DeepLearningAI and {}");
    }
}
