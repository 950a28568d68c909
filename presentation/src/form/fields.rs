//! Field parsing for the interactive form

use crew_application::InquiryRequest;
use crew_domain::{CUSTOM_OPTION, CompanySelection};

/// Result of the company selector prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyChoice {
    Selected(CompanySelection),
    /// `Custom` was picked; ask for the name next
    NeedsCustomName,
}

/// Interpret the selector answer.
///
/// Accepts an option number (1-based), an option name in any case, or a
/// company name typed directly. A blank answer keeps `default`.
pub fn parse_company_choice(input: &str, default: &str) -> CompanyChoice {
    let input = input.trim();
    if input.is_empty() {
        return CompanyChoice::Selected(CompanySelection::from_input(default));
    }

    let options = CompanySelection::options();
    let picked = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .or_else(|| options.iter().copied().find(|o| o.eq_ignore_ascii_case(input)));

    match picked {
        Some(CUSTOM_OPTION) => CompanyChoice::NeedsCustomName,
        Some(name) => CompanyChoice::Selected(CompanySelection::Known(name.to_string())),
        None => CompanyChoice::Selected(CompanySelection::Custom(input.to_string())),
    }
}

/// A typed API key, trimmed. `None` for a blank answer.
pub fn parse_api_key(input: &str) -> Option<String> {
    let key = input.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Everything the form collected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormAnswers {
    pub company: CompanySelection,
    pub customer: String,
    pub person: String,
    pub inquiry: String,
}

impl FormAnswers {
    pub fn into_request(self) -> InquiryRequest {
        InquiryRequest::new(
            self.customer,
            self.person,
            self.inquiry,
            self.company.company_name(),
        )
    }
}
