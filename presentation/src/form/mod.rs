//! Interactive inquiry form

mod fields;
mod inquiry_form;

pub use fields::{CompanyChoice, FormAnswers, parse_api_key, parse_company_choice};
pub use inquiry_form::InquiryForm;
