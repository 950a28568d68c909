//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: chat-completions models the crew runs on
//! - [`credential::ApiKey`]: the redacted API credential
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod string;
