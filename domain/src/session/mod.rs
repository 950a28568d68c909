//! Structured model responses.
//!
//! [`response::LlmResponse`] is what a session returns for every turn of
//! the tool-use loop: text, tool requests, or both.

pub mod response;

pub use response::{ContentBlock, LlmResponse, StopReason};
