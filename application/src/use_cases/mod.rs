//! Use cases: the crew runner and the top-level inquiry flow.

pub mod process_inquiry;
pub mod run_crew;
mod tool_helpers;

#[cfg(test)]
pub(crate) mod testing;
