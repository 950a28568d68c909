//! Application-level configuration.
//!
//! - [`ExecutionParams`]: model and loop control for a crew run

pub mod execution_params;

pub use execution_params::ExecutionParams;
