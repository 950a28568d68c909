//! Crew: the ordered agents and tasks of one support run, and what the run
//! produced.

mod definition;
mod memory;
mod output;

pub use definition::{Crew, Process};
pub use memory::CrewMemory;
pub use output::{CrewOutput, TaskOutput};
