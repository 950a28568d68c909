//! Prompt templates for crew tasks.

mod crew;

pub use crew::CrewPromptTemplate;
