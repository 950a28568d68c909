//! Tool adapters: web tool implementations, the per-task executor, and the
//! function-schema converter.

pub mod executor;
pub mod schema;
pub mod web;

pub use executor::{CrewToolExecutor, CrewToolFactory};
pub use schema::JsonSchemaToolConverter;
pub use web::WebToolSettings;
