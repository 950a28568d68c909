//! Support tasks: what each agent has to produce.

mod descriptor;
mod factory;

pub use descriptor::TaskDescriptor;
pub use factory::{INQUIRY_RESOLUTION, QUALITY_ASSURANCE_REVIEW, SupportTasks, create_tasks};
