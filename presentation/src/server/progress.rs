//! Progress for server-side runs: stages go to the log

use crate::progress::reporter::task_line;
use crew_application::ports::progress::ProgressNotifier;
use crew_domain::ProgressStage;
use tracing::{info, warn};

pub struct LogProgress {
    pub customer: String,
}

impl ProgressNotifier for LogProgress {
    fn on_stage(&self, stage: ProgressStage) {
        info!(customer = %self.customer, percent = stage.percent(), "{}", stage.label());
    }

    fn on_error(&self, message: &str) {
        warn!(customer = %self.customer, percent = 0, "{}", message);
    }

    fn on_task_start(&self, task_name: &str, agent_role: &str, index: usize, total: usize) {
        info!(customer = %self.customer, "{}", task_line(task_name, agent_role, index, total));
    }

    fn on_tool_call(&self, tool_name: &str, args_preview: &str) {
        info!(customer = %self.customer, tool = tool_name, "{}", args_preview);
    }
}
