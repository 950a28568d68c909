//! Progress notification port
//!
//! Reports the fixed pipeline stages plus the finer-grained crew activity
//! underneath stage 80.

use crew_domain::ProgressStage;

/// Callback for progress updates during an inquiry run
///
/// Implementations live in the presentation layer (progress bar, plain
/// lines, HTTP logs).
pub trait ProgressNotifier: Send + Sync {
    /// A pipeline stage was reached
    fn on_stage(&self, stage: ProgressStage);

    /// The run failed; the indicator goes back to 0
    fn on_error(&self, message: &str);

    /// A task began; `index` is its 1-based position among `total` tasks
    fn on_task_start(&self, _task_name: &str, _agent_role: &str, _index: usize, _total: usize) {}

    /// Same 1-based `index` as [`on_task_start`](Self::on_task_start)
    fn on_task_complete(&self, _task_name: &str, _index: usize, _total: usize) {}

    fn on_tool_call(&self, _tool_name: &str, _args_preview: &str) {}

    fn on_tool_result(&self, _tool_name: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage(&self, _stage: ProgressStage) {}
    fn on_error(&self, _message: &str) {}
}
