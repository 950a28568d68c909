//! Progress reporting for inquiry runs

use colored::Colorize;
use crew_application::ports::progress::ProgressNotifier;
use crew_domain::{ERROR_LABEL, ProgressStage};
use indicatif::{ProgressBar, ProgressStyle};

/// 0..100 progress bar with the current stage as its message.
///
/// Crew activity (task starts, tool calls) is printed above the bar when
/// `verbose` is set.
pub struct ProgressReporter {
    bar: ProgressBar,
    verbose: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(Self::bar_style());
        Self { bar, verbose: true }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Current position, 0..=100
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message().to_string()
    }

    fn note(&self, line: String) {
        if self.verbose {
            self.bar.println(line);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage(&self, stage: ProgressStage) {
        self.bar.set_position(stage.percent() as u64);
        if stage.is_final() {
            self.bar.finish_with_message(stage.label().green().to_string());
        } else {
            self.bar.set_message(stage.label());
        }
    }

    fn on_error(&self, _message: &str) {
        self.bar.set_position(0);
        self.bar.abandon_with_message(ERROR_LABEL.red().to_string());
    }

    fn on_task_start(&self, task_name: &str, agent_role: &str, index: usize, total: usize) {
        self.note(format!("{} {}", "->".cyan(), task_line(task_name, agent_role, index, total)));
    }

    fn on_task_complete(&self, task_name: &str, _index: usize, _total: usize) {
        self.note(format!("  {} {}", "v".green(), task_name));
    }

    fn on_tool_call(&self, tool_name: &str, args_preview: &str) {
        self.note(format!("  {} {} {}", "*".yellow(), tool_name, args_preview.dimmed()));
    }

    fn on_tool_result(&self, tool_name: &str, success: bool) {
        if !success {
            self.note(format!("  {} {} failed", "x".red(), tool_name));
        }
    }
}

/// "Task 1/2: name (role)". `index` is 1-based, as the crew runner reports it.
pub fn task_line(task_name: &str, agent_role: &str, index: usize, total: usize) -> String {
    format!("Task {}/{}: {} ({})", index, total, task_name, agent_role)
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage(&self, stage: ProgressStage) {
        println!("[{:>3}%] {}", stage.percent(), stage.label());
    }

    fn on_error(&self, _message: &str) {
        println!("[  0%] {}", ERROR_LABEL);
    }

    fn on_task_start(&self, task_name: &str, agent_role: &str, index: usize, total: usize) {
        println!("  {}", task_line(task_name, agent_role, index, total));
    }

    fn on_tool_call(&self, tool_name: &str, args_preview: &str) {
        println!("    tool {} {}", tool_name, args_preview);
    }
}
