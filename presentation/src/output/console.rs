//! Console output formatter for inquiry reports

use super::formatter::OutputFormatter;
use super::status::{QUICK_STATS, SystemStatus};
use colored::Colorize;
use crew_application::InquiryReport;

/// Formats inquiry reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off process-wide (`[output].color = false`)
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Response, metadata row, and what each task produced
    pub fn format_full(report: &InquiryReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Multi-Agent Customer Support"));
        output.push('\n');

        output.push_str(&Self::section_header("Response"));
        output.push('\n');
        output.push_str(report.result.trim());
        output.push('\n');

        output.push_str(&format!("\n{}\n", "-".repeat(60)));
        output.push_str(&format!(
            "{} {}   {} {}   {} {}\n",
            "Customer:".cyan().bold(),
            report.customer,
            "Contact:".cyan().bold(),
            report.person,
            "Company:".cyan().bold(),
            report.company
        ));

        if report.tasks_output.len() > 1 {
            output.push_str(&Self::section_header("Crew Activity"));
            for task in &report.tasks_output {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ({}) ──", task.task_name, task.agent_role)
                        .yellow()
                        .bold(),
                    Self::indent(task.raw.trim(), "  ")
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Completed:".dimmed(),
            report.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_result_only(report: &InquiryReport) -> String {
        format!("{}\n", report.result.trim())
    }

    pub fn format_json(report: &InquiryReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_status(status: &SystemStatus) -> String {
        let mut output = format!("{}\n", "System Status".cyan().bold());
        for (label, value) in status.rows() {
            output.push_str(&format!("  {:<8} {}\n", format!("{}:", label).bold(), value));
        }
        output.push_str(&format!("  {:<8} {}\n", "Model:".bold(), status.model));
        output
    }

    pub fn format_quick_stats() -> String {
        let mut output = format!("{}\n", "Quick Stats".cyan().bold());
        for (label, value) in QUICK_STATS {
            output.push_str(&format!("  - {}: {}\n", label.bold(), value));
        }
        output
    }

    /// Line shown when the run fails after it started
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error processing inquiry:".red().bold(), message)
    }

    /// Line shown when a required field is blank
    pub fn format_refusal() -> String {
        format!("{}", "Please fill in all fields before processing.".yellow())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, report: &InquiryReport) -> String {
        Self::format_full(report)
    }

    fn format_result_only(&self, report: &InquiryReport) -> String {
        Self::format_result_only(report)
    }

    fn format_json(&self, report: &InquiryReport) -> String {
        Self::format_json(report)
    }
}
