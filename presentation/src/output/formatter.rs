//! Output formatter trait

use crew_application::InquiryReport;
use crew_domain::OutputFormat;

/// Trait for rendering inquiry reports
pub trait OutputFormatter {
    /// Response with the customer, contact and company row
    fn format_full(&self, report: &InquiryReport) -> String;

    /// Only the final response
    fn format_result_only(&self, report: &InquiryReport) -> String;

    fn format_json(&self, report: &InquiryReport) -> String;

    fn render(&self, report: &InquiryReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(report),
            OutputFormat::Result => self.format_result_only(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
