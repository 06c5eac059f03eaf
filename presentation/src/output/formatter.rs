//! Output formatter trait

use multiedit_domain::{DecompositionReport, OutputFormat};

/// Trait for formatting decomposition results
pub trait OutputFormatter {
    /// Format the numbered report
    fn format_report(&self, report: &DecompositionReport) -> String;

    /// Format the rendered operations, one per line
    fn format_list(&self, report: &DecompositionReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &DecompositionReport) -> String;

    /// Dispatch on an output format
    fn format(&self, report: &DecompositionReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Report => self.format_report(report),
            OutputFormat::List => self.format_list(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
