//! Console output formatter for decomposition results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use multiedit_domain::DecompositionReport;
use multiedit_domain::report::{REPORT_FOOTER, REPORT_HEADER};

/// Formats decomposition results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the report, highlighting the header, step numbers and footer.
    ///
    /// An undecomposed instruction is printed back as-is.
    pub fn format_report(report: &DecompositionReport) -> String {
        if !report.is_decomposed() {
            return format!("{}\n", report.text);
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", REPORT_HEADER.cyan().bold()));
        for (i, op) in report.operations.iter().enumerate() {
            output.push_str(&format!(
                "{} {} {} {}\n",
                format!("{}.", i + 1).yellow().bold(),
                op.source(),
                "→".dimmed(),
                op.target().green()
            ));
        }
        output.push_str(&format!("{}\n", REPORT_FOOTER.cyan().bold()));
        output
    }

    /// Format the rendered operations, one per line
    pub fn format_list(report: &DecompositionReport) -> String {
        report
            .operations
            .rendered()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Format as JSON
    pub fn format_json(report: &DecompositionReport) -> String {
        let mut json = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &DecompositionReport) -> String {
        Self::format_report(report)
    }

    fn format_list(&self, report: &DecompositionReport) -> String {
        Self::format_list(report)
    }

    fn format_json(&self, report: &DecompositionReport) -> String {
        Self::format_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiedit_domain::{Operation, OperationList, OutputFormat};

    fn report() -> DecompositionReport {
        let ops = OperationList::assemble([
            Operation::new("红球", "蓝"),
            Operation::new("黄色大立方体", "绿色"),
        ]);
        DecompositionReport::build("把红球变成蓝的，然后黄色大立方体改成绿色", ops)
    }

    #[test]
    fn test_format_report_plain_matches_report_text() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_report(&report());
        assert_eq!(output, format!("{}\n", report().text));
    }

    #[test]
    fn test_format_report_undecomposed() {
        let report = DecompositionReport::build("hello there", OperationList::default());
        assert_eq!(ConsoleFormatter::format_report(&report), "hello there\n");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(
            ConsoleFormatter::format_list(&report()),
            "红球 → 蓝\n黄色大立方体 → 绿色\n"
        );
        let empty = DecompositionReport::build("hello", OperationList::default());
        assert_eq!(ConsoleFormatter::format_list(&empty), "");
    }

    #[test]
    fn test_format_json() {
        let output = ConsoleFormatter::format_json(&report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["instruction"], "把红球变成蓝的，然后黄色大立方体改成绿色");
        assert_eq!(value["operations"][0]["source"], "红球");
        assert_eq!(value["operations"][1]["target"], "绿色");
    }

    #[test]
    fn test_trait_dispatch() {
        let formatter = ConsoleFormatter;
        assert_eq!(
            formatter.format(&report(), OutputFormat::List),
            ConsoleFormatter::format_list(&report())
        );
    }
}
