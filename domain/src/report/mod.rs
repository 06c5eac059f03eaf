//! The human-readable decomposition report.

use crate::operation::OperationList;
use serde::Serialize;

/// First line of a non-empty report.
pub const REPORT_HEADER: &str = "【复合指令分解结果】";

/// Last line of a non-empty report.
pub const REPORT_FOOTER: &str = "【请严格按以上顺序依次执行每一步操作】";

/// Report text plus the operations it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecompositionReport {
    pub instruction: String,
    pub text: String,
    pub operations: OperationList,
}

impl DecompositionReport {
    /// Render the report for `operations`.
    ///
    /// With no operations the text is the instruction unchanged: there was
    /// nothing to decompose.
    pub fn build(instruction: &str, operations: OperationList) -> Self {
        let text = if operations.is_empty() {
            instruction.to_string()
        } else {
            let mut text = String::from(REPORT_HEADER);
            text.push('\n');
            for (i, op) in operations.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", i + 1, op));
            }
            text.push_str(REPORT_FOOTER);
            text
        };

        Self {
            instruction: instruction.to_string(),
            text,
            operations,
        }
    }

    /// Whether anything was decomposed.
    pub fn is_decomposed(&self) -> bool {
        !self.operations.is_empty()
    }

    /// `(report text, rendered operations)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        let rendered = self.operations.rendered();
        (self.text, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    #[test]
    fn test_empty_returns_instruction() {
        let report = DecompositionReport::build("hello there", OperationList::new());
        assert!(!report.is_decomposed());
        assert_eq!(
            report.into_parts(),
            ("hello there".to_string(), Vec::<String>::new())
        );
    }

    #[test]
    fn test_numbered_lines() {
        let operations = OperationList::assemble(vec![
            Operation::new("红球", "蓝"),
            Operation::new("黄色大立方体", "绿色"),
            Operation::new("金属小球", "紫色"),
        ]);
        let report = DecompositionReport::build("ignored", operations);
        assert_eq!(
            report.text,
            "【复合指令分解结果】\n\
             1. 红球 → 蓝\n\
             2. 黄色大立方体 → 绿色\n\
             3. 金属小球 → 紫色\n\
             【请严格按以上顺序依次执行每一步操作】"
        );

        let numbered: Vec<_> = report
            .text
            .lines()
            .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbered.len(), 3);
        assert!(report.text.ends_with(REPORT_FOOTER));
    }

    #[test]
    fn test_into_parts_rendered() {
        let operations = OperationList::assemble(vec![Operation::new("ball", "red")]);
        let (_, rendered) = DecompositionReport::build("x", operations).into_parts();
        assert_eq!(rendered, vec!["ball → red"]);
    }
}
