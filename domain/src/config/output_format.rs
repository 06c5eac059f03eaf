//! Output format value object

use serde::{Deserialize, Serialize};

/// How decomposition results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered report with header and footer (default)
    #[default]
    Report,
    /// One rendered operation per line
    List,
    /// JSON object per instruction
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_report() {
        assert_eq!(OutputFormat::default(), OutputFormat::Report);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::List).unwrap();
        assert_eq!(json, "\"list\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
