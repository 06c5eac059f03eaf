//! The atomic recoloring edit.

use crate::vocabulary::builtin::SOURCE_MARKERS;
use serde::Serialize;
use std::fmt;

/// Separator between source and target in the rendered form.
pub const SEPARATOR: &str = " → ";

/// One `(source description, target color)` edit directive.
///
/// Rendered as `"<source> → <target>"`. Two operations are the same edit
/// exactly when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    source: String,
    target: String,
}

impl Operation {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Rendered `"source → target"` form.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Drop one leading object marker (`把` / `将`) left on the source by a
    /// template without its own marker.
    ///
    /// Returns `None` if nothing remains of the source.
    pub fn without_marker(self) -> Option<Self> {
        let source = match self.source.strip_prefix(SOURCE_MARKERS) {
            Some(rest) => rest.trim().to_string(),
            None => self.source,
        };
        if source.is_empty() {
            return None;
        }
        Some(Self {
            source,
            target: self.target,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, SEPARATOR, self.target)
    }
}
