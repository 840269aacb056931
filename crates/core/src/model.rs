use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A line/column span in a source file, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// A single rule violation, anchored at the offending statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Set by the analyzer when the source unit came from a file.
    pub path: Option<PathBuf>,
    pub range: Range,
    pub rule: &'static str,
    pub severity: Severity,
    pub themes: &'static [&'static str],
    pub description: &'static str,
    pub explanation: &'static str,
}
