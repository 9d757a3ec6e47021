//! Diagnostics module for dataset checking
//!
//! Generic diagnostic system that reports problems in a loaded dataset.
//! The layout core never consults it; the page runs it once after loading
//! and shows an error panel instead of rendering when errors are found.

pub mod dataset;

pub use dataset::validate_dataset;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark pointing at one movement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    /// Offending movement id (empty if the movement has no id)
    pub movement_id: String,
    /// Position of the movement in the dataset
    pub index: usize,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "missing_field", "unknown_target")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        movement_id: impl Into<String>,
        index: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            movement_id: movement_id.into(),
            index,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Collection of diagnostic marks for an entire dataset
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticMark> {
        self.marks
            .iter()
            .filter(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.add(DiagnosticMark::new("a", 0, DiagnosticSeverity::Warning, "warn", "Warning"));
        assert!(!diags.has_errors());
        assert!(!diags.is_empty());

        diags.add(DiagnosticMark::new("b", 1, DiagnosticSeverity::Error, "err", "Error"));
        assert!(diags.has_errors());
        assert_eq!(diags.errors().count(), 1);
    }
}
