//! Validation reports produced by the composer boundary.

use serde::{Deserialize, Serialize};

/// The structured result of one validation attempt.
///
/// A fresh report is produced on every attempt; reports are never merged
/// across attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the script has blocking errors.
    pub has_errors: bool,
    /// Non-blocking findings.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Blocking findings.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Mappings the validator confirmed, as `source → target` lines.
    #[serde(default)]
    pub valid_mappings: Vec<String>,
    /// Free-text validator commentary.
    #[serde(default)]
    pub validation_details: Option<String>,
}

impl ValidationReport {
    /// A clean report with no findings.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A report carrying blocking errors.
    pub fn with_errors(errors: Vec<String>) -> Self {
        Self {
            has_errors: true,
            errors,
            ..Self::default()
        }
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} warnings, {} errors",
            self.warnings.len(),
            self.errors.len()
        )
    }

    /// Render the report as the markdown artifact body.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Validation Report\n\n");

        for mapping in &self.valid_mappings {
            out.push_str(mapping);
            out.push('\n');
        }

        out.push_str("\n### Warnings\n");
        for warning in &self.warnings {
            out.push_str(warning);
            out.push('\n');
        }

        if !self.errors.is_empty() {
            out.push_str("\n### Errors\n");
            for error in &self.errors {
                out.push_str(error);
                out.push('\n');
            }
        }

        if let Some(details) = &self.validation_details {
            out.push_str("\n### Details\n");
            out.push_str(details);
            out.push('\n');
        }

        out
    }
}
