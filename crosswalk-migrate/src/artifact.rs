//! Output artifact management.
//!
//! Persists the results of a workflow run: the SQL script, the
//! validation report, and (for passed runs) the audit explanation.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::MigrateResult;
use crate::workflow::WorkflowOutcome;

/// File name of the SQL script artifact.
pub const SQL_ARTIFACT: &str = "migration.sql";
/// File name of the validation report artifact.
pub const REPORT_ARTIFACT: &str = "validation_report.md";
/// File name of the explanation artifact.
pub const EXPLANATION_ARTIFACT: &str = "sql_explanation.md";

/// Paths of the artifacts one run produced.
#[derive(Debug, Clone)]
pub struct WrittenArtifacts {
    /// The SQL script.
    pub sql: PathBuf,
    /// The validation report.
    pub report: Option<PathBuf>,
    /// The explanation, absent for failed runs.
    pub explanation: Option<PathBuf>,
}

impl WrittenArtifacts {
    /// Every written path, for display.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.sql.as_path()];
        if let Some(report) = &self.report {
            paths.push(report.as_path());
        }
        if let Some(explanation) = &self.explanation {
            paths.push(explanation.as_path());
        }
        paths
    }
}

/// Writes workflow outputs into an artifacts directory.
pub struct ArtifactWriter {
    outputs_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer rooted at an outputs directory.
    pub fn new(outputs_dir: impl Into<PathBuf>) -> Self {
        Self {
            outputs_dir: outputs_dir.into(),
        }
    }

    /// The outputs directory.
    pub fn outputs_dir(&self) -> &Path {
        &self.outputs_dir
    }

    /// Ensure the outputs directory exists.
    pub async fn ensure_dir(&self) -> MigrateResult<()> {
        tokio::fs::create_dir_all(&self.outputs_dir).await?;
        Ok(())
    }

    /// Persist the outcome of a workflow run.
    ///
    /// The script and report are written for both terminal states so a
    /// failed run stays diagnosable; the explanation exists only when
    /// the run passed.
    pub async fn write_outcome(&self, outcome: &WorkflowOutcome) -> MigrateResult<WrittenArtifacts> {
        self.ensure_dir().await?;

        let sql_path = self.outputs_dir.join(SQL_ARTIFACT);
        let script = format!(
            "-- Generated by crosswalk on {}\n{}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            outcome.state.sql_script
        );
        tokio::fs::write(&sql_path, script).await?;

        let report_path = match &outcome.state.validation_report {
            Some(report) => {
                let path = self.outputs_dir.join(REPORT_ARTIFACT);
                tokio::fs::write(&path, report.to_markdown()).await?;
                Some(path)
            }
            None => None,
        };

        let explanation_path = if outcome.passed() {
            let path = self.outputs_dir.join(EXPLANATION_ARTIFACT);
            let body = format!("# SQL Explanation\n\n{}", outcome.state.explanation);
            tokio::fs::write(&path, body).await?;
            Some(path)
        } else {
            None
        };

        tracing::info!(
            dir = %self.outputs_dir.display(),
            explanation = explanation_path.is_some(),
            "wrote migration artifacts"
        );

        Ok(WrittenArtifacts {
            sql: sql_path,
            report: report_path,
            explanation: explanation_path,
        })
    }
}
