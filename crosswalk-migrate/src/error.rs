//! Error types for the reconciliation engine and migration workflow.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for migration operations.
pub type MigrateResult<T> = Result<T, MigrationError>;

/// Errors that can occur while reconciling schemas or driving the
/// migration workflow.
///
/// A composer failure is a hard failure of the run. It is deliberately
/// distinct from the workflow reaching its `Failed` state, which is a
/// normal terminal outcome reported as a value, not an error.
#[derive(Debug, Error, Diagnostic)]
pub enum MigrationError {
    /// The composer boundary failed (timeout, malformed response,
    /// authentication failure). Aborts the in-progress run.
    #[error("composer failed during {operation}: {message}")]
    #[diagnostic(code(crosswalk::migrate::compose_failed))]
    Compose {
        /// Which composer operation failed.
        operation: &'static str,
        /// Transport- or implementation-level detail.
        message: String,
    },

    /// The workflow was started with an empty context sequence.
    #[error("reconciliation produced no migration contexts")]
    #[diagnostic(code(crosswalk::migrate::empty_reconciliation))]
    EmptyReconciliation,

    /// File system error while writing artifacts.
    #[error("I/O error: {0}")]
    #[diagnostic(code(crosswalk::migrate::io))]
    Io(#[from] std::io::Error),

    /// Schema or mapping input error.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] crosswalk_schema::SchemaError),
}

impl MigrationError {
    /// Create a composer failure for a named operation.
    pub fn compose(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Compose {
            operation,
            message: message.into(),
        }
    }

    /// Whether this error came from the composer boundary.
    pub fn is_compose_failure(&self) -> bool {
        matches!(self, Self::Compose { .. })
    }
}
