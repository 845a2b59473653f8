//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(crosswalk::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(crosswalk::config))]
    Config(String),

    /// Schema or mapping input error
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] crosswalk_schema::SchemaError),

    /// Reconciliation or workflow error
    #[error(transparent)]
    #[diagnostic(transparent)]
    Migration(#[from] crosswalk_migrate::MigrationError),

    /// The pipeline halted without a successful script
    #[error("{0}")]
    #[diagnostic(code(crosswalk::pipeline_failed))]
    PipelineFailed(String),
}
