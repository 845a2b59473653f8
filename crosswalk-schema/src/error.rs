//! Error types for schema loading and configuration.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while loading schema documents, mapping tables,
/// or configuration files.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    /// Error reading a file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(crosswalk::schema::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in a schema document.
    #[error("invalid schema document: {path}")]
    #[diagnostic(code(crosswalk::schema::json_error))]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed row in a field mapping table.
    #[error("invalid field mapping table: {path}")]
    #[diagnostic(code(crosswalk::schema::csv_error))]
    CsvError {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(crosswalk::schema::toml_error))]
    TomlError {
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(crosswalk::schema::config_error))]
    ConfigError { message: String },
}

impl SchemaError {
    /// Create an I/O error carrying the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON parse error carrying the offending path.
    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV parse error carrying the offending path.
    pub fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvError {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}
