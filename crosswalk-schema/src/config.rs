//! Configuration file parsing for `crosswalk.toml`.
//!
//! The configuration is an explicitly constructed value passed into
//! component constructors. Nothing here is cached process-wide.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SchemaError, SchemaResult};

/// Main configuration structure for `crosswalk.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CrosswalkConfig {
    /// Input file locations.
    #[serde(default)]
    pub inputs: InputConfig,

    /// Output artifact settings.
    #[serde(default)]
    pub outputs: OutputConfig,

    /// Composer settings.
    #[serde(default)]
    pub composer: ComposerConfig,
}

impl Default for CrosswalkConfig {
    fn default() -> Self {
        Self {
            inputs: InputConfig::default(),
            outputs: OutputConfig::default(),
            composer: ComposerConfig::default(),
        }
    }
}

impl CrosswalkConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> SchemaResult<Self> {
        // Expand ${ENV_VAR} references before parsing
        let expanded = expand_env_vars(content);

        toml::from_str(&expanded).map_err(|e| SchemaError::TomlError { source: e })
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> SchemaResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SchemaError::config(format!("failed to serialize TOML: {}", e)))
    }
}

/// Input file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct InputConfig {
    /// Source schema document (JSON).
    pub source_schema: PathBuf,
    /// Target schema document (JSON).
    pub target_schema: PathBuf,
    /// Field mapping table (CSV).
    pub field_mapping: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source_schema: PathBuf::from("data/source_schema.json"),
            target_schema: PathBuf::from("data/target_schema.json"),
            field_mapping: PathBuf::from("data/field_mapping.csv"),
        }
    }
}

/// Output artifact settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    /// Directory that receives the generated artifacts.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
        }
    }
}

/// Composer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ComposerConfig {
    /// SQL dialect for generated statements.
    pub dialect: SqlDialect,
    /// Emit an explicit CAST for datatype mismatches without a declared
    /// transformation.
    pub cast_on_mismatch: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::Postgres,
            cast_on_mismatch: true,
        }
    }
}

/// Supported SQL dialects for script generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// PostgreSQL.
    #[serde(alias = "postgresql")]
    Postgres,
    /// MySQL / MariaDB.
    MySql,
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlDialect::Postgres => write!(f, "postgres"),
            SqlDialect::MySql => write!(f, "mysql"),
        }
    }
}

/// Expand `${ENV_VAR}` references in the raw TOML content.
///
/// Unset variables are left as-is so the TOML error points at the
/// literal placeholder.
fn expand_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let full_match = &cap[0];

        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(full_match, &value);
        }
    }

    result
}
