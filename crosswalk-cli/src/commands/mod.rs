//! CLI command implementations.

pub mod init;
pub mod reconcile;
pub mod run;

use std::path::Path;

use crosswalk_schema::{CrosswalkConfig, FieldMapping, SchemaDocument};

use crate::error::{CliError, CliResult};

/// Load the configuration, failing with a pointer at the missing file.
pub fn load_config(path: &Path) -> CliResult<CrosswalkConfig> {
    if !path.exists() {
        return Err(CliError::Config(format!(
            "Configuration file not found: {}. Run `crosswalk init` to create one.",
            path.display()
        )));
    }
    Ok(CrosswalkConfig::from_file(path)?)
}

/// Load both schema documents and the mapping table named by the config.
pub async fn load_inputs(
    config: &CrosswalkConfig,
) -> CliResult<(SchemaDocument, SchemaDocument, Vec<FieldMapping>)> {
    let source = crosswalk_schema::load_schema_document(&config.inputs.source_schema).await?;
    let target = crosswalk_schema::load_schema_document(&config.inputs.target_schema).await?;
    let mappings = crosswalk_schema::load_field_mappings(&config.inputs.field_mapping).await?;
    Ok((source, target, mappings))
}
