//! Loaders for schema documents and field mapping tables.
//!
//! Schema documents arrive as JSON dumps; field mappings arrive as a
//! CSV table with columns `source_field, target_field, transformation,
//! source_table, target_table`.

use std::path::Path;

use crate::document::SchemaDocument;
use crate::error::{SchemaError, SchemaResult};
use crate::mapping::FieldMapping;

/// Load a multi-table schema document from a JSON file.
pub async fn load_schema_document(path: impl AsRef<Path>) -> SchemaResult<SchemaDocument> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

    let document: SchemaDocument = serde_json::from_str(&content)
        .map_err(|e| SchemaError::json(path.display().to_string(), e))?;

    tracing::debug!(
        path = %path.display(),
        tables = document.len(),
        "loaded schema document"
    );

    Ok(document)
}

/// Load field mappings from a CSV file.
///
/// Row order is preserved; the reconciler depends on it for stable
/// grouping. Rows with empty table columns come back unqualified.
pub async fn load_field_mappings(path: impl AsRef<Path>) -> SchemaResult<Vec<FieldMapping>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

    parse_field_mappings(&content).map_err(|e| SchemaError::csv(path.display().to_string(), e))
}

/// Parse field mappings from CSV content.
pub fn parse_field_mappings(content: &str) -> Result<Vec<FieldMapping>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut mappings = Vec::new();
    for row in reader.deserialize() {
        let mapping: FieldMapping = row?;
        mappings.push(mapping);
    }

    tracing::debug!(mappings = mappings.len(), "parsed field mapping table");
    Ok(mappings)
}
