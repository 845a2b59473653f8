//! Field mapping records.
//!
//! A field mapping declares one field-level correspondence between a
//! source and a target table, optionally with a transformation
//! expression applied in flight.

use serde::{Deserialize, Serialize};

/// One declared field-level correspondence.
///
/// The table qualifiers are optional: single-table mapping files may
/// omit the `source_table`/`target_table` columns entirely, in which
/// case [`FieldMapping::qualify`] supplies them from context. Mappings
/// that stay unqualified are skipped by pair resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Field name in the source table.
    pub source_field: String,
    /// Field name in the target table.
    pub target_field: String,
    /// Transformation expression, empty for a straight copy.
    #[serde(default)]
    pub transformation: String,
    /// Source table qualifier.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_table: Option<String>,
    /// Target table qualifier.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub target_table: Option<String>,
}

/// CSV rows encode a missing qualifier as an empty string.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl FieldMapping {
    /// Create a fully qualified mapping.
    pub fn new(
        source_table: impl Into<String>,
        source_field: impl Into<String>,
        target_table: impl Into<String>,
        target_field: impl Into<String>,
    ) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            transformation: String::new(),
            source_table: Some(source_table.into()),
            target_table: Some(target_table.into()),
        }
    }

    /// Attach a transformation expression.
    pub fn with_transformation(mut self, transformation: impl Into<String>) -> Self {
        self.transformation = transformation.into();
        self
    }

    /// Fill in absent table qualifiers from context.
    ///
    /// Qualifiers already present are kept.
    pub fn qualify(mut self, source_table: &str, target_table: &str) -> Self {
        self.source_table
            .get_or_insert_with(|| source_table.to_string());
        self.target_table
            .get_or_insert_with(|| target_table.to_string());
        self
    }

    /// Whether both table qualifiers are present.
    pub fn is_qualified(&self) -> bool {
        self.source_table.is_some() && self.target_table.is_some()
    }

    /// Whether a transformation expression is declared.
    pub fn has_transformation(&self) -> bool {
        !self.transformation.is_empty()
    }

    /// Render as `source→target` for digests and log lines.
    pub fn arrow(&self) -> String {
        format!("{}→{}", self.source_field, self.target_field)
    }
}
