//! Schema document records.
//!
//! A schema document describes one side of a migration: the full set of
//! tables in either the source or the target database, as exported by
//! whatever tool dumped the schema. Documents are immutable once parsed.

use serde::{Deserialize, Serialize};

/// A single column in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name. Identity within a table.
    pub name: String,
    /// Declared type identifier, compared verbatim (case-sensitive).
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
}

impl SchemaField {
    /// Create a new nullable, non-key field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: true,
            primary_key: false,
        }
    }

    /// Mark the field as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark the field as a primary key column.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Render as `name:type` for digests and log lines.
    pub fn signature(&self) -> String {
        format!("{}:{}", self.name, self.ty)
    }
}

/// One table: a name and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name. Matched exactly against mapping qualifiers.
    pub table_name: String,
    /// Columns in declaration order.
    pub fields: Vec<SchemaField>,
}

impl TableSchema {
    /// Create a new table schema.
    pub fn new(table_name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            table_name: table_name.into(),
            fields,
        }
    }

    /// Look up a field by name.
    ///
    /// If the document declares the same field name twice the last
    /// occurrence wins, matching the lookup maps built during
    /// reconciliation. Duplicate names are a documented limitation of
    /// the input format, not a supported feature.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    /// Check whether a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Names of the primary key columns, in declaration order.
    pub fn primary_key_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.primary_key)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Render the field list as `name:type, name:type, ...`.
    pub fn field_digest(&self) -> String {
        self.fields
            .iter()
            .map(SchemaField::signature)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A parsed multi-table schema document: one side of a migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Every table the dump declared.
    pub tables: Vec<TableSchema>,
}

impl SchemaDocument {
    /// Create a document from a list of tables.
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }

    /// Resolve a table by exact name match.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.table_name == name)
    }

    /// Number of tables in the document.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the document declares no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
