//! # crosswalk-schema
//!
//! Schema documents, field mappings, and configuration for Crosswalk.
//!
//! This crate provides:
//! - Record types for multi-table schema documents (`SchemaDocument`,
//!   `TableSchema`, `SchemaField`)
//! - Field mapping records parsed from crosswalk tables (`FieldMapping`)
//! - JSON and CSV loaders for the above
//! - Configuration parsing for `crosswalk.toml` files
//!
//! ## Example
//!
//! ```rust,ignore
//! use crosswalk_schema::{CrosswalkConfig, load_field_mappings, load_schema_document};
//!
//! let config = CrosswalkConfig::from_file("crosswalk.toml")?;
//! let source = load_schema_document(&config.inputs.source_schema).await?;
//! let target = load_schema_document(&config.inputs.target_schema).await?;
//! let mappings = load_field_mappings(&config.inputs.field_mapping).await?;
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod mapping;

pub use config::{ComposerConfig, CrosswalkConfig, InputConfig, OutputConfig, SqlDialect};
pub use document::{SchemaDocument, SchemaField, TableSchema};
pub use error::{SchemaError, SchemaResult};
pub use loader::{load_field_mappings, load_schema_document};
pub use mapping::FieldMapping;
