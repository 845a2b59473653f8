//! # Crosswalk
//!
//! Schema crosswalk reconciliation and migration-script pipeline.
//!
//! Crosswalk takes a source schema dump, a target schema dump, and a
//! declared field-mapping table, classifies every mapping as valid,
//! missing-in-target, or datatype-mismatched, and then drives a
//! bounded-retry workflow that generates, validates, and explains a
//! SQL migration script through a pluggable composer boundary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crosswalk::migrate::{MigrationWorkflow, RuleComposer, SchemaReconciler};
//! use crosswalk::schema::{load_field_mappings, load_schema_document, CrosswalkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrosswalkConfig::from_file("crosswalk.toml")?;
//!
//!     let source = load_schema_document(&config.inputs.source_schema).await?;
//!     let target = load_schema_document(&config.inputs.target_schema).await?;
//!     let mappings = load_field_mappings(&config.inputs.field_mapping).await?;
//!
//!     let composer = RuleComposer::new(config.composer.clone());
//!     let contexts = SchemaReconciler::new(&composer)
//!         .reconcile(&source, &target, &mappings)
//!         .await?;
//!
//!     let outcome = MigrationWorkflow::new(&composer).run(contexts).await?;
//!     println!("{}", outcome.summary());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Schema documents, field mappings, loaders, and configuration.
pub mod schema {
    pub use crosswalk_schema::*;
}

/// Reconciliation engine, migration workflow, and composer boundary.
pub mod migrate {
    pub use crosswalk_migrate::*;
}

// Re-export key types at the crate root
pub use migrate::{
    MigrationComposer, MigrationContext, MigrationWorkflow, RuleComposer, SchemaReconciler,
    ValidationReport, WorkflowOutcome, WorkflowPhase,
};
pub use schema::{CrosswalkConfig, FieldMapping, SchemaDocument, SchemaError, TableSchema};
