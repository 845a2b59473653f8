//! # crosswalk-migrate
//!
//! Reconciliation engine and migration workflow for Crosswalk.
//!
//! This crate provides functionality for:
//! - Grouping raw field mappings into per-table-pair migration contexts
//! - Three-way classification of mappings (valid, missing-in-target,
//!   datatype mismatch)
//! - A bounded-retry workflow that generates, validates, and explains a
//!   migration script through a pluggable composer boundary
//! - A deterministic rule-backed composer
//! - Artifact output for the script, report, and explanation
//!
//! ## Architecture
//!
//! The reconciler runs once over the schema documents and mapping list,
//! producing an ordered sequence of contexts. The workflow consumes that
//! sequence and drives an explicit state machine against the composer,
//! retrying regeneration at most three times.
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Schema Documents│────▶│  Reconciler  │────▶│   Contexts     │
//! │ + Field Mappings│     └──────────────┘     └────────────────┘
//! └─────────────────┘                                  │
//!                                                      ▼
//!                   ┌──────────┐   errors ┌────────────────────┐
//!                   │ Explain  │◀─────────│ Generate ⇄ Validate│
//!                   └──────────┘  (≤ 3×)  └────────────────────┘
//!                        │                            │
//!                        ▼                            ▼
//!                   ┌──────────┐              ┌──────────────┐
//!                   │  Passed  │              │    Failed    │
//!                   └──────────┘              └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use crosswalk_migrate::{MigrationWorkflow, RuleComposer, SchemaReconciler};
//!
//! let composer = RuleComposer::new(config.composer.clone());
//! let reconciler = SchemaReconciler::new(&composer);
//! let contexts = reconciler.reconcile(&source, &target, &mappings).await?;
//!
//! let workflow = MigrationWorkflow::new(&composer);
//! let outcome = workflow.run(contexts).await?;
//! println!("{}", outcome.summary());
//! ```

pub mod artifact;
pub mod composer;
pub mod context;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod rule;
pub mod workflow;

// Re-exports
pub use artifact::{ArtifactWriter, WrittenArtifacts};
pub use composer::MigrationComposer;
pub use context::{MigrationContext, TypeMismatch, ValidatedMapping};
pub use error::{MigrateResult, MigrationError};
pub use reconcile::SchemaReconciler;
pub use report::ValidationReport;
pub use rule::RuleComposer;
pub use workflow::{
    MAX_REGENERATIONS, MigrationWorkflow, WorkflowOutcome, WorkflowPhase, WorkflowState,
};
