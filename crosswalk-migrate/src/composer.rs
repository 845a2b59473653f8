//! The composer boundary: the text-generation service the pipeline
//! drives.
//!
//! Everything that turns structured schema data into SQL, validation
//! reports, or prose lives behind this trait. The pipeline never
//! retries, caches, or rate-limits these calls; a failure aborts the
//! run. Production services (LLM-backed or rule-backed) and test stubs
//! are interchangeable values.

use crosswalk_schema::{FieldMapping, TableSchema};

use crate::context::MigrationContext;
use crate::error::MigrateResult;
use crate::report::ValidationReport;

/// The text-generation capability the reconciler and workflow consume.
#[async_trait::async_trait]
pub trait MigrationComposer: Send + Sync {
    /// Produce a free-text compatibility analysis for one table pair.
    async fn analyze(
        &self,
        source: &TableSchema,
        target: &TableSchema,
        mappings: &[FieldMapping],
    ) -> MigrateResult<String>;

    /// Generate one combined SQL script covering all contexts.
    async fn generate(&self, contexts: &[MigrationContext]) -> MigrateResult<String>;

    /// Regenerate the combined script after a failed validation.
    async fn regenerate(
        &self,
        contexts: &[MigrationContext],
        report: &ValidationReport,
    ) -> MigrateResult<String>;

    /// Validate a script against one representative context.
    async fn validate(
        &self,
        sql_script: &str,
        context: &MigrationContext,
    ) -> MigrateResult<ValidationReport>;

    /// Explain a script for audit documentation.
    async fn explain(
        &self,
        sql_script: &str,
        context: &MigrationContext,
    ) -> MigrateResult<String>;
}
