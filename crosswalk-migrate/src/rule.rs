//! Deterministic rule-backed composer.
//!
//! Turns classified contexts into `INSERT INTO ... SELECT` scripts,
//! structural validation reports, and audit prose without any network
//! dependency. Useful as the default production composer and as a
//! reference implementation of the boundary contract.

use crosswalk_schema::{ComposerConfig, FieldMapping, SqlDialect, TableSchema};

use crate::composer::MigrationComposer;
use crate::context::MigrationContext;
use crate::error::MigrateResult;
use crate::report::ValidationReport;

/// Rule-backed implementation of [`MigrationComposer`].
#[derive(Debug, Clone, Default)]
pub struct RuleComposer {
    config: ComposerConfig,
}

impl RuleComposer {
    /// Create a composer from explicit configuration.
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Quote an identifier for the configured dialect.
    fn quote(&self, ident: &str) -> String {
        match self.config.dialect {
            SqlDialect::Postgres => format!("\"{}\"", ident),
            SqlDialect::MySql => format!("`{}`", ident),
        }
    }

    /// The select expression for one mapping.
    ///
    /// A declared transformation always wins; a bare datatype mismatch
    /// gets an explicit CAST when the configuration asks for one.
    fn select_expr(&self, context: &MigrationContext, mapping: &FieldMapping) -> String {
        if mapping.has_transformation() {
            return mapping.transformation.clone();
        }

        let mismatch = context
            .datatype_mismatches
            .iter()
            .find(|m| m.source == mapping.source_field && m.target == mapping.target_field);

        match mismatch {
            Some(m) if self.config.cast_on_mismatch => {
                format!("CAST({} AS {})", self.quote(&m.source), m.target_type)
            }
            _ => self.quote(&mapping.source_field),
        }
    }

    /// One `INSERT INTO ... SELECT` statement per context.
    fn statement(&self, context: &MigrationContext) -> String {
        let mut columns = Vec::new();
        let mut exprs = Vec::new();
        let mut skipped = Vec::new();

        for mapping in &context.mappings {
            if context.missing_in_target.contains(&mapping.target_field) {
                skipped.push(mapping.target_field.clone());
                continue;
            }
            columns.push(self.quote(&mapping.target_field));
            exprs.push(self.select_expr(context, mapping));
        }

        let mut out = format!("-- {}\n", context.pair_label());
        for field in skipped {
            out.push_str(&format!(
                "-- skipped: column {} not present in {}\n",
                self.quote(&field),
                self.quote(&context.target_schema.table_name)
            ));
        }

        if columns.is_empty() {
            out.push_str("-- no transferable columns\n");
            return out;
        }

        out.push_str(&format!(
            "INSERT INTO {} ({})\nSELECT {}\nFROM {};\n",
            self.quote(&context.target_schema.table_name),
            columns.join(", "),
            exprs.join(", "),
            self.quote(&context.source_schema.table_name)
        ));
        out
    }

    /// The combined script for all contexts, in order.
    fn script(&self, contexts: &[MigrationContext]) -> String {
        let statements: Vec<String> = contexts.iter().map(|c| self.statement(c)).collect();
        format!(
            "-- Migration script ({} dialect)\n\n{}",
            self.config.dialect,
            statements.join("\n")
        )
    }
}

#[async_trait::async_trait]
impl MigrationComposer for RuleComposer {
    async fn analyze(
        &self,
        source: &TableSchema,
        target: &TableSchema,
        mappings: &[FieldMapping],
    ) -> MigrateResult<String> {
        let arrows: Vec<String> = mappings.iter().map(FieldMapping::arrow).collect();
        let compatible = mappings
            .iter()
            .filter(|m| {
                match (source.field(&m.source_field), target.field(&m.target_field)) {
                    (Some(s), Some(t)) => s.ty == t.ty,
                    _ => false,
                }
            })
            .count();

        Ok(format!(
            "Compatibility analysis for {} → {}.\n\
             Source fields: {}.\n\
             Target fields: {}.\n\
             Declared mappings: {}.\n\
             {} of {} mappings share a declared type on both sides.",
            source.table_name,
            target.table_name,
            source.field_digest(),
            target.field_digest(),
            arrows.join(", "),
            compatible,
            mappings.len()
        ))
    }

    async fn generate(&self, contexts: &[MigrationContext]) -> MigrateResult<String> {
        Ok(self.script(contexts))
    }

    async fn regenerate(
        &self,
        contexts: &[MigrationContext],
        report: &ValidationReport,
    ) -> MigrateResult<String> {
        let mut header = String::from("-- Regenerated after validation findings:\n");
        for error in &report.errors {
            header.push_str(&format!("--   error: {}\n", error));
        }
        for warning in &report.warnings {
            header.push_str(&format!("--   warning: {}\n", warning));
        }
        header.push('\n');

        Ok(format!("{}{}", header, self.script(contexts)))
    }

    async fn validate(
        &self,
        sql_script: &str,
        context: &MigrationContext,
    ) -> MigrateResult<ValidationReport> {
        let mut report = ValidationReport::clean();

        if sql_script.trim().is_empty() {
            report.errors.push("script is empty".to_string());
        } else if !sql_script.contains(&context.target_schema.table_name) {
            report.errors.push(format!(
                "script does not reference target table {}",
                context.target_schema.table_name
            ));
        }

        for mapping in &context.validated_mappings {
            if sql_script.contains(&mapping.target) {
                report
                    .valid_mappings
                    .push(format!("{} → {}", mapping.source, mapping.target));
            } else {
                report.errors.push(format!(
                    "mapped column {} missing from script",
                    mapping.target
                ));
            }
        }

        for mismatch in &context.datatype_mismatches {
            let transformed = context
                .mappings
                .iter()
                .any(|m| m.source_field == mismatch.source && m.has_transformation());

            if transformed || sql_script.contains("CAST(") {
                report.warnings.push(format!(
                    "datatype conversion required: {}",
                    mismatch.describe()
                ));
            } else {
                report.errors.push(format!(
                    "unreconciled datatype mismatch: {}",
                    mismatch.describe()
                ));
            }
        }

        for field in &context.missing_in_target {
            report.warnings.push(format!(
                "target field {} does not exist; mapping dropped",
                field
            ));
        }

        report.has_errors = !report.errors.is_empty();
        report.validation_details = Some(format!(
            "structural validation of {}: {}",
            context.pair_label(),
            report.summary()
        ));

        Ok(report)
    }

    async fn explain(
        &self,
        sql_script: &str,
        context: &MigrationContext,
    ) -> MigrateResult<String> {
        let mut out = format!(
            "Migration of `{}` into `{}`.\n\n",
            context.source_schema.table_name, context.target_schema.table_name
        );

        out.push_str(&format!(
            "The script transfers {} mapped column(s) with an `INSERT INTO ... SELECT` statement.\n\n",
            context.validated_mappings.len() + context.datatype_mismatches.len()
        ));

        for mapping in &context.validated_mappings {
            out.push_str(&format!(
                "- `{}` copies directly into `{}`.\n",
                mapping.source, mapping.target
            ));
        }
        for mismatch in &context.datatype_mismatches {
            out.push_str(&format!(
                "- `{}` ({}) converts into `{}` ({}).\n",
                mismatch.source, mismatch.source_type, mismatch.target, mismatch.target_type
            ));
        }
        for field in &context.missing_in_target {
            out.push_str(&format!(
                "- `{}` has no counterpart in the target table and is not transferred.\n",
                field
            ));
        }

        out.push_str(&format!(
            "\nStatements executed: {}.\n",
            sql_script.matches("INSERT INTO").count()
        ));

        Ok(out)
    }
}
