//! Integration tests for the full migration workflow.
//!
//! These tests run reconciliation and the workflow end-to-end with the
//! rule-backed composer, plus a failing composer to pin down the
//! boundary failure semantics.

use crosswalk::migrate::{
    MAX_REGENERATIONS, MigrateResult, MigrationComposer, MigrationContext, MigrationError,
    MigrationWorkflow, RuleComposer, SchemaReconciler, ValidationReport, WorkflowPhase,
};
use crosswalk::schema::{
    ComposerConfig, FieldMapping, SchemaDocument, SchemaField, TableSchema,
};
use pretty_assertions::assert_eq;

fn documents() -> (SchemaDocument, SchemaDocument) {
    let source = SchemaDocument::new(vec![TableSchema::new(
        "Customers",
        vec![
            SchemaField::new("id", "int").primary_key(),
            SchemaField::new("name", "varchar"),
            SchemaField::new("balance", "float"),
        ],
    )]);
    let target = SchemaDocument::new(vec![TableSchema::new(
        "Clients",
        vec![
            SchemaField::new("id", "int").primary_key(),
            SchemaField::new("full_name", "varchar"),
            SchemaField::new("balance", "decimal"),
        ],
    )]);
    (source, target)
}

fn mappings() -> Vec<FieldMapping> {
    vec![
        FieldMapping::new("Customers", "id", "Clients", "id"),
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        FieldMapping::new("Customers", "balance", "Clients", "balance"),
    ]
}

#[tokio::test]
async fn test_pipeline_passes_with_default_composer() {
    let composer = RuleComposer::default();
    let (source, target) = documents();

    let contexts = SchemaReconciler::new(&composer)
        .reconcile(&source, &target, &mappings())
        .await
        .unwrap();
    let outcome = MigrationWorkflow::new(&composer)
        .run(contexts)
        .await
        .unwrap();

    assert!(outcome.passed());
    assert_eq!(outcome.state.phase, WorkflowPhase::Passed);
    assert_eq!(outcome.state.retry_count, 0);
    assert!(outcome.state.sql_script.contains("INSERT INTO \"Clients\""));
    assert!(outcome.state.sql_script.contains("CAST(\"balance\" AS decimal)"));
    assert!(!outcome.state.explanation.is_empty());

    let report = outcome.state.validation_report.as_ref().unwrap();
    assert!(!report.has_errors);
    assert!(report.valid_mappings.contains(&"id → id".to_string()));
}

/// With casting disabled the rule composer can never reconcile the
/// float → decimal mapping, so the workflow burns its full retry
/// budget and halts in `Failed` with the evidence still attached.
#[tokio::test]
async fn test_pipeline_exhausts_retries_when_mismatch_stays_unreconciled() {
    let config = ComposerConfig {
        cast_on_mismatch: false,
        ..ComposerConfig::default()
    };
    let composer = RuleComposer::new(config);
    let (source, target) = documents();

    let contexts = SchemaReconciler::new(&composer)
        .reconcile(&source, &target, &mappings())
        .await
        .unwrap();
    let outcome = MigrationWorkflow::new(&composer)
        .run(contexts)
        .await
        .unwrap();

    assert!(!outcome.passed());
    assert_eq!(outcome.state.phase, WorkflowPhase::Failed);
    assert_eq!(outcome.state.retry_count, MAX_REGENERATIONS);
    assert!(outcome.state.explanation.is_empty());

    // Last failing script and report stay retrievable for diagnosis
    assert!(outcome.state.sql_script.contains("INSERT INTO"));
    let report = outcome.state.validation_report.as_ref().unwrap();
    assert!(report.has_errors);
    assert!(report.errors[0].contains("unreconciled datatype mismatch"));
}

/// Composer that dies after a scripted number of successful calls.
struct FlakyComposer {
    fail_after: usize,
    calls: std::sync::Mutex<usize>,
}

impl FlakyComposer {
    fn new(fail_after: usize) -> Self {
        Self {
            fail_after,
            calls: std::sync::Mutex::new(0),
        }
    }

    fn tick(&self, operation: &'static str) -> MigrateResult<()> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.fail_after {
            Err(MigrationError::compose(operation, "simulated outage"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl MigrationComposer for FlakyComposer {
    async fn analyze(
        &self,
        _source: &TableSchema,
        _target: &TableSchema,
        _mappings: &[FieldMapping],
    ) -> MigrateResult<String> {
        self.tick("analyze")?;
        Ok("analysis".to_string())
    }

    async fn generate(&self, _contexts: &[MigrationContext]) -> MigrateResult<String> {
        self.tick("generate")?;
        Ok("INSERT INTO x SELECT 1;".to_string())
    }

    async fn regenerate(
        &self,
        _contexts: &[MigrationContext],
        _report: &ValidationReport,
    ) -> MigrateResult<String> {
        self.tick("regenerate")?;
        Ok("INSERT INTO x SELECT 1;".to_string())
    }

    async fn validate(
        &self,
        _sql_script: &str,
        _context: &MigrationContext,
    ) -> MigrateResult<ValidationReport> {
        self.tick("validate")?;
        Ok(ValidationReport::with_errors(vec!["always broken".to_string()]))
    }

    async fn explain(
        &self,
        _sql_script: &str,
        _context: &MigrationContext,
    ) -> MigrateResult<String> {
        self.tick("explain")?;
        Ok("explanation".to_string())
    }
}

/// A composer failure mid-run is a hard error, distinct from the
/// workflow's `Failed` terminal state.
#[tokio::test]
async fn test_composer_outage_aborts_the_run() {
    // generate and the first validate succeed, the first regenerate dies
    let composer = FlakyComposer::new(2);
    let context = MigrationContext::new(
        TableSchema::new("Customers", vec![SchemaField::new("id", "int")]),
        TableSchema::new("Clients", vec![SchemaField::new("id", "int")]),
        vec![FieldMapping::new("Customers", "id", "Clients", "id")],
    );

    let err = MigrationWorkflow::new(&composer)
        .run(vec![context])
        .await
        .unwrap_err();

    assert!(err.is_compose_failure());
    assert!(err.to_string().contains("regenerate"));
}

/// Reconciliation propagates analysis failures instead of retrying.
#[tokio::test]
async fn test_reconciler_propagates_analysis_failure() {
    let composer = FlakyComposer::new(0);
    let (source, target) = documents();

    let err = SchemaReconciler::new(&composer)
        .reconcile(&source, &target, &mappings())
        .await
        .unwrap_err();

    assert!(err.is_compose_failure());
    assert!(err.to_string().contains("analyze"));
}
