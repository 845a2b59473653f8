//! `crosswalk reconcile` command - classify mappings without running
//! the script pipeline.

use std::path::Path;

use crosswalk_migrate::{RuleComposer, SchemaReconciler};

use crate::cli::ReconcileArgs;
use crate::commands::{load_config, load_inputs};
use crate::error::CliResult;
use crate::output;

/// Run the reconcile command
pub async fn run(config_path: &Path, args: ReconcileArgs) -> CliResult<()> {
    output::header("Reconcile Schemas");

    let config = load_config(config_path)?;
    output::kv("Source", &config.inputs.source_schema.display().to_string());
    output::kv("Target", &config.inputs.target_schema.display().to_string());
    output::kv("Mappings", &config.inputs.field_mapping.display().to_string());
    output::newline();

    let (source, target, mappings) = load_inputs(&config).await?;
    output::info(&format!(
        "{} source tables, {} target tables, {} mappings",
        source.len(),
        target.len(),
        mappings.len()
    ));

    let composer = RuleComposer::new(config.composer.clone());
    let reconciler = SchemaReconciler::new(&composer);
    let contexts = reconciler.reconcile(&source, &target, &mappings).await?;

    output::newline();
    if contexts.is_empty() {
        output::warn("No table pair resolved against both schema documents");
        return Ok(());
    }

    output::section(&format!("Reconciled {} table pair(s)", contexts.len()));
    for context in &contexts {
        output::list_item(&context.summary());

        for mismatch in &context.datatype_mismatches {
            output::dim(&format!("      type mismatch: {}", mismatch.describe()));
        }
        for field in &context.missing_in_target {
            output::dim(&format!("      missing in target: {}", field));
        }

        if args.analysis {
            if let Some(analysis) = &context.analysis {
                output::newline();
                for line in analysis.lines() {
                    output::dim(&format!("      {}", line));
                }
                output::newline();
            }
        }
    }

    Ok(())
}
