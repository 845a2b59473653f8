//! `crosswalk run` command - the full pipeline: reconcile, generate,
//! validate with bounded retries, explain, and write artifacts.

use std::path::Path;

use crosswalk_migrate::{ArtifactWriter, MigrationWorkflow, RuleComposer, SchemaReconciler};

use crate::cli::RunArgs;
use crate::commands::{load_config, load_inputs};
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the run command
pub async fn run(config_path: &Path, args: RunArgs) -> CliResult<()> {
    output::header("Crosswalk Migration Pipeline");

    let config = load_config(config_path)?;
    let outputs_dir = args.outputs.unwrap_or_else(|| config.outputs.dir.clone());

    output::step(1, 4, "Loading schema documents and mappings...");
    let (source, target, mappings) = load_inputs(&config).await?;

    output::step(2, 4, "Reconciling table pairs...");
    let composer = RuleComposer::new(config.composer.clone());
    let reconciler = SchemaReconciler::new(&composer);
    let contexts = reconciler.reconcile(&source, &target, &mappings).await?;
    for context in &contexts {
        output::list_item(&context.summary());
    }

    output::step(3, 4, "Driving the migration workflow...");
    let workflow = MigrationWorkflow::new(&composer);
    let outcome = workflow.run(contexts).await?;

    output::step(4, 4, "Writing artifacts...");
    let writer = ArtifactWriter::new(&outputs_dir);
    let artifacts = writer.write_outcome(&outcome).await?;

    output::newline();
    for path in artifacts.paths() {
        output::kv("Wrote", &path.display().to_string());
    }
    output::newline();

    if outcome.passed() {
        output::success(&outcome.summary());
        Ok(())
    } else {
        // The script and report were still written for diagnosis
        Err(CliError::PipelineFailed(outcome.summary()))
    }
}
