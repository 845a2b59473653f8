//! `crosswalk init` command - scaffold a new project.

use std::path::Path;

use crosswalk_schema::CrosswalkConfig;

use crate::cli::{CONFIG_FILE_NAME, InitArgs};
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the init command
pub async fn run(args: InitArgs) -> CliResult<()> {
    output::header("Initialize Crosswalk Project");

    let config_path = args.path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    write_starter_config(&config_path).await?;

    output::success(&format!("Created {}", config_path.display()));
    output::newline();
    output::info("Next steps:");
    output::list_item("Point [inputs] at your schema dumps and mapping table");
    output::list_item("Run `crosswalk reconcile` to inspect the classification");
    output::list_item("Run `crosswalk run` to produce the migration script");

    Ok(())
}

/// Write the default configuration to disk.
async fn write_starter_config(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let config = CrosswalkConfig::default();
    tokio::fs::write(path, config.to_toml()?).await?;
    Ok(())
}
