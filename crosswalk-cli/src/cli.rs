//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default config file name (lives in project root)
pub const CONFIG_FILE_NAME: &str = "crosswalk.toml";

/// Crosswalk CLI - schema reconciliation and migration scripts
#[derive(Parser, Debug)]
#[command(name = "crosswalk")]
#[command(version)]
#[command(about = "Reconcile database schemas and produce a validated migration script", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Crosswalk project
    Init(InitArgs),

    /// Reconcile schemas and print the mapping classification
    Reconcile(ReconcileArgs),

    /// Run the full pipeline and write artifacts
    Run(RunArgs),
}

// =============================================================================
// Init Command
// =============================================================================

/// Arguments for the `init` command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize the project (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

// =============================================================================
// Reconcile Command
// =============================================================================

/// Arguments for the `reconcile` command
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Print the full composer analysis for each table pair
    #[arg(long)]
    pub analysis: bool,
}

// =============================================================================
// Run Command
// =============================================================================

/// Arguments for the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Output directory override
    #[arg(short, long)]
    pub outputs: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_run_with_outputs() {
        let cli = Cli::try_parse_from(["crosswalk", "run", "--outputs", "artifacts"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.outputs.unwrap(), PathBuf::from("artifacts"));
            }
            _ => panic!("expected run command"),
        }
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["crosswalk", "--config", "custom.toml", "reconcile"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
