//! Crosswalk CLI - reconcile schemas and produce migration scripts.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crosswalk_cli::cli::{Cli, Command};
use crosswalk_cli::commands;
use crosswalk_cli::error::CliResult;
use crosswalk_cli::output;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the appropriate command
    match cli.command {
        Command::Init(args) => commands::init::run(args).await,
        Command::Reconcile(args) => commands::reconcile::run(&cli.config, args).await,
        Command::Run(args) => commands::run::run(&cli.config, args).await,
    }
}
