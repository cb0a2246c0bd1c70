//! Skilltune - scoring CLI for BDD Example Mapping outputs
//!
//! Thin orchestration over skilltune-core: score candidate outputs with
//! the deterministic or judged metrics and inspect the training data
//! partitions used by the external optimizers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use skilltune_core::config::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_or_default();
    tracing::debug!(model = %config.judge.model, "configuration loaded");

    match &cli.command {
        Commands::Score { input, report_dir } => {
            commands::score::run(input, report_dir.as_deref(), &config)?;
        }
        Commands::Judge {
            input,
            multi,
            report_dir,
        } => {
            commands::judge::run(input, *multi, report_dir.as_deref(), &config).await?;
        }
        Commands::Dataset { mode, ratio, seed } => {
            commands::dataset::run(*mode, *ratio, *seed)?;
        }
    }

    Ok(())
}
