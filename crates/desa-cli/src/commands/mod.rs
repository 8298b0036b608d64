//! Command implementations

mod inspect;
mod resolve;
mod score;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Resolve(args) => resolve::execute(args, &config, &output).await,
        Commands::Score(args) => score::execute(args, &config, &output).await,
        Commands::Inspect(args) => inspect::execute(args, &config, &output).await,
    }
}
