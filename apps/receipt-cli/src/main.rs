//! # Offertory Receipt CLI
//!
//! ```text
//! offertory words 23.50
//! offertory build payments/rcp-0042.json --format text --out receipts/
//! offertory validate payments/rcp-0042.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use offertory_cli::cli::{Cli, Command};
use offertory_cli::commands;
use offertory_cli::config::CliConfig;

fn main() -> Result<()> {
    offertory_cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Words { amount } => {
            println!("{}", commands::words(&amount)?);
        }
        Command::Build {
            record,
            format,
            out,
            strict,
        } => {
            let config = CliConfig::from_env().context("Failed to load configuration")?;
            debug!(?config, "Configuration loaded");
            let path = commands::build(&config, &record, format, out.as_deref(), strict)?;
            println!("{}", path.display());
        }
        Command::Validate { record } => {
            commands::validate(&record)?;
            println!("ok");
        }
    }

    Ok(())
}
