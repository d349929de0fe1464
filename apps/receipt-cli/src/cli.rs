//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(author, version, about = "Church payment receipts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print an amount in words, e.g. `offertory words 23.50`
    Words {
        /// Decimal amount, no currency symbol
        amount: String,
    },

    /// Build the receipt for a payment record
    Build {
        /// Payment record JSON file
        record: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output directory (defaults to OFFERTORY_OUTPUT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Refuse records that fail validation
        #[arg(long)]
        strict: bool,
    },

    /// Check a payment record without building a receipt
    Validate {
        /// Payment record JSON file
        record: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "offertory", "build", "rcp.json", "--format", "text", "--out", "out", "--strict",
        ])
        .unwrap();

        match cli.command {
            Command::Build {
                record,
                format,
                out,
                strict,
            } => {
                assert_eq!(record, PathBuf::from("rcp.json"));
                assert_eq!(format, ExportFormat::Text);
                assert_eq!(out, Some(PathBuf::from("out")));
                assert!(strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_build_defaults_to_json() {
        let cli = Cli::try_parse_from(["offertory", "build", "rcp.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Build {
                format: ExportFormat::Json,
                strict: false,
                out: None,
                ..
            }
        ));
    }

    #[test]
    fn test_words_requires_amount() {
        assert!(Cli::try_parse_from(["offertory", "words"]).is_err());
    }
}
