//! # CLI Error Type
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigError ─────┐                                                     │
//! │  CoreError ───────┼──► CliError ──► anyhow::Error (main) ──► stderr     │
//! │  ValidationError ─┤                                  exit code 1        │
//! │  io / serde_json ─┘   (path attached)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use offertory_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Receipt error: {0}")]
    Core(#[from] CoreError),

    #[error("Record {} failed validation: {source}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse record {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize receipt: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("'{0}' is not a decimal amount")]
    InvalidAmount(String),
}

pub type CliResult<T> = Result<T, CliError>;
