//! # offertory-cli
//!
//! Command-line front end for `offertory-core`: loads payment records,
//! builds receipts and saves them next to the books.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ──► cli (clap) ──► commands ──┬──► offertory-core              │
//! │                                        │                                │
//! │              config (OFFERTORY_*) ─────┤                                │
//! │                                        └──► export (json / text)        │
//! │                                                                         │
//! │  error: CliError wraps config, core, io and serde_json failures         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;

use tracing_subscriber::EnvFilter;

/// Installs the global log subscriber.
///
/// Logs go to stderr so command output on stdout stays pipeable.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,offertory=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
