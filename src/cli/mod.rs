//! cli
//!
//! Command-line interface layer for pipeconf.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the store from `--set` and `--lock` flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It stands in for the pipeline framework that would
//! normally own a configuration: values arrive as flags instead of from a
//! parser, and every command goes through the public [`ConfigStore`] API.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::core::config::ConfigStore;
use crate::ui::output::Verbosity;
use crate::ui::logging;
use anyhow::{Context as _, Result};
use tracing::debug;

/// Execution context shared by every command handler.
#[derive(Debug)]
pub struct Context {
    /// The store commands operate on; a view when `--block` was given.
    pub store: ConfigStore,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    logging::init(verbosity);

    let store = build_store(&cli.set, &cli.lock, cli.block.as_deref())?;
    let ctx = Context { store, verbosity };

    commands::dispatch(cli.command, &ctx)
}

/// Build the store a command runs against.
///
/// Values are applied in order, then keys are locked. With a block, the
/// returned handle is a view of that block; it keeps the root storage alive
/// on its own.
pub fn build_store(
    values: &[(String, String)],
    locks: &[String],
    block: Option<&str>,
) -> Result<ConfigStore> {
    let root = ConfigStore::empty();

    for (key, value) in values {
        root.set(key, value.as_str())
            .with_context(|| format!("Failed to set '{}'", key))?;
    }

    for key in locks {
        root.mark_read_only(key)
            .with_context(|| format!("Failed to lock '{}'", key))?;
    }

    debug!(values = values.len(), locks = locks.len(), "built configuration");

    Ok(match block {
        Some(name) => root.subblock_view(name),
        None => root,
    })
}
