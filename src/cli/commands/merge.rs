//! cli::commands::merge
//!
//! Merge a second set of values over the store.
//!
//! # Design
//!
//! The incoming values are collected into their own root store first, then
//! merged in one step. A locked conflict rejects the whole merge, so the
//! printed result is either fully merged or untouched.
//!
//! # Example
//!
//! ```bash
//! # a = 1, b = 2, e = 3
//! pipeconf -s a=1 -s b=1 merge --with b=2 --with e=3
//! ```

use super::dump::print_store;
use crate::cli::Context;
use crate::core::config::ConfigStore;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run the merge command.
pub fn merge(ctx: &Context, with: &[(String, String)], json: bool) -> Result<()> {
    let incoming = ConfigStore::from_entries(with.iter().map(|(k, v)| (k, v.as_str())))
        .context("Invalid merge value")?;

    ctx.store
        .merge(&incoming)
        .context("Failed to merge configuration")?;

    output::info(
        format!("Merged {} value(s)", incoming.len()),
        ctx.verbosity,
    );
    print_store(&ctx.store, json, ctx.verbosity)
}
