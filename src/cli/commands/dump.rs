//! dump and subblock commands - Print store contents

use crate::cli::Context;
use crate::core::config::ConfigStore;
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};

/// Print every entry at the current scope.
pub fn dump(ctx: &Context, json: bool) -> Result<()> {
    print_store(&ctx.store, json, ctx.verbosity)
}

/// Print a detached copy of one block.
pub fn subblock(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let block = ctx.store.subblock(name);
    if block.is_empty() {
        output::info(format!("No values under '{}'", name), ctx.verbosity);
    }
    print_store(&block, json, ctx.verbosity)
}

/// Print a store as `key = value` lines or as a JSON object.
pub(super) fn print_store(store: &ConfigStore, json: bool, verbosity: Verbosity) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(store).context("Failed to serialize configuration")?;
        println!("{}", rendered);
        return Ok(());
    }

    let entries = store.to_map();
    if entries.is_empty() {
        output::info("(empty)", verbosity);
    } else {
        println!("{}", output::format_entries(&entries));
    }
    Ok(())
}
