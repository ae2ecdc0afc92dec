//! unset command - Remove a key and show what remains

use super::dump::print_store;
use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Remove a key, then print the remaining entries.
pub fn unset(ctx: &Context, key: &str, json: bool) -> Result<()> {
    let old = ctx
        .store
        .unset(key)
        .with_context(|| format!("Failed to unset '{}'", key))?;

    output::info(format!("Removed {} (was {})", key, old), ctx.verbosity);
    print_store(&ctx.store, json, ctx.verbosity)
}
