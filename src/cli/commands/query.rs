//! get, has and keys commands - Read-only queries

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Print the value of a key.
///
/// Without a default, a missing key is an error.
pub fn get(ctx: &Context, key: &str, default: Option<&str>) -> Result<()> {
    let value = match default {
        Some(default) => ctx.store.get_or(key, default),
        None => ctx.store.get(key)?,
    };

    println!("{}", value);
    Ok(())
}

/// Print `true` or `false` depending on whether the key has a value.
pub fn has(ctx: &Context, key: &str) -> Result<()> {
    println!("{}", ctx.store.has(key));
    Ok(())
}

/// Print the keys at the current scope, one per line.
pub fn keys(ctx: &Context) -> Result<()> {
    let keys = ctx.store.keys();
    if keys.is_empty() {
        output::info("(no keys)", ctx.verbosity);
        return Ok(());
    }

    println!("{}", output::format_list(&keys));
    Ok(())
}
