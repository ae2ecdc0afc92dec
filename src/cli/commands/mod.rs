//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the store through its public API
//! 3. Formats and displays output
//!
//! Handlers receive the already-built store in [`Context`]; they never
//! construct stores from flags themselves (except `merge`, which builds its
//! incoming side).

mod completion;
mod dump;
mod merge;
mod query;
mod unset;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use dump::{dump, subblock};
pub use merge::merge;
pub use query::{get, has, keys};
pub use unset::unset;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Get { key, default } => get(ctx, &key, default.as_deref()),
        Command::Has { key } => has(ctx, &key),
        Command::Keys => keys(ctx),
        Command::Dump { json } => dump(ctx, json),
        Command::Subblock { name, json } => subblock(ctx, &name, json),
        Command::Unset { key, json } => unset(ctx, &key, json),
        Command::Merge { with, json } => merge(ctx, &with, json),
        Command::Completion { shell } => completion(shell),
    }
}
