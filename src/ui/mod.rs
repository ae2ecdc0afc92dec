//! ui
//!
//! User-facing output for the binary.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - Log subscriber setup
//!
//! # Design
//!
//! Command results go to stdout. Diagnostics (errors, info messages, logs)
//! go to stderr, so command output can always be piped.

pub mod logging;
pub mod output;
