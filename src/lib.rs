//! pipeconf - Hierarchical configuration for pipeline components
//!
//! pipeconf is a string-valued configuration store with namespaced keys.
//! Pipeline components read their parameters from it; blocks of keys can be
//! copied out as independent subblocks or addressed in place through views.
//!
//! # Architecture
//!
//! - [`core`] - Key vocabulary and the [`ConfigStore`] itself
//! - [`cli`] - Command-line consumer (builds a store from flags, queries it)
//! - [`ui`] - Output formatting and logging setup for the binary
//!
//! # Correctness Invariants
//!
//! 1. A failed `set`, `unset` or `merge` leaves the store unchanged
//! 2. Read-only keys can never be set or unset, through any view
//! 3. Subblocks never share storage with their source
//! 4. Views never hold a snapshot: they always see current storage
//!
//! # Example
//!
//! ```
//! use pipeconf::{ConfigStore, BLOCK_SEP};
//!
//! let config = ConfigStore::empty();
//! config.set(&format!("reader{BLOCK_SEP}path"), "input.txt").unwrap();
//!
//! let reader = config.subblock_view("reader");
//! assert_eq!(reader.get("path").unwrap(), "input.txt");
//! ```

pub mod cli;
pub mod core;
pub mod ui;

pub use crate::core::config::{empty_config, ConfigError, ConfigStore, Mutation};
pub use crate::core::key::{ConfigKey, ConfigKeys, ConfigValue, BLOCK_SEP, GLOBAL_VALUE};
