//! core::config
//!
//! Hierarchical, string-valued configuration store.
//!
//! # Overview
//!
//! A [`ConfigStore`] maps fully-qualified keys (segments joined by
//! [`BLOCK_SEP`](crate::core::key::BLOCK_SEP)) to string values, and tracks a
//! set of read-only keys. Two derivations produce related stores:
//!
//! - **Subblock** ([`ConfigStore::subblock`]): an independent copy of
//!   everything under one block, with the block prefix stripped.
//! - **View** ([`ConfigStore::subblock_view`]): a handle that shares storage
//!   with its origin and applies the block prefix on every access.
//!
//! # Ownership
//!
//! A root store owns its storage through an `Rc<RefCell<_>>`. Views hold a
//! second strong reference plus their prefix, so storage lives as long as the
//! longest-lived handle and a view can never dangle. Handles are `!Send`:
//! the store is single-threaded.
//!
//! # Failure
//!
//! Every failing operation leaves the store exactly as it was. Merges are
//! checked in full before the first value is written.
//!
//! # Example
//!
//! ```
//! use pipeconf::core::config::{ConfigError, ConfigStore};
//!
//! let config = ConfigStore::empty();
//! config.set("detector:threshold", "0.5").unwrap();
//!
//! let copy = config.subblock("detector");
//! let view = config.subblock_view("detector");
//!
//! config.set("detector:threshold", "0.75").unwrap();
//! assert_eq!(copy.get("threshold").unwrap(), "0.5");
//! assert_eq!(view.get("threshold").unwrap(), "0.75");
//!
//! view.mark_read_only("threshold").unwrap();
//! assert!(matches!(
//!     config.set("detector:threshold", "1.0"),
//!     Err(ConfigError::ReadOnlyViolation { .. })
//! ));
//! ```

mod adapter;
mod store;

pub use store::{empty_config, ConfigStore};

use std::fmt;
use thiserror::Error;

/// Mutation attempted against a read-only key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Insert or overwrite a value.
    Set,
    /// Remove a value.
    Unset,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Set => write!(f, "set"),
            Mutation::Unset => write!(f, "unset"),
        }
    }
}

/// Errors from configuration operations.
///
/// Keys are reported fully qualified, so an error raised through a view
/// names the key as it is stored in the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no such configuration value: '{key}'")]
    KeyNotFound { key: String },

    #[error("cannot {action} read-only configuration value: '{key}'")]
    ReadOnlyViolation { key: String, action: Mutation },

    #[error("invalid configuration key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

impl ConfigError {
    /// The fully-qualified key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::KeyNotFound { key }
            | ConfigError::ReadOnlyViolation { key, .. }
            | ConfigError::InvalidKey { key, .. } => key,
        }
    }
}
