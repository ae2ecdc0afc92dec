//! core::key
//!
//! Key vocabulary for hierarchical configuration.
//!
//! # Keys
//!
//! A configuration key is one or more segments joined by [`BLOCK_SEP`]:
//!
//! ```text
//! block:subblock:key
//! ```
//!
//! Segment contents are otherwise unconstrained. A key may not be empty and
//! may not contain an empty segment, so `""`, `":"`, `"a::b"`, `":a"` and
//! `"a:"` are all rejected by [`validate`].
//!
//! # Examples
//!
//! ```
//! use pipeconf::core::key::{join, split, validate, BLOCK_SEP};
//!
//! let key = join(["detector", "threshold"]);
//! assert_eq!(key, format!("detector{}threshold", BLOCK_SEP));
//! assert_eq!(split(&key), vec!["detector", "threshold"]);
//!
//! assert!(validate(&key).is_ok());
//! assert!(validate("detector::threshold").is_err());
//! ```

use crate::core::config::ConfigError;

/// A fully-qualified or scope-relative configuration key.
pub type ConfigKey = String;

/// An ordered collection of configuration keys.
pub type ConfigKeys = Vec<ConfigKey>;

/// A configuration value. Values are always stored as text.
pub type ConfigValue = String;

/// Separator between key segments.
pub const BLOCK_SEP: &str = ":";

/// Reserved key naming a value that applies globally rather than to one block.
///
/// The store gives it no special treatment; consumers decide what "global"
/// means for them.
pub const GLOBAL_VALUE: &str = "_global";

/// Join segments into a compound key.
pub fn join<I, S>(segments: I) -> ConfigKey
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            key.push_str(BLOCK_SEP);
        }
        key.push_str(segment.as_ref());
    }
    key
}

/// Split a compound key into its segments.
pub fn split(key: &str) -> Vec<&str> {
    key.split(BLOCK_SEP).collect()
}

/// Check that a key may be stored.
///
/// # Errors
///
/// Returns `ConfigError::InvalidKey` if the key is empty or contains an
/// empty segment.
pub fn validate(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            reason: "key cannot be empty".into(),
        });
    }

    if key.split(BLOCK_SEP).any(str::is_empty) {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            reason: format!("key cannot contain an empty segment around '{BLOCK_SEP}'"),
        });
    }

    Ok(())
}

/// Prefix that addresses everything under `block`.
///
/// Returns an empty prefix for an empty block name, which addresses the
/// whole scope.
pub(crate) fn block_prefix(block: &str) -> String {
    if block.is_empty() {
        String::new()
    } else {
        format!("{block}{BLOCK_SEP}")
    }
}

/// Strip `prefix` from `key`, returning the remainder if the key lies under it.
pub(crate) fn strip_block<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}
