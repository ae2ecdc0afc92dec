//! core::config::store
//!
//! The configuration store, its views and subblocks.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;
use std::rc::Rc;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use super::{ConfigError, Mutation};
use crate::core::key::{self, block_prefix, strip_block, ConfigKey, ConfigKeys, ConfigValue};

/// Storage shared by a root store and every view derived from it.
#[derive(Debug, Default)]
struct Backing {
    entries: BTreeMap<ConfigKey, ConfigValue>,
    locked: BTreeSet<ConfigKey>,
}

impl Backing {
    /// Entries under `prefix`, with the prefix stripped.
    ///
    /// Keys sharing a prefix are contiguous in a sorted map, so this is a
    /// range scan rather than a full walk.
    fn entries_under<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ConfigValue)> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(k, _)| k.starts_with(prefix))
            .filter_map(move |(k, v)| strip_block(k, prefix).map(|rest| (rest, v)))
    }

    /// Locked keys under `prefix`, with the prefix stripped.
    fn locks_under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.locked
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |k| k.starts_with(prefix))
            .filter_map(move |k| strip_block(k, prefix))
    }
}

/// A hierarchical, string-valued configuration store.
///
/// A `ConfigStore` is either a root (created with [`ConfigStore::empty`] or
/// derived with [`ConfigStore::subblock`]) that owns its storage, or a view
/// (derived with [`ConfigStore::subblock_view`]) that shares storage with
/// the store it came from and addresses it through a block prefix.
///
/// All operations take `&self`: a store and its views mutate the same
/// storage, so mutation goes through interior mutability. No borrow of the
/// storage outlives a single method call.
///
/// `ConfigStore` is intentionally not `Clone`. Use [`ConfigStore::snapshot`]
/// for an independent copy or [`ConfigStore::subblock_view`] for an alias.
///
/// # Example
///
/// ```
/// use pipeconf::core::config::ConfigStore;
///
/// let config = ConfigStore::empty();
/// config.set("a", "1").unwrap();
/// config.set("b:c", "2").unwrap();
///
/// assert_eq!(config.size(), 2);
/// assert_eq!(config.keys(), vec!["a", "b:c"]);
/// assert_eq!(config.get_or("missing", "fallback"), "fallback");
/// ```
pub struct ConfigStore {
    backing: Rc<RefCell<Backing>>,
    /// Applied to every caller key. Empty for root stores, `block:` for views.
    prefix: String,
}

/// Create an empty root configuration.
pub fn empty_config() -> ConfigStore {
    ConfigStore::empty()
}

impl ConfigStore {
    /// Create an empty root store.
    pub fn empty() -> Self {
        Self::owning(Backing::default())
    }

    /// Build a root store from key/value pairs, applied in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` for the first malformed key.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ConfigValue>,
    {
        let store = Self::empty();
        for (key, value) in entries {
            store.set(key.as_ref(), value)?;
        }
        Ok(store)
    }

    fn owning(backing: Backing) -> Self {
        Self {
            backing: Rc::new(RefCell::new(backing)),
            prefix: String::new(),
        }
    }

    /// Resolve a caller key to its fully-qualified form.
    fn qualify(&self, key: &str) -> ConfigKey {
        format!("{}{}", self.prefix, key)
    }

    /// The block path this store addresses, if it is a scoped view.
    pub fn block(&self) -> Option<&str> {
        self.prefix.strip_suffix(key::BLOCK_SEP)
    }

    /// Whether two handles read and write the same storage.
    pub fn shares_storage_with(&self, other: &ConfigStore) -> bool {
        Rc::ptr_eq(&self.backing, &other.backing)
    }

    // =========================================================================
    // Value access
    // =========================================================================

    /// Check whether a value is set for `key`.
    pub fn has(&self, key: &str) -> bool {
        self.backing
            .borrow()
            .entries
            .contains_key(&self.qualify(key))
    }

    /// Get the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if no value is set.
    pub fn get(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        let full = self.qualify(key);
        let value = self.backing.borrow().entries.get(&full).cloned();
        value.ok_or(ConfigError::KeyNotFound { key: full })
    }

    /// Get the value for `key`, or `default` if none is set.
    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(key).unwrap_or_else(|_| default.into())
    }

    /// Set the value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ReadOnlyViolation` if the key is read-only
    /// - `ConfigError::InvalidKey` if the key is malformed
    pub fn set(&self, key: &str, value: impl Into<ConfigValue>) -> Result<(), ConfigError> {
        let full = self.qualify(key);
        key::validate(&full)?;

        let mut backing = self.backing.borrow_mut();
        if backing.locked.contains(&full) {
            return Err(ConfigError::ReadOnlyViolation {
                key: full,
                action: Mutation::Set,
            });
        }

        let value = value.into();
        debug!(key = %full, value = %value, "set configuration value");
        backing.entries.insert(full, value);
        Ok(())
    }

    /// Remove the value for `key`, returning it.
    ///
    /// The read-only check comes first, so a locked key that has no value
    /// reports `ReadOnlyViolation` rather than `KeyNotFound`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ReadOnlyViolation` if the key is read-only
    /// - `ConfigError::KeyNotFound` if no value is set
    pub fn unset(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        let full = self.qualify(key);

        let mut backing = self.backing.borrow_mut();
        if backing.locked.contains(&full) {
            return Err(ConfigError::ReadOnlyViolation {
                key: full,
                action: Mutation::Unset,
            });
        }

        match backing.entries.remove(&full) {
            Some(value) => {
                debug!(key = %full, "unset configuration value");
                Ok(value)
            }
            None => Err(ConfigError::KeyNotFound { key: full }),
        }
    }

    /// Mark `key` read-only. Idempotent.
    ///
    /// The key does not need a value: locking an absent key blocks every
    /// later `set` at that key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is malformed.
    pub fn mark_read_only(&self, key: &str) -> Result<(), ConfigError> {
        let full = self.qualify(key);
        key::validate(&full)?;

        if self.backing.borrow_mut().locked.insert(full.clone()) {
            debug!(key = %full, "marked configuration value read-only");
        }
        Ok(())
    }

    /// Check whether `key` is read-only.
    pub fn is_read_only(&self, key: &str) -> bool {
        self.backing.borrow().locked.contains(&self.qualify(key))
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Keys with a value at this scope, sorted, with this store's prefix
    /// stripped.
    ///
    /// The returned list is a snapshot; the store may be mutated while it is
    /// iterated.
    pub fn keys(&self) -> ConfigKeys {
        self.backing
            .borrow()
            .entries_under(&self.prefix)
            .map(|(k, _)| k.to_owned())
            .collect()
    }

    /// Number of keys with a value at this scope.
    pub fn size(&self) -> usize {
        self.backing.borrow().entries_under(&self.prefix).count()
    }

    /// Entries at this scope as a sorted map, prefix stripped.
    pub fn to_map(&self) -> BTreeMap<ConfigKey, ConfigValue> {
        self.backing
            .borrow()
            .entries_under(&self.prefix)
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect()
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Copy everything under `name` into a new, independent store.
    ///
    /// Keys of the form `name:rest` become `rest`. Read-only markings under
    /// `name` are copied along, including markings on keys without a value.
    /// Nothing is shared: later changes to either store are invisible to the
    /// other. An empty `name` copies the whole scope.
    pub fn subblock(&self, name: &str) -> ConfigStore {
        let prefix = format!("{}{}", self.prefix, block_prefix(name));
        let backing = self.backing.borrow();

        let copy = Backing {
            entries: backing
                .entries_under(&prefix)
                .map(|(k, v)| (k.to_owned(), v.clone()))
                .collect(),
            locked: backing.locks_under(&prefix).map(str::to_owned).collect(),
        };

        trace!(
            block = %name,
            entries = copy.entries.len(),
            locked = copy.locked.len(),
            "derived detached subblock"
        );
        Self::owning(copy)
    }

    /// Create a view of everything under `name`, sharing this store's storage.
    ///
    /// Every key given to the view is resolved as `name:key`; enumerated keys
    /// have `name:` stripped. Changes made through the view are visible in
    /// this store immediately and vice versa. Views of views compose their
    /// prefixes. An empty `name` returns another handle onto this scope.
    /// `name` is not validated here; writes through a view with a malformed
    /// name fail with [`ConfigError::InvalidKey`].
    pub fn subblock_view(&self, name: &str) -> ConfigStore {
        let prefix = format!("{}{}", self.prefix, block_prefix(name));
        trace!(prefix = %prefix, "derived linked view");
        Self {
            backing: Rc::clone(&self.backing),
            prefix,
        }
    }

    /// An independent copy of this scope, prefix stripped.
    pub fn snapshot(&self) -> ConfigStore {
        self.subblock("")
    }

    // =========================================================================
    // Merge
    // =========================================================================

    /// Copy every entry of `source` into this store, overwriting conflicts.
    ///
    /// Keys only present here are left untouched. Each incoming key follows
    /// `set` rules; the whole merge is checked first, so on failure nothing
    /// has been written.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidKey` if an incoming key is malformed once this
    ///   store's prefix is applied
    /// - `ConfigError::ReadOnlyViolation` naming the first incoming key that
    ///   is read-only here
    pub fn merge(&self, source: &ConfigStore) -> Result<(), ConfigError> {
        // Collect first: `source` may share storage with `self`.
        let incoming: Vec<(ConfigKey, ConfigValue)> = source
            .backing
            .borrow()
            .entries_under(&source.prefix)
            .map(|(k, v)| (self.qualify(k), v.clone()))
            .collect();

        let mut backing = self.backing.borrow_mut();
        for (full, _) in &incoming {
            key::validate(full)?;
            if backing.locked.contains(full) {
                return Err(ConfigError::ReadOnlyViolation {
                    key: full.clone(),
                    action: Mutation::Set,
                });
            }
        }

        debug!(entries = incoming.len(), prefix = %self.prefix, "merging configuration");
        backing.entries.extend(incoming);
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("prefix", &self.prefix)
            .field("entries", &self.to_map())
            .finish()
    }
}

/// Two stores are equal when their visible entries are equal.
///
/// Read-only markings and prefixes are not compared.
impl PartialEq for ConfigStore {
    fn eq(&self, other: &Self) -> bool {
        self.to_map() == other.to_map()
    }
}

impl Eq for ConfigStore {}

/// Serializes the visible scope as a map, sorted by key.
impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.to_map())
    }
}
