//! core::config::adapter
//!
//! Container-style access to a [`ConfigStore`].
//!
//! These are thin wrappers for callers that treat a configuration like a
//! map: membership, insertion of any displayable value, removal, length and
//! iteration over keys. Typed values are rendered to text here, before they
//! reach the store; the store itself only ever sees strings.

use std::fmt::Display;

use super::{ConfigError, ConfigStore};
use crate::core::key::{ConfigKey, ConfigValue};

impl ConfigStore {
    /// Membership test. Same as [`ConfigStore::has`].
    pub fn contains_key(&self, key: &str) -> bool {
        self.has(key)
    }

    /// Store any displayable value under `key`, rendered to its text form.
    ///
    /// ```
    /// use pipeconf::core::config::ConfigStore;
    ///
    /// let config = ConfigStore::empty();
    /// config.insert("count", 10).unwrap();
    /// config.insert("ratio", 0.5).unwrap();
    /// assert_eq!(config.get("count").unwrap(), "10");
    /// assert_eq!(config.get("ratio").unwrap(), "0.5");
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`ConfigStore::set`].
    pub fn insert(&self, key: &str, value: impl Display) -> Result<(), ConfigError> {
        self.set(key, value.to_string())
    }

    /// Remove `key`, returning its value. Same as [`ConfigStore::unset`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfigStore::unset`].
    pub fn remove(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        self.unset(key)
    }

    /// Number of keys at this scope.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// `true` when no key has a value at this scope.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate over a snapshot of the keys at this scope.
    pub fn iter(&self) -> std::vec::IntoIter<ConfigKey> {
        self.keys().into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = ConfigKey;
    type IntoIter = std::vec::IntoIter<ConfigKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_map() {
        let c = ConfigStore::empty();
        let key = "key";

        assert!(!c.contains_key(key));
        assert!(c.is_empty());

        c.insert(key, "oldvalue").unwrap();
        assert_eq!(c.get(key).unwrap(), "oldvalue");
        assert!(c.contains_key(key));
        assert_eq!(c.len(), 1);
        assert!(!c.is_empty());

        let mut value = String::from("newvalue");
        c.insert(key, &value).unwrap();
        value.push_str("-changed");
        // The store keeps its own copy
        assert_eq!(c.get(key).unwrap(), "newvalue");

        assert_eq!(c.remove(key).unwrap(), "newvalue");
        assert!(matches!(c.get(key), Err(ConfigError::KeyNotFound { .. })));
        assert!(matches!(c.remove(key), Err(ConfigError::KeyNotFound { .. })));
    }

    #[test]
    fn insert_renders_values_as_text() {
        let c = ConfigStore::empty();
        c.insert("int", 10).unwrap();
        c.insert("neg", -3i64).unwrap();
        c.insert("flag", true).unwrap();
        c.insert("ch", 'x').unwrap();

        assert_eq!(c.get("int").unwrap(), "10");
        assert_eq!(c.get("neg").unwrap(), "-3");
        assert_eq!(c.get("flag").unwrap(), "true");
        assert_eq!(c.get("ch").unwrap(), "x");
    }

    #[test]
    fn iterates_over_keys() {
        let c = ConfigStore::from_entries([("b", "2"), ("a", "1"), ("x:y", "3")]).unwrap();

        let keys: Vec<String> = (&c).into_iter().collect();
        assert_eq!(keys, vec!["a", "b", "x:y"]);

        let mut seen = 0;
        for key in &c {
            assert!(c.contains_key(&key));
            seen += 1;
        }
        assert_eq!(seen, c.len());
    }

    #[test]
    fn view_adapter_is_scoped() {
        let c = ConfigStore::from_entries([("b:k", "x"), ("other", "y")]).unwrap();
        let v = c.subblock_view("b");

        assert_eq!(v.len(), 1);
        assert!(v.contains_key("k"));
        assert!(!v.contains_key("other"));

        v.insert("n", 5).unwrap();
        assert_eq!(c.get("b:n").unwrap(), "5");
    }
}
