//! Property-based tests for the configuration store.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated keys, values and operation sequences.

use std::collections::BTreeMap;

use proptest::prelude::*;

use pipeconf::core::key::{join, validate};
use pipeconf::{ConfigError, ConfigStore};

/// Strategy for a single key segment (never empty, never contains `:`).
fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,6}"
}

/// Strategy for keys of one to three segments.
fn key() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(join)
}

/// Strategy for arbitrary values, including empty and separator-bearing ones.
fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

/// Strategy for a small set of entries.
fn entries() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key(), value(), 0..12)
}

fn store_from(entries: &BTreeMap<String, String>) -> ConfigStore {
    ConfigStore::from_entries(entries.iter().map(|(k, v)| (k, v.as_str()))).unwrap()
}

/// Operations applied in sequence to a store and to a plain map.
#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Unset(String),
    Lock(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), value()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => key().prop_map(Op::Unset),
        1 => key().prop_map(Op::Lock),
    ]
}

proptest! {
    /// Generated keys are always valid.
    #[test]
    fn generated_keys_validate(k in key()) {
        prop_assert!(validate(&k).is_ok());
    }

    /// A set value reads back exactly.
    #[test]
    fn set_then_get(k in key(), v in value()) {
        let c = ConfigStore::empty();
        c.set(&k, v.clone()).unwrap();
        prop_assert!(c.has(&k));
        prop_assert_eq!(c.get(&k).unwrap(), v);
    }

    /// Unsetting one key never disturbs the others.
    #[test]
    fn unset_is_isolated(map in entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!map.is_empty());
        let c = store_from(&map);
        let victim = pick.get(&map.keys().cloned().collect::<Vec<_>>()).clone();

        c.unset(&victim).unwrap();

        prop_assert!(!c.has(&victim));
        let is_missing = matches!(c.get(&victim), Err(ConfigError::KeyNotFound { .. }));
        prop_assert!(is_missing);
        for (k, v) in map.iter().filter(|(k, _)| **k != victim) {
            prop_assert_eq!(&c.get(k).unwrap(), v);
        }
        prop_assert_eq!(c.size(), map.len() - 1);
    }

    /// The store behaves like a map guarded by a lock set.
    #[test]
    fn matches_model(ops in prop::collection::vec(op(), 0..40)) {
        let c = ConfigStore::empty();
        let mut model: BTreeMap<String, String> = BTreeMap::new();
        let mut locked = std::collections::BTreeSet::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let result = c.set(&k, v.clone());
                    if locked.contains(&k) {
                        prop_assert!(result.is_err());
                    } else {
                        prop_assert!(result.is_ok());
                        model.insert(k, v);
                    }
                }
                Op::Unset(k) => {
                    let result = c.unset(&k);
                    if locked.contains(&k) {
                        let is_read_only = matches!(result, Err(ConfigError::ReadOnlyViolation { .. }));
                        prop_assert!(is_read_only);
                    } else {
                        prop_assert_eq!(result.ok(), model.remove(&k));
                    }
                }
                Op::Lock(k) => {
                    c.mark_read_only(&k).unwrap();
                    locked.insert(k);
                }
            }
        }

        prop_assert_eq!(c.to_map(), model.clone());
        prop_assert_eq!(c.keys().len(), model.len());
    }

    /// A subblock holds exactly the stripped keys under its block, and never
    /// changes afterwards.
    #[test]
    fn subblock_is_filtered_copy(map in entries(), block in segment(), v in value()) {
        let c = store_from(&map);
        let d = c.subblock(&block);

        let prefix = format!("{}:", block);
        let expected: BTreeMap<String, String> = map
            .iter()
            .filter_map(|(k, v)| k.strip_prefix(&prefix).map(|rest| (rest.to_string(), v.clone())))
            .collect();
        prop_assert_eq!(d.to_map(), expected.clone());

        for k in expected.keys() {
            c.set(&format!("{}{}", prefix, k), v.clone()).unwrap();
        }
        prop_assert_eq!(d.to_map(), expected);
    }

    /// A view always agrees with a fresh subblock of its origin.
    #[test]
    fn view_tracks_origin(map in entries(), block in segment(), k in key(), v in value()) {
        let c = store_from(&map);
        let view = c.subblock_view(&block);
        prop_assert_eq!(view.to_map(), c.subblock(&block).to_map());

        c.set(&format!("{}:{}", block, k), v.clone()).unwrap();
        prop_assert_eq!(view.get(&k).unwrap(), v);
        prop_assert_eq!(view.to_map(), c.subblock(&block).to_map());
    }

    /// Merge equals map union with the source winning.
    #[test]
    fn merge_is_right_biased_union(left in entries(), right in entries()) {
        let c = store_from(&left);
        let d = store_from(&right);

        c.merge(&d).unwrap();

        let mut expected = left.clone();
        expected.extend(right.clone());
        prop_assert_eq!(c.to_map(), expected);
        prop_assert_eq!(d.to_map(), right);
    }

    /// A merge blocked by a lock changes nothing.
    #[test]
    fn blocked_merge_is_atomic(left in entries(), right in entries()) {
        prop_assume!(!right.is_empty());
        let c = store_from(&left);
        let locked_key = right.keys().next().unwrap().clone();
        c.mark_read_only(&locked_key).unwrap();

        prop_assert!(c.merge(&store_from(&right)).is_err());
        prop_assert_eq!(c.to_map(), left);
    }
}
