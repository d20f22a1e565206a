//! Text-to-text map where each key is the reversal of its value.
//!
//! # INVARIANTS
//!
//! 1. **REVERSAL_ON_INSERT**: `insert(v)` stores `reverse(v) → v`
//! 2. **UNIQUE_KEYS**: one value per key; re-inserting a value overwrites
//!
//! The reversal rule is only established by `insert`. `reset_from` maps each
//! object's text to itself and `uppercase_keys` rewrites keys without touching
//! values, so both can leave entries that break it. That is intentional; use
//! [`ReversalMap::verify_reversal`] to find out whether it currently holds.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use log::debug;

use crate::contracts::{check_reversal_pair, check_sorted_ascending, check_sorted_descending};
use crate::error::SandboxError;
use crate::utils::reverse_chars;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReversalMap {
    entries: HashMap<String, String>,
}

impl ReversalMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    // ========================================================================
    // ORDERED VIEWS
    // ========================================================================

    /// All values in ascending order, duplicates kept.
    pub fn values_sorted(&self) -> Vec<String> {
        let mut values: Vec<String> = self.entries.values().cloned().collect();
        values.sort();
        check_sorted_ascending(values.as_slice());
        values
    }

    /// All keys in descending order.
    pub fn keys_sorted_descending(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_by(|a, b| b.cmp(a));
        check_sorted_descending(keys.as_slice());
        keys
    }

    /// Smallest value, or `None` on an empty map.
    pub fn first(&self) -> Option<String> {
        self.values_sorted().into_iter().next()
    }

    /// Largest value, or `None` on an empty map.
    pub fn last(&self) -> Option<String> {
        self.values_sorted().pop()
    }

    /// Every key upper-cased. Keys that fold together are all kept, so the
    /// result always has `len()` entries. Order is not part of the contract.
    pub fn keys_uppercased(&self) -> Vec<String> {
        self.keys_sorted_descending()
            .iter()
            .map(|key| key.to_uppercase())
            .collect()
    }

    /// Number of distinct values (not keys).
    pub fn distinct_value_count(&self) -> usize {
        self.entries.values().collect::<HashSet<_>>().len()
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Store `value` under its reversal, replacing any previous value there.
    pub fn insert(&mut self, value: impl Into<String>) {
        let value = value.into();
        let key = reverse_chars(&value);
        check_reversal_pair(&key, &value);
        self.entries.insert(key, value);
    }

    pub fn remove_by_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Remove every entry whose value equals `value`.
    pub fn remove_by_value(&mut self, value: &str) {
        self.entries.retain(|_, stored| stored.as_str() != value);
    }

    /// Clear the map and store each object's text under itself.
    ///
    /// Does not apply the reversal rule.
    pub fn reset_from<I>(&mut self, objects: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.entries.clear();
        for object in objects {
            let text = object.to_string();
            self.entries.insert(text.clone(), text);
        }
        debug!("reversal map reset to {} self-mapped entries", self.entries.len());
    }

    /// Rebuild the map with every key upper-cased and values kept.
    ///
    /// Keys are processed in ascending order; when several fold to the same
    /// upper-case key, the value of the last one processed is kept.
    pub fn uppercase_keys(&mut self) {
        let mut old: Vec<(String, String)> = self.entries.drain().collect();
        old.sort_by(|a, b| a.0.cmp(&b.0));

        let before = old.len();
        for (key, value) in old {
            self.entries.insert(key.to_uppercase(), value);
        }
        debug!(
            "reversal map keys upper-cased: {} -> {} entries",
            before,
            self.entries.len()
        );
    }

    // ========================================================================
    // MEMBERSHIP
    // ========================================================================

    /// True when every candidate is stored as some value. Vacuously true for
    /// no candidates.
    pub fn contains_all_values<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        if candidates.is_empty() {
            return true;
        }
        let values: HashSet<&str> = self.entries.values().map(String::as_str).collect();
        candidates
            .iter()
            .all(|candidate| values.contains(candidate.as_ref()))
    }

    /// Check that every key is the reversal of its value.
    ///
    /// Entries are inspected in key order so the reported violation is stable.
    pub fn verify_reversal(&self) -> Result<(), SandboxError> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        for key in keys {
            let value = &self.entries[key];
            if reverse_chars(value) != *key {
                return Err(SandboxError::ReversalViolation {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
