//! Store Module
//!
//! In-memory key-value mapping.
//!
//! ## Responsibilities
//! - Atomic single-key mutation (put/delete)
//! - Key validation against the line-oriented command grammar
//! - Dirty tracking for the flush policy
//! - Ordered iteration for listings and snapshots
//!
//! ## Data Structure Choice
//! `BTreeMap<String, String>`: keys come back in sorted order for free, so
//! LIST output and snapshot records are deterministic without an extra sort.

use std::collections::BTreeMap;

use crate::error::{KvError, Result};

/// In-memory key-value store with dirty tracking
#[derive(Debug, Default)]
pub struct Store {
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-validated mapping (snapshot load).
    /// The result starts clean: it matches what is on disk.
    pub(crate) fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries,
            dirty: false,
        }
    }

    /// Check that a key can round-trip through the command grammar.
    ///
    /// Keys are single whitespace-delimited tokens on a command line, so an
    /// empty key, embedded whitespace, or control characters can never be
    /// typed back in to address the entry again.
    pub fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey("key must not be empty".to_string()));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(KvError::InvalidKey(format!(
                "key {key:?} contains whitespace or control characters"
            )));
        }
        Ok(())
    }

    /// Insert or overwrite the entry for `key`; marks the store dirty
    pub fn put(&mut self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        Ok(())
    }

    /// Get the current value for `key`
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))
    }

    /// Remove the entry for `key`, returning its value; marks the store dirty
    pub fn delete(&mut self, key: &str) -> Result<String> {
        let value = self
            .entries
            .remove(key)
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))?;
        self.dirty = true;
        Ok(value)
    }

    /// Owned listing of all pairs in sorted key order.
    ///
    /// A point-in-time copy: mutations after the call do not affect a
    /// listing already produced.
    pub fn list(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Iterate over entries in sorted key order (borrowed, for serialization)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries, O(1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the store has changed since the last successful save
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the store as saved (called after a successful snapshot write)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
