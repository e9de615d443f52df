//! Insertion-ordered selection set
//!
//! Maps derived keys to the items selected under them, preserving
//! insertion order so the eviction policy can find the oldest entry.

use crate::item::Item;

/// The set of currently selected items, oldest first
///
/// Owned by a single controller; no duplicate keys. Collision checks are
/// the caller's job: [`SelectionState::insert`] assumes the key is absent.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    entries: Vec<(String, Item)>,
}

impl SelectionState {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of selected entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership test for a derived key
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Append an entry at the end of the order
    pub fn insert(&mut self, key: String, item: Item) {
        debug_assert!(!self.contains(&key), "duplicate selection key: {key}");
        self.entries.push((key, item));
    }

    /// Remove the entry under `key`, returning its item
    ///
    /// No-op when the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<Item> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// The first-inserted key still present
    #[must_use]
    pub fn oldest_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    /// Selected items in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().map(|(_, item)| item)
    }

    /// Selected keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
