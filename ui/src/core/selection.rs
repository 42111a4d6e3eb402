//! Toggle sets for per-screen choices (preferences, friends, contacts).
//! Nothing here outlives the screen that owns it.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Ord> {
    items: BTreeSet<K>,
}

impl<K: Ord> Default for Selection<K> {
    fn default() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }
}

impl<K: Ord> Selection<K> {
    /// Flip membership; returns true if `key` is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.items.remove(&key) {
            false
        } else {
            self.items.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.items.contains(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.items.iter()
    }
}
