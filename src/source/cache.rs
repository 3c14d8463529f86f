//! In-memory cache of list responses.
//!
//! Entries are keyed by the `first` argument of the list query. A fresh
//! response for an already cached key is appended to the existing entry,
//! skipping ids that are already present, which is what makes "load more"
//! accumulate instead of replace.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::CollectionItem;

#[derive(Debug, Clone)]
struct CacheEntry {
    items: Vec<CollectionItem>,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct CollectionCache {
    entries: BTreeMap<u32, CacheEntry>,
}

impl CollectionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached items for `first`, if any.
    #[must_use]
    pub fn get(&self, first: u32) -> Option<&[CollectionItem]> {
        self.entries.get(&first).map(|entry| entry.items.as_slice())
    }

    /// Returns when the entry for `first` was last merged.
    #[must_use]
    pub fn fetched_at(&self, first: u32) -> Option<DateTime<Utc>> {
        self.entries.get(&first).map(|entry| entry.fetched_at)
    }

    /// Returns `true` if nothing has been cached yet.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `incoming` to the entry for `first` and returns the merged list.
    ///
    /// Items whose id is already cached are skipped; the rest keep their
    /// response order after the existing items.
    pub fn merge(&mut self, first: u32, incoming: Vec<CollectionItem>) -> Vec<CollectionItem> {
        let entry = self.entries.entry(first).or_insert_with(|| CacheEntry {
            items: Vec::new(),
            fetched_at: Utc::now(),
        });

        let mut seen: HashSet<String> = entry.items.iter().map(|item| item.id.clone()).collect();
        let before = entry.items.len();
        entry
            .items
            .extend(incoming.into_iter().filter(|item| seen.insert(item.id.clone())));
        entry.fetched_at = Utc::now();

        tracing::debug!(
            first,
            appended = entry.items.len() - before,
            total = entry.items.len(),
            "collection cache merged"
        );
        entry.items.clone()
    }
}
