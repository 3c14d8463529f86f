//! Collection source state.
//!
//! [`CollectionStore`] tracks the `{items, loading, error}` triple the list
//! view renders, plus the id of the request currently in flight. Responses for
//! any other request id are dropped.

use crate::domain::CollectionItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCollection {
    pub request_id: u64,
    pub first: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    items: Vec<CollectionItem>,
    loading: bool,
    error: Option<String>,
    first: u32,
    pending: Option<PendingCollection>,
    next_request_id: u64,
}

impl CollectionStore {
    #[must_use]
    pub fn new(first: u32) -> Self {
        Self {
            first,
            ..Self::default()
        }
    }

    /// Starts a fetch of `first` items and returns the request to issue.
    ///
    /// Items are cleared until the response lands, and any earlier pending
    /// request is superseded.
    pub fn begin(&mut self, first: u32) -> PendingCollection {
        self.next_request_id += 1;
        let pending = PendingCollection {
            request_id: self.next_request_id,
            first,
        };
        self.first = first;
        self.items.clear();
        self.loading = true;
        self.error = None;
        self.pending = Some(pending.clone());
        tracing::debug!(request_id = pending.request_id, first, "collection fetch started");
        pending
    }

    fn take_if_current(&mut self, request_id: u64) -> bool {
        if self.pending.as_ref().map(|p| p.request_id) == Some(request_id) {
            self.pending = None;
            self.loading = false;
            true
        } else {
            tracing::debug!(request_id, "dropping stale collection response");
            false
        }
    }

    /// Applies a successful response. Returns `false` if it was stale.
    pub fn apply_loaded(&mut self, request_id: u64, items: Vec<CollectionItem>) -> bool {
        if !self.take_if_current(request_id) {
            return false;
        }
        self.items = items;
        true
    }

    /// Applies a failed response. Returns `false` if it was stale.
    pub fn apply_failed(&mut self, request_id: u64, message: String) -> bool {
        if !self.take_if_current(request_id) {
            return false;
        }
        self.items.clear();
        self.error = Some(message);
        true
    }

    /// The items fetched so far; empty while loading or after an error.
    #[must_use]
    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The `first` argument of the latest fetch.
    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingCollection> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<CollectionItem> {
        (1..=n)
            .map(|i| CollectionItem::new(i.to_string(), format!("p{i}"), i.to_string(), &[]))
            .collect()
    }

    #[test]
    fn begin_clears_items_and_marks_loading() {
        let mut store = CollectionStore::new(10);
        let req = store.begin(10);
        assert!(store.apply_loaded(req.request_id, items(3)));
        assert_eq!(store.items().len(), 3);

        store.begin(20);
        assert!(store.is_loading());
        assert!(store.items().is_empty());
        assert_eq!(store.first(), 20);
    }

    #[test]
    fn superseded_responses_are_dropped() {
        let mut store = CollectionStore::new(10);
        let old = store.begin(10);
        let new = store.begin(110);
        assert!(!store.apply_loaded(old.request_id, items(10)));
        assert!(store.is_loading());
        assert!(store.apply_loaded(new.request_id, items(2)));
        assert_eq!(store.items().len(), 2);
        assert!(store.pending().is_none());
    }

    #[test]
    fn failure_leaves_items_empty() {
        let mut store = CollectionStore::new(10);
        let req = store.begin(10);
        assert!(store.apply_failed(req.request_id, "offline".into()));
        assert!(store.items().is_empty());
        assert_eq!(store.error(), Some("offline"));
        assert!(!store.is_loading());
    }
}
