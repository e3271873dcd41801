//! The cluster selection store.

use crate::cluster::{ClusterId, ClusterNode};
use crate::observable::{Observable, Subscription};
use ahash::AHashSet;

/// Observable store tracking which clusters are currently selected.
///
/// Selection accumulates as a set: toggling one cluster never affects
/// another (multi-select). The store is the sole authority on selection
/// state; views call [`toggle_selection`](Self::toggle_selection) and treat
/// it as fire-and-forget, reading the result back on the next render.
#[derive(Debug, Clone, Default)]
pub struct ClusterSelectionStore {
    inner: Observable<AHashSet<ClusterId>>,
}

impl ClusterSelectionStore {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given cluster is currently selected.
    #[must_use]
    pub fn is_selected(&self, cluster: &ClusterNode) -> bool {
        self.is_selected_id(cluster.id())
    }

    /// Whether the cluster with the given id is currently selected.
    #[must_use]
    pub fn is_selected_id(&self, id: ClusterId) -> bool {
        self.inner.with(|set| set.contains(&id))
    }

    /// Toggle the given cluster's selection state.
    pub fn toggle_selection(&self, cluster: &ClusterNode) {
        self.toggle_id(cluster.id());
    }

    /// Toggle selection state by id.
    pub fn toggle_id(&self, id: ClusterId) {
        let mut selected = false;
        self.inner.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
                selected = true;
            }
        });
        tracing::debug!(cluster_id = id.0, selected, "selection.toggle");
    }

    /// Number of selected clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.with(|set| set.len())
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.with(|set| set.is_empty())
    }

    /// Deselect everything.
    pub fn clear(&self) {
        self.inner.update(|set| set.clear());
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&self, callback: impl Fn(&AHashSet<ClusterId>) + 'static) -> Subscription {
        self.inner.subscribe(callback)
    }

    /// Current change version, for dirty-checking render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn node(id: u64) -> ClusterNode {
        ClusterNode::new(ClusterId(id), 1).label("n")
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let store = ClusterSelectionStore::new();
        let a = node(1);

        store.toggle_selection(&a);
        assert!(store.is_selected(&a));
        assert_eq!(store.len(), 1);

        store.toggle_selection(&a);
        assert!(!store.is_selected(&a));
        assert!(store.is_empty());
    }

    #[test]
    fn selection_accumulates_across_clusters() {
        let store = ClusterSelectionStore::new();
        let (a, b) = (node(1), node(2));

        store.toggle_selection(&a);
        store.toggle_selection(&b);
        assert!(store.is_selected(&a));
        assert!(store.is_selected(&b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_deselects_everything() {
        let store = ClusterSelectionStore::new();
        store.toggle_id(ClusterId(1));
        store.toggle_id(ClusterId(2));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn every_toggle_notifies() {
        let store = ClusterSelectionStore::new();
        let calls = Rc::new(Cell::new(0usize));
        let calls_in = Rc::clone(&calls);
        let _sub = store.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        store.toggle_id(ClusterId(1));
        store.toggle_id(ClusterId(1));
        assert_eq!(calls.get(), 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn clear_on_empty_is_silent() {
        let store = ClusterSelectionStore::new();
        let calls = Rc::new(Cell::new(0usize));
        let calls_in = Rc::clone(&calls);
        let _sub = store.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        store.clear();
        assert_eq!(calls.get(), 0);
    }
}
