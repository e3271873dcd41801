//! The cluster data store: loading flag plus the current hierarchy.

use crate::cluster::{ClusterId, ClusterNode};
use crate::observable::{Observable, Subscription};

/// Snapshot of the cluster store's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterData {
    /// Whether a fetch/clustering pass is in flight.
    pub loading: bool,
    /// Top-level clusters, in backend order.
    pub clusters: Vec<ClusterNode>,
}

/// Observable store holding the current cluster hierarchy and a loading flag.
///
/// Populated by an external fetch/clustering process; the view layer only
/// observes. Cloning the store produces another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct ClusterStore {
    inner: Observable<ClusterData>,
}

impl ClusterStore {
    /// Create an empty, non-loading store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store is currently loading.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.inner.with(|data| data.loading)
    }

    /// Number of top-level clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.inner.with(|data| data.clusters.len())
    }

    /// Access the current top-level clusters by reference.
    pub fn with_clusters<R>(&self, f: impl FnOnce(&[ClusterNode]) -> R) -> R {
        self.inner.with(|data| f(&data.clusters))
    }

    /// Mark the store as loading (or not). Existing clusters are kept so a
    /// stale hierarchy can stay visible behind a loading indicator if the
    /// host wants that.
    pub fn set_loading(&self, loading: bool) {
        self.inner.update(|data| data.loading = loading);
    }

    /// Replace the hierarchy with freshly fetched clusters and clear the
    /// loading flag.
    pub fn set_clusters(&self, clusters: Vec<ClusterNode>) {
        tracing::debug!(clusters = clusters.len(), "cluster_store.set_clusters");
        self.inner.update(|data| {
            data.loading = false;
            data.clusters = clusters;
        });
    }

    /// Find a cluster anywhere in the hierarchy by id.
    ///
    /// Ids are assumed unique across the hierarchy; if duplicates sneak in,
    /// the first match in document order wins.
    #[must_use]
    pub fn find(&self, id: ClusterId) -> Option<ClusterNode> {
        self.inner
            .with(|data| data.clusters.iter().find_map(|c| c.find(id)).cloned())
    }

    /// Subscribe to store changes.
    pub fn subscribe(&self, callback: impl Fn(&ClusterData) + 'static) -> Subscription {
        self.inner.subscribe(callback)
    }

    /// Current change version, for dirty-checking render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version()
    }
}
