//! The cluster hierarchy node.

/// Identifier for a cluster node.
///
/// The view layer uses it as render identity and as mouse hit data, and the
/// selection store keys on it alone, so ids are expected to be unique across
/// the whole hierarchy (not just among siblings). On a collision, id lookups
/// return the first match in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClusterId(pub u64);

/// A node in the cluster hierarchy.
///
/// `labels` are the human-readable phrases describing the cluster; on child
/// nodes the backend calls the same field `phrases`, so the serde decoder
/// accepts either name. `size` is the document count attributed to the node
/// and its descendants. A node with no `clusters` entries is a leaf; an
/// absent child sequence decodes as empty, so "no children" is a single
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterNode {
    id: ClusterId,
    #[cfg_attr(feature = "serde", serde(default, alias = "phrases"))]
    labels: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    size: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    clusters: Vec<ClusterNode>,
}

impl ClusterNode {
    /// Create a new cluster node with the given identity and document count.
    #[must_use]
    pub fn new(id: ClusterId, size: u32) -> Self {
        Self {
            id,
            labels: Vec::new(),
            size,
            clusters: Vec::new(),
        }
    }

    /// Add a label phrase.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Set all label phrases.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Add a sub-cluster.
    #[must_use]
    pub fn child(mut self, node: ClusterNode) -> Self {
        self.clusters.push(node);
        self
    }

    /// Set all sub-clusters.
    #[must_use]
    pub fn with_subclusters(mut self, nodes: Vec<ClusterNode>) -> Self {
        self.clusters = nodes;
        self
    }

    /// The node's identity.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ClusterId {
        self.id
    }

    /// The label phrases.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Document count attributed to this node and its descendants.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// The sub-clusters, in order.
    #[must_use]
    pub fn subclusters(&self) -> &[ClusterNode] {
        &self.clusters
    }

    /// Number of direct sub-clusters.
    #[inline]
    #[must_use]
    pub fn subcluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Whether this node has one or more sub-clusters.
    #[inline]
    #[must_use]
    pub fn has_subclusters(&self) -> bool {
        self.subcluster_count() > 0
    }

    /// All labels joined with `", "`.
    #[must_use]
    pub fn joined_labels(&self) -> String {
        self.labels.join(", ")
    }

    /// Find this node or a descendant by id.
    #[must_use]
    pub fn find(&self, id: ClusterId) -> Option<&ClusterNode> {
        if self.id == id {
            return Some(self);
        }
        self.clusters.iter().find_map(|child| child.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClusterNode {
        ClusterNode::new(ClusterId(1), 42)
            .label("wine")
            .label("red")
            .child(ClusterNode::new(ClusterId(2), 7).label("merlot"))
            .child(ClusterNode::new(ClusterId(3), 5).label("syrah"))
    }

    #[test]
    fn joined_labels_uses_comma_space() {
        assert_eq!(sample().joined_labels(), "wine, red");
    }

    #[test]
    fn leaf_has_no_subclusters() {
        let leaf = ClusterNode::new(ClusterId(9), 0);
        assert!(!leaf.has_subclusters());
        assert_eq!(leaf.subcluster_count(), 0);
        assert_eq!(leaf.joined_labels(), "");
    }

    #[test]
    fn subcluster_count_and_order() {
        let node = sample();
        assert!(node.has_subclusters());
        assert_eq!(node.subcluster_count(), 2);
        assert_eq!(node.subclusters()[0].id(), ClusterId(2));
        assert_eq!(node.subclusters()[1].id(), ClusterId(3));
    }

    #[test]
    fn find_descends_the_hierarchy() {
        let node = sample();
        assert_eq!(node.find(ClusterId(1)).map(ClusterNode::id), Some(ClusterId(1)));
        assert_eq!(node.find(ClusterId(3)).map(ClusterNode::size), Some(5));
        assert!(node.find(ClusterId(99)).is_none());
    }

    #[cfg(feature = "serde")]
    mod serde_shape {
        use super::*;

        #[test]
        fn decodes_phrases_alias_and_absent_children() {
            let json = r#"{
                "id": 10,
                "labels": ["wine"],
                "size": 42,
                "clusters": [
                    { "id": 11, "phrases": ["merlot", "red"], "size": 7 }
                ]
            }"#;
            let node: ClusterNode = serde_json::from_str(json).unwrap();
            assert_eq!(node.id(), ClusterId(10));
            let sub = &node.subclusters()[0];
            assert_eq!(sub.joined_labels(), "merlot, red");
            assert_eq!(sub.size(), 7);
            assert!(!sub.has_subclusters());
        }
    }
}
