//! Node and graph capability traits.

use super::Edge;

/// A graph vertex with a stable integer identity.
pub trait Node: Clone {
    /// Unique id of this node within its graph.
    fn id(&self) -> usize;

    /// Number of underlying units this node aggregates.
    ///
    /// `None` marks a plain node.
    fn hierarchical_size(&self) -> Option<usize> {
        None
    }

    /// Whether this node exposes a hierarchical size.
    fn is_hierarchical(&self) -> bool {
        self.hierarchical_size().is_some()
    }

    /// Units covered by this node (1 for plain nodes).
    fn size(&self) -> usize {
        self.hierarchical_size().unwrap_or(1)
    }
}

/// Read-only graph access needed by the path finder.
pub trait Graph {
    /// Node type stored in the graph.
    type Node: Node;

    /// Look up a node by id.
    fn node(&self, id: usize) -> Option<&Self::Node>;

    /// Iterate over every node.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_;

    /// Edge joining `from` and `to`, oriented `from -> to`.
    ///
    /// Adjacency is symmetric: if `connecting_edge(a, b)` is `Some`, so is
    /// `connecting_edge(b, a)` with the same weight.
    fn connecting_edge(&self, from: &Self::Node, to: &Self::Node) -> Option<Edge<Self::Node>>;
}
