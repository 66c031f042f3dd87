//! Weighted directed edge.

use super::Node;
use core::fmt;
use std::hash::{Hash, Hasher};

/// A weighted hop from `origin` to `destination`.
///
/// The root edge has no origin; it anchors the first node of a path.
/// Identity is the `(origin id, destination id)` pair. Weight is not part of
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct Edge<N> {
    origin: Option<N>,
    destination: N,
    weight: f64,
}

impl<N: Node> Edge<N> {
    /// Create an edge between two nodes.
    pub fn new(origin: N, destination: N, weight: f64) -> Self {
        Self {
            origin: Some(origin),
            destination,
            weight,
        }
    }

    /// Create the zero-weight root edge for `node`.
    pub fn root(node: N) -> Self {
        Self {
            origin: None,
            destination: node,
            weight: 0.0,
        }
    }

    /// Origin node, `None` for the root edge.
    pub fn origin(&self) -> Option<&N> {
        self.origin.as_ref()
    }

    /// Destination node.
    pub fn destination(&self) -> &N {
        &self.destination
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether this is a root edge.
    pub fn is_root(&self) -> bool {
        self.origin.is_none()
    }

    /// Same edge traversed the other way. The root edge is returned unchanged.
    pub fn reversed(&self) -> Self {
        match &self.origin {
            Some(origin) => Self::new(self.destination.clone(), origin.clone(), self.weight),
            None => self.clone(),
        }
    }

    fn key(&self) -> (Option<usize>, usize) {
        (self.origin.as_ref().map(Node::id), self.destination.id())
    }
}

impl<N: Node> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<N: Node> Eq for Edge<N> {}

impl<N: Node> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<N: Node> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(
                f,
                "{} -> {} ({})",
                origin.id(),
                self.destination.id(),
                self.weight
            ),
            None => write!(f, "* -> {}", self.destination.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PlainNode;

    #[test]
    fn test_identity_ignores_weight() {
        let a = Edge::new(PlainNode::new(0), PlainNode::new(1), 3.0);
        let b = Edge::new(PlainNode::new(0), PlainNode::new(1), 7.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_direction_matters() {
        let a = Edge::new(PlainNode::new(0), PlainNode::new(1), 3.0);
        assert_ne!(a, a.reversed());
        assert_eq!(a.reversed().origin().map(Node::id), Some(1));
    }

    #[test]
    fn test_root_edge() {
        let root = Edge::root(PlainNode::new(4));
        assert!(root.is_root());
        assert_eq!(root.weight(), 0.0);
        assert_ne!(root, Edge::new(PlainNode::new(4), PlainNode::new(4), 0.0));
        assert_eq!(root.to_string(), "* -> 4");
    }
}
