//! Weighted walks with cached aggregates.
//!
//! A [`Path`] is an ordered edge sequence. The first edge is always a root
//! edge (no origin) whose destination is the start node, so a path from `a`
//! to `c` through `b` is stored as:
//!
//! ```text
//! [* -> a] [a -> b] [b -> c]
//! ```
//!
//! Three aggregates are cached next to the edges:
//!
//! - `used_ids`: destination ids of every edge (start included)
//! - `total_weight`: sum of edge weights
//! - `total_nodes`: covered units (hop count for plain paths, summed
//!   hierarchical sizes otherwise)
//!
//! Identity is the edge sequence alone. Two paths built along different
//! routes but ending up with the same hops compare equal and hash alike,
//! which is what lets result sets deduplicate merged paths.

use crate::error::{Error, Result};
use crate::graph::{Edge, Node};
use core::fmt;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// An ordered walk through a graph.
#[derive(Debug, Clone)]
pub struct Path<N> {
    edges: Vec<Edge<N>>,
    used_ids: HashSet<usize>,
    total_weight: f64,
    total_nodes: usize,
}

impl<N: Node> Path<N> {
    /// Path consisting of `node` alone.
    pub fn trivial(node: N) -> Self {
        let mut used_ids = HashSet::new();
        used_ids.insert(node.id());
        let total_nodes = node.size();
        Self {
            edges: vec![Edge::root(node)],
            used_ids,
            total_weight: 0.0,
            total_nodes,
        }
    }

    /// Append `edge`, which must start at the current end node.
    pub fn extend_with(&mut self, edge: Edge<N>) -> Result<&mut Self> {
        let expected = self.end().id();
        let found = edge.origin().map(Node::id);
        if found != Some(expected) {
            return Err(Error::BrokenChain { expected, found });
        }

        let destination = edge.destination();
        self.used_ids.insert(destination.id());
        self.total_weight += edge.weight();
        self.total_nodes += destination.size();
        self.edges.push(edge);
        Ok(self)
    }

    /// Consuming form of [`Path::extend_with`].
    pub fn extended(mut self, edge: Edge<N>) -> Result<Self> {
        self.extend_with(edge)?;
        Ok(self)
    }

    /// Splice two paths at a bridge edge.
    ///
    /// The result is `a.edges[..=break_a]`, then `bridge`, then
    /// `b.edges[break_b + 1..]`. Aggregates are recomputed from the new edge
    /// sequence rather than carried over from either source.
    ///
    /// Whether `total_nodes` sums hierarchical sizes or counts edges is
    /// decided by the first edge's destination only, and that choice is
    /// applied to the whole sequence.
    pub fn merge(
        a: &Self,
        b: &Self,
        break_a: usize,
        break_b: usize,
        bridge: Edge<N>,
    ) -> Result<Self> {
        if break_a >= a.edges.len() {
            return Err(Error::InvalidParameter {
                name: "break_a",
                message: "break index past the end of the first path",
            });
        }
        if break_b >= b.edges.len() {
            return Err(Error::InvalidParameter {
                name: "break_b",
                message: "break index past the end of the second path",
            });
        }

        let mut edges = Vec::with_capacity(break_a + 2 + (b.edges.len() - break_b - 1));
        edges.extend_from_slice(&a.edges[..=break_a]);
        edges.push(bridge);
        edges.extend_from_slice(&b.edges[break_b + 1..]);

        let used_ids = edges.iter().map(|e| e.destination().id()).collect();
        let total_weight = edges.iter().map(Edge::weight).sum();
        let total_nodes = if edges[0].destination().is_hierarchical() {
            edges.iter().map(|e| e.destination().size()).sum()
        } else {
            edges.len()
        };

        Ok(Self {
            edges,
            used_ids,
            total_weight,
            total_nodes,
        })
    }

    /// Edge sequence, root edge first.
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Ids of every node the path visits.
    pub fn used_ids(&self) -> &HashSet<usize> {
        &self.used_ids
    }

    /// Sum of edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Units covered by the path.
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// First node.
    pub fn start(&self) -> &N {
        self.edges[0].destination()
    }

    /// Last node.
    pub fn end(&self) -> &N {
        // Never empty: construction always pushes the root edge.
        self.edges[self.edges.len() - 1].destination()
    }

    /// Number of real hops (root edge excluded).
    pub fn hops(&self) -> usize {
        self.edges.len() - 1
    }

    /// Whether the path is a single node.
    pub fn is_trivial(&self) -> bool {
        self.hops() == 0
    }

    /// Visited node ids in walk order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.destination().id()).collect()
    }

    /// Whether the path visits node `id`.
    pub fn contains(&self, id: usize) -> bool {
        self.used_ids.contains(&id)
    }

    /// Check that every edge starts where the previous one ends.
    pub fn validate(&self) -> Result<()> {
        let first = &self.edges[0];
        if !first.is_root() {
            return Err(Error::BrokenChain {
                expected: first.destination().id(),
                found: first.origin().map(Node::id),
            });
        }
        for pair in self.edges.windows(2) {
            let expected = pair[0].destination().id();
            let found = pair[1].origin().map(Node::id);
            if found != Some(expected) {
                return Err(Error::BrokenChain { expected, found });
            }
        }
        Ok(())
    }
}

impl<N: Node> PartialEq for Path<N> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<N: Node> Eq for Path<N> {}

impl<N: Node> Hash for Path<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.hash(state);
    }
}

impl<N: Node> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", edge.destination().id())?;
        }
        write!(
            f,
            " (nodes: {}, weight: {})",
            self.total_nodes, self.total_weight
        )
    }
}
