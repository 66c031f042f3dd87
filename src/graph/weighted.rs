//! Undirected weighted graph backed by petgraph.

use super::{Edge, Graph, Node};
use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Undirected graph with non-negative edge weights, addressed by node id.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    inner: UnGraph<N, f64>,
    index: HashMap<usize, NodeIndex>,
}

impl<N: Node> WeightedGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            inner: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Build a graph from nodes and `(a, b, weight)` triples.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Add a node. Ids must be unique.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        let id = node.id();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateNode { id });
        }
        let idx = self.inner.add_node(node);
        self.index.insert(id, idx);
        Ok(())
    }

    /// Connect two nodes. Re-adding an existing edge replaces its weight.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidParameter {
                name: "weight",
                message: "must be finite and non-negative",
            });
        }
        if a == b {
            return Err(Error::InvalidParameter {
                name: "edge",
                message: "self-loops are not allowed",
            });
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let _ = self.inner.update_edge(ia, ib, weight);
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Borrow the underlying petgraph graph.
    pub fn as_petgraph(&self) -> &UnGraph<N, f64> {
        &self.inner
    }

    fn index_of(&self, id: usize) -> Result<NodeIndex> {
        self.index.get(&id).copied().ok_or(Error::UnknownNode { id })
    }
}

impl<N: Node> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Graph for WeightedGraph<N> {
    type Node = N;

    fn node(&self, id: usize) -> Option<&N> {
        self.index.get(&id).map(|&idx| &self.inner[idx])
    }

    fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.inner.node_indices().map(move |idx| &self.inner[idx])
    }

    fn connecting_edge(&self, from: &N, to: &N) -> Option<Edge<N>> {
        let a = *self.index.get(&from.id())?;
        let b = *self.index.get(&to.id())?;
        let edge = self.inner.find_edge(a, b)?;
        let weight = *self.inner.edge_weight(edge)?;
        Some(Edge::new(from.clone(), to.clone(), weight))
    }
}
