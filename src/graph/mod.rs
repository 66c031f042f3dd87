//! Graph capabilities consumed by the path finder.
//!
//! The finder never owns graph storage. It talks to it through two small
//! capabilities:
//!
//! - [`Node`]: an integer identity plus an optional hierarchical size
//! - [`Graph`]: id lookup, node iteration, and pairwise connecting-edge lookup
//!
//! ## Hierarchical Nodes
//!
//! A hierarchical node stands for an aggregate of underlying units (a district
//! made of blocks, a cluster made of points). Paths over hierarchical nodes
//! count covered units instead of hops:
//!
//! ```text
//! plain:        0 ── 1 ── 2        total nodes = 3
//! hierarchical: A(4) ── B(2) ── C(5)   total nodes = 11
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use detour::graph::{Graph, Node, PlainNode, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_node(PlainNode::new(0)).unwrap();
//! graph.add_node(PlainNode::new(1)).unwrap();
//! graph.add_edge(0, 1, 2.5).unwrap();
//!
//! let a = graph.node(0).unwrap();
//! let b = graph.node(1).unwrap();
//! let edge = graph.connecting_edge(b, a).unwrap();
//! assert_eq!(edge.destination().id(), 0);
//! ```

mod edge;
mod nodes;
mod traits;
mod weighted;

pub use edge::Edge;
pub use nodes::{HierarchicalNode, PlainNode};
pub use traits::{Graph, Node};
pub use weighted::WeightedGraph;
