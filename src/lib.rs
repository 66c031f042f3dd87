//! # detour
//!
//! Enumerate alternative weighted routes between two adjacent graph nodes.
//!
//! An alternative route replaces the direct edge A–B with a detour through
//! intermediates that stay within a bounded stretch of the direct distance.
//! Routes are built recursively by splitting at admissible intermediates,
//! splicing the sub-routes, and capping each level with a pluggable
//! [`PathFilter`].
//!
//! Graph storage, node types and ranking policy are supplied by the caller
//! through the [`graph::Graph`], [`graph::Node`] and [`PathFilter`] traits.
//! [`graph::WeightedGraph`] and the policies in [`filter`] cover the common
//! cases.

/// Error types used across `detour`.
pub mod error;
pub mod filter;
pub mod finder;
pub mod graph;
pub mod path;


pub use error::{Error, Result};
pub use filter::{LightestPaths, PathFilter, RandomSample, WidestCoverage};
pub use finder::{PathFinder, SumPathFinder};
pub use graph::{Edge, Graph, HierarchicalNode, Node, PlainNode, WeightedGraph};
pub use path::Path;
