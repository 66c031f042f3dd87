//! Path finder trait.

use crate::error::Result;
use crate::graph::Node;
use crate::path::Path;
use std::collections::HashSet;

/// Trait for algorithms enumerating paths between two nodes.
pub trait PathFinder<N: Node> {
    /// Find paths from `start_id` to `end_id`.
    fn find_paths(&self, start_id: usize, end_id: usize) -> Result<HashSet<Path<N>>>;
}
