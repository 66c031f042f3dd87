//! Path filter trait.

use crate::graph::Node;
use crate::path::Path;
use std::collections::HashSet;

/// Strategy reducing a set of candidate paths to at most `max_paths`.
pub trait PathFilter<N: Node> {
    /// Select the paths to keep.
    ///
    /// Must return no more than `max_paths` entries.
    fn select(&self, candidates: HashSet<Path<N>>, max_paths: usize) -> HashSet<Path<N>>;
}
