//! Ready-made node types.

use super::Node;

/// A node counted as a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlainNode {
    id: usize,
}

impl PlainNode {
    /// Create a plain node.
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl Node for PlainNode {
    fn id(&self) -> usize {
        self.id
    }
}

/// A node aggregating `size` underlying units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HierarchicalNode {
    id: usize,
    size: usize,
}

impl HierarchicalNode {
    /// Create a hierarchical node.
    pub fn new(id: usize, size: usize) -> Self {
        Self { id, size }
    }
}

impl Node for HierarchicalNode {
    fn id(&self) -> usize {
        self.id
    }

    fn hierarchical_size(&self) -> Option<usize> {
        Some(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_size_defaults_to_one() {
        let node = PlainNode::new(9);
        assert!(!node.is_hierarchical());
        assert_eq!(node.size(), 1);
    }

    #[test]
    fn test_hierarchical_size() {
        let node = HierarchicalNode::new(2, 12);
        assert!(node.is_hierarchical());
        assert_eq!(node.size(), 12);
        assert_eq!(node.id(), 2);
    }
}
