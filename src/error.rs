use core::fmt;

/// Result alias for `detour`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by path construction and path finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The query endpoints share no direct edge.
    DisconnectedEndpoints {
        /// Requested start id.
        start: usize,
        /// Requested end id.
        end: usize,
    },

    /// No node with this id exists in the graph.
    UnknownNode {
        /// Missing id.
        id: usize,
    },

    /// A node with this id was already added.
    DuplicateNode {
        /// Offending id.
        id: usize,
    },

    /// An edge does not start where the path currently ends.
    ///
    /// This is a defect in path construction, not bad user input.
    BrokenChain {
        /// Id of the path's terminal node.
        expected: usize,
        /// Origin id of the rejected edge (`None` for a root edge).
        found: Option<usize>,
    },

    /// The graph stopped reporting an edge the search had already relied on.
    ///
    /// Points at an inconsistent [`Graph`](crate::graph::Graph) implementation
    /// (for example an asymmetric `connecting_edge`), not at the query.
    MissingEdge {
        /// Origin id of the expected edge.
        from: usize,
        /// Destination id of the expected edge.
        to: usize,
    },

    /// A path filter returned more paths than it was allowed to.
    FilterContract {
        /// Number of paths the filter returned.
        returned: usize,
        /// The cap it was given.
        max_paths: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DisconnectedEndpoints { start, end } => {
                write!(f, "nodes {start} and {end} are not directly connected")
            }
            Error::UnknownNode { id } => write!(f, "unknown node id {id}"),
            Error::DuplicateNode { id } => write!(f, "node id {id} already present"),
            Error::BrokenChain { expected, found } => match found {
                Some(origin) => write!(
                    f,
                    "edge starts at node {origin} but path ends at node {expected}"
                ),
                None => write!(f, "root edge cannot extend a path ending at node {expected}"),
            },
            Error::MissingEdge { from, to } => {
                write!(f, "graph lost the edge from node {from} to node {to} during search")
            }
            Error::FilterContract {
                returned,
                max_paths,
            } => write!(
                f,
                "path filter returned {returned} paths, cap is {max_paths}"
            ),
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
