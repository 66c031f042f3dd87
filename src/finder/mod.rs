//! Detour-constrained alternative path enumeration.
//!
//! Given two directly connected nodes A and B, an *alternative* route goes
//! through an intermediate C that is adjacent to both and not much further
//! away than the direct edge:
//!
//! ```text
//!          C
//!     d_a /  \ d_b
//!        /    \
//!       A──────B
//!         d_ab
//! ```
//!
//! ## Admissibility
//!
//! C is admissible when the triangle exists and
//!
//! ```text
//! d_b <= min( d_ab - k*d_a,  (d_ab - d_a)/k,  detour*d_ab - d_a )
//! ```
//!
//! - **k** skews how the two legs may share the budget
//! - **detour** caps `d_a + d_b` relative to `d_ab` (default `2/(k+1)`,
//!   where the three bounds meet)
//!
//! ## Recursion
//!
//! For every admissible C the problem splits into `(A, C)` and `(C, B)`,
//! both solved recursively with C added to the exclusion set. Every route
//! reaching C is spliced with every route leaving it, and the union is
//! capped by the configured [`PathFilter`](crate::filter::PathFilter) before
//! returning to the caller. Capping at every level is the only brake on the
//! combinatorial growth in dense graphs.
//!
//! ## Usage
//!
//! ```rust
//! use detour::filter::LightestPaths;
//! use detour::graph::{PlainNode, WeightedGraph};
//! use detour::{PathFinder, SumPathFinder};
//!
//! let graph = WeightedGraph::from_parts(
//!     (0..3).map(PlainNode::new),
//!     [(0, 1, 5.0), (1, 2, 5.0), (0, 2, 11.0)],
//! )
//! .unwrap();
//!
//! let finder = SumPathFinder::new(&graph, 1.0, 10, LightestPaths::new());
//! let paths = finder.find_paths(0, 2).unwrap();
//! assert_eq!(paths.len(), 2);
//! ```

mod exclusion;
mod sum;
mod traits;

pub use sum::SumPathFinder;
pub use traits::PathFinder;
