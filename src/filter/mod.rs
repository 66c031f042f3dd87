//! Ranking policies that cap a candidate path set.
//!
//! The finder calls its filter at every recursion level, so a policy decides
//! not only which paths reach the caller but which partial routes survive to
//! be merged further up. The contract is a single inequality:
//!
//! ```text
//! |select(candidates, max_paths)| <= max_paths
//! ```
//!
//! A policy that breaks it makes the query fail with
//! [`Error::FilterContract`](crate::Error::FilterContract).
//!
//! ## Policies
//!
//! | Policy | Keeps |
//! |--------|-------|
//! | [`LightestPaths`] | lowest total weight |
//! | [`WidestCoverage`] | most covered units, lighter first on ties |
//! | [`RandomSample`] | uniform sample, optionally seeded |
//! | [`FilterFn`] | whatever a closure returns |

mod policies;
mod traits;

pub use policies::{FilterFn, LightestPaths, RandomSample, WidestCoverage};
pub use traits::PathFilter;
