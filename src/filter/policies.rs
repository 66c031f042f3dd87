//! Built-in path filters.

use super::traits::PathFilter;
use crate::graph::Node;
use crate::path::Path;
use rand::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sort candidates with `cmp` and keep the first `max_paths`.
///
/// Node-id sequence breaks remaining ties so the outcome does not depend on
/// hash iteration order.
fn keep_best<N, F>(candidates: HashSet<Path<N>>, max_paths: usize, cmp: F) -> HashSet<Path<N>>
where
    N: Node,
    F: Fn(&Path<N>, &Path<N>) -> Ordering,
{
    if candidates.len() <= max_paths {
        return candidates;
    }
    let mut ranked: Vec<(Vec<usize>, Path<N>)> =
        candidates.into_iter().map(|p| (p.node_ids(), p)).collect();
    ranked.sort_by(|(ids_a, a), (ids_b, b)| cmp(a, b).then_with(|| ids_a.cmp(ids_b)));
    ranked.into_iter().take(max_paths).map(|(_, p)| p).collect()
}

/// Keep the lightest paths; fewer hops wins a weight tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightestPaths;

impl LightestPaths {
    /// Create the filter.
    pub fn new() -> Self {
        Self
    }
}

impl<N: Node> PathFilter<N> for LightestPaths {
    fn select(&self, candidates: HashSet<Path<N>>, max_paths: usize) -> HashSet<Path<N>> {
        keep_best(candidates, max_paths, |a, b| {
            a.total_weight()
                .total_cmp(&b.total_weight())
                .then_with(|| a.hops().cmp(&b.hops()))
        })
    }
}

/// Keep the paths covering the most units; lighter wins a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidestCoverage;

impl WidestCoverage {
    /// Create the filter.
    pub fn new() -> Self {
        Self
    }
}

impl<N: Node> PathFilter<N> for WidestCoverage {
    fn select(&self, candidates: HashSet<Path<N>>, max_paths: usize) -> HashSet<Path<N>> {
        keep_best(candidates, max_paths, |a, b| {
            b.total_nodes()
                .cmp(&a.total_nodes())
                .then_with(|| a.total_weight().total_cmp(&b.total_weight()))
        })
    }
}

/// Keep a uniform random subset.
#[derive(Debug, Clone, Default)]
pub struct RandomSample {
    /// Random seed.
    seed: Option<u64>,
}

impl RandomSample {
    /// Create an unseeded sampler.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<N: Node> PathFilter<N> for RandomSample {
    fn select(&self, candidates: HashSet<Path<N>>, max_paths: usize) -> HashSet<Path<N>> {
        if candidates.len() <= max_paths {
            return candidates;
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        // Fixed starting order so a seed reproduces the same sample.
        let mut pool: Vec<(Vec<usize>, Path<N>)> =
            candidates.into_iter().map(|p| (p.node_ids(), p)).collect();
        pool.sort_by(|(a, _), (b, _)| a.cmp(b));
        pool.shuffle(&mut rng);
        pool.into_iter().take(max_paths).map(|(_, p)| p).collect()
    }
}

/// Adapter turning a closure into a [`PathFilter`].
///
/// ```rust
/// use detour::filter::{FilterFn, PathFilter};
/// use detour::graph::PlainNode;
/// use detour::Path;
/// use std::collections::HashSet;
///
/// let direct_only = FilterFn::new(|paths: HashSet<Path<PlainNode>>, max: usize| -> HashSet<Path<PlainNode>> {
///     paths.into_iter().filter(|p| p.hops() == 1).take(max).collect()
/// });
/// let kept = direct_only.select(HashSet::from([Path::trivial(PlainNode::new(0))]), 3);
/// assert!(kept.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilterFn<F> {
    f: F,
}

impl<F> FilterFn<F> {
    /// Wrap a selection closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<N, F> PathFilter<N> for FilterFn<F>
where
    N: Node,
    F: Fn(HashSet<Path<N>>, usize) -> HashSet<Path<N>>,
{
    fn select(&self, candidates: HashSet<Path<N>>, max_paths: usize) -> HashSet<Path<N>> {
        (self.f)(candidates, max_paths)
    }
}
