//! Recursive sum-of-legs path finder.

use super::exclusion::Excluded;
use super::traits::PathFinder;
use crate::error::{Error, Result};
use crate::filter::PathFilter;
use crate::graph::{Graph, Node};
use crate::path::Path;
use std::collections::HashSet;
use tracing::{debug, error, trace};

/// Enumerates detour routes between adjacent nodes.
///
/// See the [module docs](super) for the admissibility rule.
#[derive(Debug, Clone)]
pub struct SumPathFinder<'g, G, F> {
    graph: &'g G,
    /// Leg asymmetry factor.
    k_param: f64,
    /// Cap on `d_a + d_b` relative to `d_ab`.
    detour: f64,
    /// Result cap applied at every recursion level.
    max_paths: usize,
    filter: F,
}

impl<'g, G, F> SumPathFinder<'g, G, F>
where
    G: Graph,
    F: PathFilter<G::Node>,
{
    /// Create a finder with the default detour `2 / (k_param + 1)`.
    pub fn new(graph: &'g G, k_param: f64, max_paths: usize, filter: F) -> Self {
        Self {
            graph,
            k_param,
            detour: 2.0 / (k_param + 1.0),
            max_paths,
            filter,
        }
    }

    /// Set an explicit detour cap.
    pub fn with_detour(mut self, detour: f64) -> Self {
        self.detour = detour;
        self
    }

    /// Leg asymmetry factor.
    pub fn k_param(&self) -> f64 {
        self.k_param
    }

    /// Detour cap.
    pub fn detour(&self) -> f64 {
        self.detour
    }

    /// Result cap.
    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    fn validate(&self) -> Result<()> {
        if !self.k_param.is_finite() || self.k_param <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "k_param",
                message: "must be finite and positive",
            });
        }
        if !self.detour.is_finite() || self.detour <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "detour",
                message: "must be finite and positive",
            });
        }
        if self.max_paths == 0 {
            return Err(Error::InvalidParameter {
                name: "max_paths",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Leg-length test for a candidate at distance `d_a` from A and `d_b`
    /// from B, with A and B `d_ab` apart.
    fn within_detour(&self, d_a: f64, d_b: f64, d_ab: f64) -> bool {
        // The minimum is the binding bound.
        let max_b = (d_ab - self.k_param * d_a)
            .min((d_ab - d_a) / self.k_param)
            .min(self.detour * d_ab - d_a);
        d_b <= max_b
    }

    /// Whether `candidate` may route traffic between `start` and `end`.
    ///
    /// Requires all three triangle edges to exist.
    pub fn is_admissible(&self, start: &G::Node, end: &G::Node, candidate: &G::Node) -> bool {
        let direct = self.graph.connecting_edge(start, end);
        let leg_a = self.graph.connecting_edge(start, candidate);
        let leg_b = self.graph.connecting_edge(end, candidate);
        match (direct, leg_a, leg_b) {
            (Some(direct), Some(leg_a), Some(leg_b)) => {
                self.within_detour(leg_a.weight(), leg_b.weight(), direct.weight())
            }
            _ => false,
        }
    }

    /// Splice every route into the intermediate with every route out of it.
    fn merge_paths(
        paths_to: &HashSet<Path<G::Node>>,
        paths_from: &HashSet<Path<G::Node>>,
    ) -> Result<HashSet<Path<G::Node>>> {
        let mut merged = HashSet::with_capacity(paths_to.len() * paths_from.len());
        for to in paths_to {
            for from in paths_from {
                // Routes out of the intermediate always have a first hop.
                let bridge = from.edges().get(1).ok_or(Error::BrokenChain {
                    expected: to.end().id(),
                    found: None,
                })?;
                merged.insert(Path::merge(
                    to,
                    from,
                    to.edges().len() - 1,
                    1,
                    bridge.clone(),
                )?);
            }
        }
        Ok(merged)
    }

    fn filter_paths(&self, all: HashSet<Path<G::Node>>) -> Result<HashSet<Path<G::Node>>> {
        let candidates = all.len();
        let kept = self.filter.select(all, self.max_paths);
        if kept.len() > self.max_paths {
            error!(
                returned = kept.len(),
                max_paths = self.max_paths,
                "path filter exceeded its cap"
            );
            return Err(Error::FilterContract {
                returned: kept.len(),
                max_paths: self.max_paths,
            });
        }
        trace!(candidates, kept = kept.len(), "filtered paths");
        Ok(kept)
    }

    fn find_paths_helper(
        &self,
        start: &G::Node,
        end: &G::Node,
        excluded: &mut HashSet<usize>,
    ) -> Result<HashSet<Path<G::Node>>> {
        let direct = self
            .graph
            .connecting_edge(start, end)
            .ok_or(Error::MissingEdge {
                from: start.id(),
                to: end.id(),
            })?;

        let mut all = HashSet::new();
        all.insert(Path::trivial(start.clone()).extended(direct)?);

        let intermediates: Vec<G::Node> = self
            .graph
            .nodes()
            .filter(|n| {
                let id = n.id();
                id != start.id()
                    && id != end.id()
                    && !excluded.contains(&id)
                    && self.is_admissible(start, end, n)
            })
            .cloned()
            .collect();

        for via in &intermediates {
            trace!(
                start = start.id(),
                end = end.id(),
                via = via.id(),
                "expanding intermediate"
            );
            let (paths_to, paths_from) = {
                let mut scoped = Excluded::push(excluded, via.id());
                let paths_to = self.find_paths_helper(start, via, &mut scoped)?;
                let paths_from = self.find_paths_helper(via, end, &mut scoped)?;
                (paths_to, paths_from)
            };
            all.extend(Self::merge_paths(&paths_to, &paths_from)?);
        }

        self.filter_paths(all)
    }
}

impl<G, F> PathFinder<G::Node> for SumPathFinder<'_, G, F>
where
    G: Graph,
    F: PathFilter<G::Node>,
{
    /// Enumerate alternative routes between two directly connected nodes.
    ///
    /// The result always holds at most `max_paths` paths. Endpoints without
    /// a direct edge are rejected before any search happens.
    fn find_paths(&self, start_id: usize, end_id: usize) -> Result<HashSet<Path<G::Node>>> {
        self.validate()?;

        let start = self
            .graph
            .node(start_id)
            .ok_or(Error::UnknownNode { id: start_id })?;
        let end = self
            .graph
            .node(end_id)
            .ok_or(Error::UnknownNode { id: end_id })?;
        if self.graph.connecting_edge(start, end).is_none() {
            return Err(Error::DisconnectedEndpoints {
                start: start_id,
                end: end_id,
            });
        }

        debug!(
            start = start_id,
            end = end_id,
            k_param = self.k_param,
            detour = self.detour,
            max_paths = self.max_paths,
            "finding paths"
        );
        let mut excluded = HashSet::from([start_id, end_id]);
        let paths = self.find_paths_helper(start, end, &mut excluded)?;
        debug!(found = paths.len(), "paths found");
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::LightestPaths;
    use crate::graph::{Edge, PlainNode, WeightedGraph};
    use std::collections::HashMap;

    /// Directed lookup: only the listed orientations exist.
    struct OneWay {
        nodes: Vec<PlainNode>,
        edges: HashMap<(usize, usize), f64>,
    }

    impl Graph for OneWay {
        type Node = PlainNode;

        fn node(&self, id: usize) -> Option<&PlainNode> {
            self.nodes.iter().find(|n| n.id() == id)
        }

        fn nodes(&self) -> impl Iterator<Item = &PlainNode> + '_ {
            self.nodes.iter()
        }

        fn connecting_edge(&self, from: &PlainNode, to: &PlainNode) -> Option<Edge<PlainNode>> {
            let weight = *self.edges.get(&(from.id(), to.id()))?;
            Some(Edge::new(*from, *to, weight))
        }
    }

    fn triangle(d_a: f64, d_b: f64, d_ab: f64) -> WeightedGraph<PlainNode> {
        WeightedGraph::from_parts(
            (0..3).map(PlainNode::new),
            [(0, 1, d_a), (1, 2, d_b), (0, 2, d_ab)],
        )
        .unwrap()
    }

    #[test]
    fn test_default_detour() {
        let graph = triangle(1.0, 1.0, 1.0);
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new());
        assert!((finder.detour() - 1.0).abs() < 1e-12);

        let finder = SumPathFinder::new(&graph, 3.0, 5, LightestPaths::new());
        assert!((finder.detour() - 0.5).abs() < 1e-12);
        assert!((finder.with_detour(1.5).detour() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_restriction_boundary_is_inclusive() {
        let graph = triangle(1.0, 1.0, 1.0);
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new()).with_detour(1.0);
        // d_a = d_b = d_ab / 2: every bound equals d_ab / 2.
        assert!(finder.within_detour(5.0, 5.0, 10.0));
        assert!(!finder.within_detour(5.0, 5.0 + 1e-9, 10.0));
    }

    #[test]
    fn test_restriction_binding_bound() {
        let graph = triangle(1.0, 1.0, 1.0);
        let finder = SumPathFinder::new(&graph, 2.0, 5, LightestPaths::new()).with_detour(10.0);
        // bounds: 10 - 2*2 = 6, (10 - 2)/2 = 4, 10*10 - 2 = 98
        assert!(finder.within_detour(2.0, 4.0, 10.0));
        assert!(!finder.within_detour(2.0, 4.5, 10.0));
    }

    #[test]
    fn test_admissible_needs_full_triangle() {
        let graph = WeightedGraph::from_parts(
            (0..3).map(PlainNode::new),
            [(0, 1, 1.0), (0, 2, 10.0)],
        )
        .unwrap();
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new());
        let [a, b, c] = [0, 1, 2].map(|id| graph.node(id).unwrap());
        assert!(!finder.is_admissible(a, c, b));
    }

    #[test]
    fn test_admissible_scenario() {
        let graph = triangle(5.0, 5.0, 11.0);
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new());
        let [a, b, c] = [0, 1, 2].map(|id| graph.node(id).unwrap());
        assert!(finder.is_admissible(a, c, b));
        // Going 0 -> 1 via 2 is far too long.
        assert!(!finder.is_admissible(a, b, c));
    }

    #[test]
    fn test_invalid_parameters() {
        let graph = triangle(5.0, 5.0, 11.0);
        let bad_k = SumPathFinder::new(&graph, 0.0, 5, LightestPaths::new());
        assert!(matches!(
            bad_k.find_paths(0, 2),
            Err(Error::InvalidParameter { name: "k_param", .. })
        ));

        let bad_detour = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new()).with_detour(-1.0);
        assert!(matches!(
            bad_detour.find_paths(0, 2),
            Err(Error::InvalidParameter { name: "detour", .. })
        ));

        let bad_cap = SumPathFinder::new(&graph, 1.0, 0, LightestPaths::new());
        assert!(matches!(
            bad_cap.find_paths(0, 2),
            Err(Error::InvalidParameter { name: "max_paths", .. })
        ));
    }

    #[test]
    fn test_unknown_node() {
        let graph = triangle(5.0, 5.0, 11.0);
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new());
        assert_eq!(finder.find_paths(0, 42), Err(Error::UnknownNode { id: 42 }));
    }

    #[test]
    fn test_lost_edge_is_an_internal_defect() {
        // 2 -> 1 exists, so 1 passes the triangle check, but 1 -> 2 does not.
        let graph = OneWay {
            nodes: (0..3).map(PlainNode::new).collect(),
            edges: HashMap::from([((0, 2), 11.0), ((0, 1), 5.0), ((2, 1), 5.0)]),
        };
        let finder = SumPathFinder::new(&graph, 1.0, 5, LightestPaths::new());
        assert_eq!(
            finder.find_paths(0, 2),
            Err(Error::MissingEdge { from: 1, to: 2 })
        );
        assert_eq!(
            finder.find_paths(1, 2),
            Err(Error::DisconnectedEndpoints { start: 1, end: 2 })
        );
    }

    #[test]
    fn test_merge_rejects_route_without_first_hop() {
        let [a, b] = [PlainNode::new(0), PlainNode::new(1)];
        let to: HashSet<_> = [Path::trivial(a).extended(Edge::new(a, b, 1.0)).unwrap()]
            .into_iter()
            .collect();
        let from: HashSet<_> = [Path::trivial(b)].into_iter().collect();

        let merged =
            SumPathFinder::<WeightedGraph<PlainNode>, LightestPaths>::merge_paths(&to, &from);
        assert_eq!(
            merged,
            Err(Error::BrokenChain {
                expected: 1,
                found: None
            })
        );
    }
}
