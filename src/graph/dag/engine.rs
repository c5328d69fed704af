//! Single-source shortest (or longest) paths on a DAG.
//!
//! The engine verifies acyclicity with [`kahn_sort_with`] and then relaxes the
//! outgoing edges of every reached vertex in topological order. Every
//! predecessor of `v` is final before `v` is visited, so one pass yields optimal
//! distances in \(O(n + m)\), negative weights included.

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::traits::WeightedDigraph;

use super::math_assert::math_assert_msg;
use super::metrics::{Counter, Metrics, MetricsSink};
use super::path_result::PathResult;
use super::topo::kahn_sort_with;

/// Which extreme the relaxation pass keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathObjective {
    /// Minimum total weight. Unreached vertices sit at `+∞`.
    #[default]
    Shortest,
    /// Maximum total weight (critical path). Unreached vertices sit at `-∞`.
    Longest,
}

impl PathObjective {
    #[inline]
    fn unreached<W: Float>(self) -> W {
        match self {
            Self::Shortest => W::infinity(),
            Self::Longest => W::neg_infinity(),
        }
    }

    #[inline]
    fn improves<W: Float>(self, candidate: W, current: W) -> bool {
        match self {
            Self::Shortest => candidate < current,
            Self::Longest => candidate > current,
        }
    }
}

/// Why no [`PathResult`] was produced: the graph has a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Vertices the sorter managed to order.
    pub processed: usize,
    /// Vertices on a cycle or downstream of one, in increasing index order.
    pub unordered: Vec<usize>,
}

/// Either distances for every vertex, or the verdict that the graph is not a DAG.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<W> {
    /// The graph is acyclic and the distances are final.
    Paths(PathResult<W>),
    /// The graph has a cycle; distances are undefined.
    NotADag(CycleReport),
}

impl<W> Outcome<W> {
    /// Returns `true` for [`Outcome::Paths`].
    pub fn is_dag(&self) -> bool {
        matches!(self, Self::Paths(_))
    }

    /// The result, if the graph was a DAG.
    pub fn paths(&self) -> Option<&PathResult<W>> {
        match self {
            Self::Paths(r) => Some(r),
            Self::NotADag(_) => None,
        }
    }

    /// Consumes the outcome and returns the result, if the graph was a DAG.
    pub fn into_paths(self) -> Option<PathResult<W>> {
        match self {
            Self::Paths(r) => Some(r),
            Self::NotADag(_) => None,
        }
    }

    /// The cycle report, if the graph was not a DAG.
    pub fn cycle(&self) -> Option<&CycleReport> {
        match self {
            Self::Paths(_) => None,
            Self::NotADag(c) => Some(c),
        }
    }
}

/// An [`Outcome`] together with the metrics gathered while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation<W> {
    /// What the run produced.
    pub outcome: Outcome<W>,
    /// Counters and elapsed time of this run only.
    pub metrics: Metrics,
}

/// DAG path engine.
///
/// Holds no per-call state: every call builds its own metrics context, so a
/// single engine can serve concurrent callers.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `compute` | \(O(n + m)\) | Kahn sort plus one relaxation pass |
/// | `compute_with` | \(O(n + m)\) | Same, reporting into a caller-owned sink |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DagPathEngine {
    objective: PathObjective,
}

impl DagPathEngine {
    /// Creates an engine for `objective`.
    pub const fn new(objective: PathObjective) -> Self {
        Self { objective }
    }

    /// Shortest-path engine.
    pub const fn shortest() -> Self {
        Self::new(PathObjective::Shortest)
    }

    /// Longest-path (critical path) engine.
    pub const fn longest() -> Self {
        Self::new(PathObjective::Longest)
    }

    /// The configured objective.
    pub const fn objective(&self) -> PathObjective {
        self.objective
    }

    /// Computes paths from `source` with a fresh [`Metrics`] context.
    ///
    /// # Errors
    /// [`Error::SourceOutOfBounds`] if `source` is not a vertex of `graph`.
    pub fn compute<G: WeightedDigraph>(&self, graph: &G, source: usize) -> Result<Computation<G::Weight>> {
        let mut metrics = Metrics::new();
        let outcome = self.compute_with(graph, source, &mut metrics)?;
        Ok(Computation { outcome, metrics })
    }

    /// Computes paths from `source`, reporting to `sink`.
    ///
    /// The sink is reset and timed around the whole run, topological sort
    /// included.
    ///
    /// # Errors
    /// [`Error::SourceOutOfBounds`] if `source` is not a vertex of `graph`.
    /// Nothing is computed and the sink is untouched in that case.
    ///
    /// # Panics
    /// Panics if `graph` breaks the [`WeightedDigraph`] contract by reporting an
    /// edge head `>= node_count()`.
    #[tracing::instrument(level = "debug", skip(self, graph, sink), fields(objective = ?self.objective, nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn compute_with<G, S>(&self, graph: &G, source: usize, sink: &mut S) -> Result<Outcome<G::Weight>>
    where
        G: WeightedDigraph,
        S: MetricsSink + ?Sized,
    {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::SourceOutOfBounds {
                vertex: source,
                node_count: n,
            });
        }

        let mut dist = vec![self.objective.unreached::<G::Weight>(); n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        dist[source] = G::Weight::zero();

        sink.reset();
        sink.start_timer();

        let topo = kahn_sort_with(graph, sink);
        let Some(order) = topo.order() else {
            sink.stop_timer();
            let report = CycleReport {
                processed: topo.processed(),
                unordered: topo.unordered(),
            };
            tracing::warn!(
                processed = report.processed,
                unordered = report.unordered.len(),
                "graph has a cycle; paths are undefined"
            );
            return Ok(Outcome::NotADag(report));
        };

        // Reached means source or has a parent. Overflow may push a reached
        // vertex's distance to the sentinel, so the distance cannot decide it.
        for &u in order {
            if u != source && parent[u].is_none() {
                continue;
            }
            for e in graph.out_edges(u) {
                let candidate = dist[u] + e.weight;
                sink.increment(Counter::Relaxation);
                sink.increment(Counter::Comparison);
                let first_visit = e.to != source && parent[e.to].is_none();
                if first_visit || self.objective.improves(candidate, dist[e.to]) {
                    dist[e.to] = candidate;
                    parent[e.to] = Some(u);
                    sink.increment(Counter::DistanceUpdate);
                }
            }
        }

        sink.stop_timer();
        math_assert_msg(
            dist[source] == G::Weight::zero() && parent[source].is_none(),
            "source must keep distance zero and no parent",
        );

        let result = PathResult::new(dist, parent, source)?;
        tracing::debug!(
            reached = result.parents().iter().filter(|p| p.is_some()).count() + 1,
            "relaxation pass complete"
        );
        Ok(Outcome::Paths(result))
    }
}

/// Shortest paths from `source` using a default engine.
///
/// # Errors
/// See [`DagPathEngine::compute`].
pub fn shortest_paths<G: WeightedDigraph>(graph: &G, source: usize) -> Result<Computation<G::Weight>> {
    DagPathEngine::shortest().compute(graph, source)
}

/// Longest paths from `source` using a default engine.
///
/// # Errors
/// See [`DagPathEngine::compute`].
pub fn longest_paths<G: WeightedDigraph>(graph: &G, source: usize) -> Result<Computation<G::Weight>> {
    DagPathEngine::longest().compute(graph, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::DirectedGraph;

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph<f64> {
        DirectedGraph::with_edges(n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn engine_diamond_shortest() {
        let g = graph(4, &[(0, 1, 5.0), (0, 2, 3.0), (1, 3, 2.0), (2, 3, 6.0)]);
        let run = DagPathEngine::shortest().compute(&g, 0).unwrap();
        let r = run.outcome.paths().unwrap();

        assert_eq!(r.distances(), &[0.0, 5.0, 3.0, 7.0]);
        assert_eq!(r.parents(), &[None, Some(0), Some(0), Some(1)]);
        assert_eq!(run.metrics.relaxations(), 4);
        assert_eq!(run.metrics.comparisons(), 4);
        assert_eq!(run.metrics.distance_updates(), 3);
    }

    #[test]
    fn engine_diamond_longest() {
        let g = graph(4, &[(0, 1, 5.0), (0, 2, 3.0), (1, 3, 2.0), (2, 3, 6.0)]);
        let run = DagPathEngine::longest().compute(&g, 0).unwrap();
        let r = run.outcome.into_paths().unwrap();

        assert_eq!(r.distances(), &[0.0, 5.0, 3.0, 9.0]);
        assert_eq!(r.path(3).unwrap(), Some(vec![0, 2, 3]));
        assert_eq!(r.critical_path(), Some((9.0, vec![0, 2, 3])));
    }

    #[test]
    fn engine_skips_unreached_tails() {
        // 1 is unreached from 0, so its edge into 2 is never relaxed.
        let g = graph(3, &[(1, 2, 1.0), (0, 2, 4.0)]);
        let run = shortest_paths(&g, 0).unwrap();
        let r = run.outcome.paths().unwrap();
        assert_eq!(r.distances(), &[0.0, f64::INFINITY, 4.0]);
        assert_eq!(r.parents(), &[None, None, Some(0)]);
        assert_eq!(run.metrics.relaxations(), 1);
    }

    #[test]
    fn overflowed_vertices_stay_reached() {
        let g = graph(3, &[(0, 1, -1e308), (1, 2, -1e308)]);
        let r = shortest_paths(&g, 0).unwrap().outcome.into_paths().unwrap();
        assert_eq!(r.distance(2).unwrap(), f64::NEG_INFINITY);
        assert_eq!(r.parents(), &[None, Some(0), Some(1)]);
        assert_eq!(r.is_reachable(2), Ok(true));
        assert_eq!(r.path(2).unwrap(), Some(vec![0, 1, 2]));

        // Longest: vertex 2 overflows to +inf and must still relax into 3.
        let g = DirectedGraph::<f32>::with_edges(4, [(0, 1, 3e38), (1, 2, 3e38), (2, 3, 1.0)]).unwrap();
        let r = longest_paths(&g, 0).unwrap().outcome.into_paths().unwrap();
        assert_eq!(r.parents(), &[None, Some(0), Some(1), Some(2)]);
        assert_eq!(r.distance(3).unwrap(), f32::INFINITY);
        assert_eq!(r.path(3).unwrap(), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn engine_rejects_out_of_range_source() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let mut metrics = Metrics::new();
        assert_eq!(
            DagPathEngine::default().compute_with(&g, 2, &mut metrics),
            Err(Error::SourceOutOfBounds {
                vertex: 2,
                node_count: 2
            })
        );
        assert_eq!(metrics, Metrics::new());

        let empty = DirectedGraph::<f64>::new(0);
        assert!(shortest_paths(&empty, 0).is_err());
    }

    #[test]
    fn engine_reports_cycles() {
        let g = graph(3, &[(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0)]);
        let run = shortest_paths(&g, 0).unwrap();
        assert!(!run.outcome.is_dag());
        assert!(run.outcome.paths().is_none());
        assert_eq!(
            run.outcome.cycle(),
            Some(&CycleReport {
                processed: 0,
                unordered: vec![0, 1, 2]
            })
        );
        assert_eq!(run.metrics.relaxations(), 0);
        assert!(!run.metrics.is_timing());
    }

    #[test]
    fn engine_with_noop_sink() {
        let g = graph(2, &[(0, 1, -3.0)]);
        let outcome = DagPathEngine::shortest().compute_with(&g, 0, &mut ()).unwrap();
        assert_eq!(outcome.paths().unwrap().distances(), &[0.0, -3.0]);
    }

    #[test]
    fn objective_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PathObjective::Longest).unwrap(), "\"longest\"");
        assert_eq!(DagPathEngine::default().objective(), PathObjective::Shortest);
    }
}
