//! # `dagpath` - Linear-Time Paths on Directed Acyclic Graphs
//!
//! Single-source shortest (and longest) paths on weighted DAGs: verify
//! acyclicity with a topological sort, then relax edges once in that order.
//!
//! ## Guarantees
//!
//! ### Correctness
//! - **Optimal distances**: every predecessor of a vertex is final before the
//!   vertex is relaxed from, so one pass suffices.
//! - **Negative weights**: fully supported; only acyclicity is required.
//! - **Explicit cycle verdict**: a cyclic graph yields
//!   [`Outcome::NotADag`](graph::dag::Outcome::NotADag), never a degenerate
//!   result.
//!
//! ### Cost
//! - \(O(n + m)\) time and \(O(n)\) extra space per call.
//! - No shared mutable state: metrics are created per call and returned with
//!   the outcome.
//!
//! ## Architecture
//!
//! 1. **Graph suppliers** ([`DirectedGraph`], [`WeightedCsrGraph`]): anything
//!    implementing [`WeightedDigraph`].
//! 2. **Topological sorter** ([`kahn_sort`]): order or cycle verdict.
//! 3. **Path engine** ([`DagPathEngine`]): initialization, sort, relaxation.
//! 4. **Path result** ([`PathResult`]): distances, parents, reconstruction.
//!
//! ## Example
//!
//! ```rust
//! use dagpath::{shortest_paths, DirectedGraph};
//!
//! let graph = DirectedGraph::with_edges(
//!     4,
//!     [(0, 1, 5.0), (0, 2, 3.0), (1, 3, 2.0), (2, 3, 6.0)],
//! )?;
//!
//! let run = shortest_paths(&graph, 0)?;
//! let paths = run.outcome.paths().expect("graph is acyclic");
//!
//! assert_eq!(paths.distances(), &[0.0, 5.0, 3.0, 7.0]);
//! assert_eq!(paths.path(3)?, Some(vec![0, 1, 3]));
//! assert_eq!(run.metrics.distance_updates(), 3);
//! # Ok::<(), dagpath::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::dag::{
    is_topological_order, kahn_sort, kahn_sort_with, longest_paths, shortest_paths, Computation,
    Counter, CycleReport, DagPathEngine, Metrics, MetricsSink, Outcome, PathObjective, PathResult,
    TopologicalOrder,
};
pub use graph::{DirectedGraph, Edge, EdgeRecord, GraphDocument, WeightedCsrGraph, WeightedDigraph};
