//! DAG algorithms: topological ordering and single-source path relaxation.
//!
//! - [`topo`]: Kahn's algorithm with a cycle verdict
//! - [`engine`]: shortest/longest paths relaxed in topological order
//! - [`path_result`]: distances, parent links and path reconstruction
//! - [`metrics`]: per-call counters and timing

pub mod engine;
pub mod metrics;
pub mod path_result;
pub mod topo;
mod math_assert;

pub use engine::{
    longest_paths, shortest_paths, Computation, CycleReport, DagPathEngine, Outcome, PathObjective,
};
pub use metrics::{Counter, Metrics, MetricsSink};
pub use path_result::PathResult;
pub use topo::{is_topological_order, kahn_sort, kahn_sort_with, TopologicalOrder};
