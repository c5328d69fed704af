//! The read-only view the DAG algorithms need from a graph.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge as seen from its tail vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Head vertex.
    pub to: usize,
    /// Edge weight. May be negative.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge pointing at `to`.
    #[inline]
    pub const fn new(to: usize, weight: W) -> Self {
        Self { to, weight }
    }
}

/// A graph supplier: vertex count plus outgoing weighted edges per vertex.
///
/// Vertices are the indices `0..node_count()`.
///
/// # Contract
/// Implementations guarantee that every edge head is `< node_count()` and that
/// every weight is finite. The algorithms in [`crate::graph::dag`] index arrays by
/// edge heads and panic if an implementation breaks this; the suppliers shipped
/// with this crate validate it at construction.
pub trait WeightedDigraph {
    /// Edge weight type.
    type Weight: Float;

    /// Number of vertices.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Outgoing edges of `node`.
    ///
    /// # Panics
    /// May panic if `node >= self.node_count()`.
    fn out_edges(&self, node: usize) -> impl Iterator<Item = Edge<Self::Weight>> + '_;
}
