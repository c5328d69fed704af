//! A growable adjacency-list directed graph with weighted edges.
//!
//! This is the builder-friendly supplier: edges are appended one by one and
//! validated on insertion, so every `DirectedGraph` satisfies the
//! [`WeightedDigraph`] contract by construction.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::graph::traits::{Edge, WeightedDigraph};

/// A directed graph storing one `Vec<Edge<W>>` per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n)\) | Allocates empty adjacency lists |
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty list |
/// | `add_edge` | \(O(1)\) amortized | Parallel edges are kept |
/// | `adjacent` | \(O(1)\) | Slice of outgoing edges |
/// | `in_degree` | \(O(n + m)\) | Scans all adjacency lists |
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<W> {
    adjacency: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W: Float> DirectedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    /// Fails on the first edge [`add_edge`](Self::add_edge) would reject.
    pub fn with_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        let idx = self.adjacency.len();
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds the edge `from -> to` with `weight`.
    ///
    /// Parallel edges and self-loops are accepted; a self-loop is a cycle and
    /// the topological sorter reports it as such.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfBounds`] if either endpoint does not exist
    /// - [`Error::NonFiniteWeight`] if `weight` is NaN or infinite
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let node_count = self.adjacency.len();
        if from >= node_count || to >= node_count {
            return Err(Error::VertexOutOfBounds {
                from,
                to,
                node_count,
            });
        }
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { from, to });
        }
        self.adjacency[from].push(Edge::new(to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex`, in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn adjacent(&self, vertex: usize) -> &[Edge<W>] {
        &self.adjacency[vertex]
    }

    /// Out-degree of `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// In-degree of `vertex`.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|e| e.to == vertex)
            .count()
    }

    /// Checks if at least one edge `from -> to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.iter().any(|e| e.to == to))
    }

    /// Iterates over all edges as `(from, to, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |e| (u, e.to, e.weight)))
    }
}

impl<W: Float> WeightedDigraph for DirectedGraph<W> {
    type Weight = W;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn out_edges(&self, node: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        self.adjacency[node].iter().copied()
    }
}
