//! A compact CSR (compressed sparse row) graph with weighted edges.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous edge heads for each row
//! - `weights`: edge weights, parallel to `targets`
//!
//! Rows are frozen after construction, which makes this the supplier of choice
//! when the same graph is queried from many sources.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::graph::basic::DirectedGraph;
use crate::graph::traits::{Edge, WeightedDigraph};

/// An immutable weighted CSR graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m)\) | Counting sort into rows, stable within a row |
/// | `out_edges` | \(O(1)\) | Iterator over a contiguous row |
/// | `degree` | \(O(1)\) | Offset difference |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of the row |
/// | `in_degrees` | \(O(n + m)\) | One pass over `targets` |
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedCsrGraph<W> {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<W>,
}

impl<W: Float> WeightedCsrGraph<W> {
    /// Builds a CSR graph from `(from, to, weight)` triples.
    ///
    /// Edges sharing a tail keep their relative input order.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfBounds`] if an endpoint is `>= node_count`
    /// - [`Error::NonFiniteWeight`] if a weight is NaN or infinite
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut offsets = vec![0usize; node_count + 1];
        for &(from, to, weight) in edges {
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
            offsets[from + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut targets = vec![0usize; edges.len()];
        let mut weights = vec![W::zero(); edges.len()];
        for &(from, to, weight) in edges {
            let slot = cursor[from];
            targets[slot] = to;
            weights[slot] = weight;
            cursor[from] += 1;
        }

        Ok(Self {
            offsets,
            targets,
            weights,
        })
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// # Errors
    /// - [`Error::InvalidCsr`] if `offsets` is empty, not monotone, does not start
    ///   at zero, or does not end at `targets.len()`; or if `targets` and
    ///   `weights` differ in length
    /// - [`Error::VertexOutOfBounds`] if a target is out of bounds
    /// - [`Error::NonFiniteWeight`] if a weight is NaN or infinite
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>, weights: Vec<W>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(Error::InvalidCsr {
                reason: "offsets must have length n+1",
            });
        }
        if offsets[0] != 0 {
            return Err(Error::InvalidCsr {
                reason: "offsets must start at zero",
            });
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidCsr {
                reason: "offsets must be monotone",
            });
        }
        if offsets.last() != Some(&targets.len()) {
            return Err(Error::InvalidCsr {
                reason: "offsets last must equal edge count",
            });
        }
        if targets.len() != weights.len() {
            return Err(Error::InvalidCsr {
                reason: "targets and weights must have equal length",
            });
        }

        let node_count = offsets.len() - 1;
        for from in 0..node_count {
            for i in offsets[from]..offsets[from + 1] {
                let to = targets[i];
                if to >= node_count {
                    return Err(Error::VertexOutOfBounds {
                        from,
                        to,
                        node_count,
                    });
                }
                if !weights[i].is_finite() {
                    return Err(Error::NonFiniteWeight { from, to });
                }
            }
        }

        Ok(Self {
            offsets,
            targets,
            weights,
        })
    }

    /// Returns the out-degree of a node.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn degree(&self, node: usize) -> usize {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.offsets[node + 1] - self.offsets[node]
    }

    /// In-degree of every vertex, indexed by vertex.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indeg = vec![0usize; self.node_count()];
        for &v in &self.targets {
            indeg[v] += 1;
        }
        indeg
    }

    /// Checks if an edge exists from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.node_count() && self.row(from).0.contains(&to)
    }

    /// Raw CSR parts: `(offsets, targets, weights)`.
    pub fn as_parts(&self) -> (&[usize], &[usize], &[W]) {
        (&self.offsets, &self.targets, &self.weights)
    }

    fn row(&self, node: usize) -> (&[usize], &[W]) {
        let range = self.offsets[node]..self.offsets[node + 1];
        (&self.targets[range.clone()], &self.weights[range])
    }
}

impl<W: Float> WeightedDigraph for WeightedCsrGraph<W> {
    type Weight = W;

    fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    fn edge_count(&self) -> usize {
        self.targets.len()
    }

    fn out_edges(&self, node: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        let (targets, weights) = self.row(node);
        targets
            .iter()
            .zip(weights)
            .map(|(&to, &weight)| Edge::new(to, weight))
    }
}

impl<W: Float> From<&DirectedGraph<W>> for WeightedCsrGraph<W> {
    fn from(graph: &DirectedGraph<W>) -> Self {
        let n = graph.node_count();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());
        let mut weights = Vec::with_capacity(graph.edge_count());

        offsets.push(0);
        for u in 0..n {
            for e in graph.adjacent(u) {
                targets.push(e.to);
                weights.push(e.weight);
            }
            offsets.push(targets.len());
        }

        Self {
            offsets,
            targets,
            weights,
        }
    }
}
