//! Kahn's algorithm: topological order or a cycle verdict.
//!
//! Cyclic input is an ordinary, fully supported case. The sorter never fails;
//! it reports whether every vertex could be ordered.

use std::collections::VecDeque;

use crate::graph::traits::WeightedDigraph;

use super::math_assert::math_assert_msg;
use super::metrics::{Counter, MetricsSink};

/// The result of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<usize>,
    node_count: usize,
}

impl TopologicalOrder {
    /// Returns `true` if every vertex was ordered, i.e. the graph has no cycle.
    pub fn is_acyclic(&self) -> bool {
        self.order.len() == self.node_count
    }

    /// The order, or `None` if the graph has a cycle.
    ///
    /// A partial order from a cyclic graph is never handed out.
    pub fn order(&self) -> Option<&[usize]> {
        self.is_acyclic().then_some(self.order.as_slice())
    }

    /// Consumes the result and returns the order if the graph is acyclic.
    pub fn into_order(self) -> Option<Vec<usize>> {
        self.is_acyclic().then_some(self.order)
    }

    /// Raw `(sequence, is_acyclic)` pair.
    ///
    /// When `is_acyclic` is `false` the sequence holds the vertices that were
    /// ordered before the ready queue ran dry and must not be used as an order.
    pub fn into_parts(self) -> (Vec<usize>, bool) {
        let acyclic = self.is_acyclic();
        (self.order, acyclic)
    }

    /// Number of vertices that were ordered.
    pub fn processed(&self) -> usize {
        self.order.len()
    }

    /// Vertices that could not be ordered, in increasing index order.
    ///
    /// Each one lies on a cycle or is reachable from one. Empty for acyclic graphs.
    pub fn unordered(&self) -> Vec<usize> {
        if self.is_acyclic() {
            return Vec::new();
        }
        let mut placed = vec![false; self.node_count];
        for &v in &self.order {
            placed[v] = true;
        }
        (0..self.node_count).filter(|&v| !placed[v]).collect()
    }
}

/// Computes a topological order with Kahn's algorithm.
///
/// Sources enter the ready queue in increasing index order and the queue is
/// FIFO, so the order is deterministic for a given graph.
///
/// Runs in \(O(n + m)\).
pub fn kahn_sort<G: WeightedDigraph>(graph: &G) -> TopologicalOrder {
    kahn_sort_with(graph, &mut ())
}

/// [`kahn_sort`], reporting ready-queue traffic to `sink`.
pub fn kahn_sort_with<G, S>(graph: &G, sink: &mut S) -> TopologicalOrder
where
    G: WeightedDigraph,
    S: MetricsSink + ?Sized,
{
    let n = graph.node_count();
    let mut indeg = vec![0usize; n];
    for u in 0..n {
        for e in graph.out_edges(u) {
            indeg[e.to] += 1;
        }
    }

    let mut queue = VecDeque::new();
    for (u, &d) in indeg.iter().enumerate() {
        if d == 0 {
            queue.push_back(u);
            sink.increment(Counter::QueuePush);
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        sink.increment(Counter::QueuePop);
        order.push(u);

        for e in graph.out_edges(u) {
            indeg[e.to] -= 1;
            if indeg[e.to] == 0 {
                queue.push_back(e.to);
                sink.increment(Counter::QueuePush);
            }
        }
    }

    let result = TopologicalOrder {
        order,
        node_count: n,
    };
    if cfg!(debug_assertions) {
        if let Some(order) = result.order() {
            math_assert_msg(
                is_topological_order(graph, order),
                "Kahn order must respect every edge",
            );
        }
    }
    result
}

/// Checks that `order` lists every vertex exactly once and that every edge
/// points forward in it.
pub fn is_topological_order<G: WeightedDigraph>(graph: &G, order: &[usize]) -> bool {
    let n = graph.node_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (pos, &node) in order.iter().enumerate() {
        if node >= n || position[node] != usize::MAX {
            return false;
        }
        position[node] = pos;
    }

    (0..n).all(|u| graph.out_edges(u).all(|e| position[u] < position[e.to]))
}
