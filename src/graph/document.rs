//! JSON graph documents.
//!
//! ```json
//! { "directed": true, "n": 4,
//!   "edges": [ {"u": 0, "v": 1, "w": 5}, {"u": 1, "v": 3, "w": 2} ],
//!   "source": 0 }
//! ```
//!
//! `directed` defaults to `true`, `w` defaults to `1`, `source` is optional and
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::basic::DirectedGraph;

/// A single edge record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Tail vertex.
    pub u: usize,
    /// Head vertex.
    pub v: usize,
    /// Weight.
    #[serde(default = "unit_weight")]
    pub w: f64,
}

fn unit_weight() -> f64 {
    1.0
}

fn directed_default() -> bool {
    true
}

/// A serialized graph plus an optional default source vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Must be `true`; kept so documents written for other tools load cleanly.
    #[serde(default = "directed_default")]
    pub directed: bool,
    /// Vertex count.
    pub n: usize,
    /// Edge list.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    /// Default source vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,
}

impl GraphDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Captures an existing graph as a document.
    pub fn from_graph(graph: &DirectedGraph<f64>, source: Option<usize>) -> Self {
        use crate::graph::traits::WeightedDigraph;

        Self {
            directed: true,
            n: graph.node_count(),
            edges: graph
                .edges()
                .map(|(u, v, w)| EdgeRecord { u, v, w })
                .collect(),
            source,
        }
    }

    /// Builds the in-memory graph.
    ///
    /// # Errors
    /// - [`Error::UndirectedGraph`] if `directed` is `false`
    /// - any error [`DirectedGraph::add_edge`] reports for an edge record
    pub fn to_graph(&self) -> Result<DirectedGraph<f64>> {
        if !self.directed {
            return Err(Error::UndirectedGraph);
        }
        DirectedGraph::with_edges(self.n, self.edges.iter().map(|e| (e.u, e.v, e.w)))
    }
}
