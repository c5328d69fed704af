//! Weighted directed graphs and the DAG algorithms that run on them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: growable adjacency lists
//! - `compressed`: frozen CSR layout
//! - `dag`: topological sort and path relaxation over any [`WeightedDigraph`]
//! - `document`: JSON input format

pub mod basic;
pub mod compressed;
pub mod dag;
pub mod document;
pub mod traits;

pub use basic::DirectedGraph;
pub use compressed::WeightedCsrGraph;
pub use document::{EdgeRecord, GraphDocument};
pub use traits::{Edge, WeightedDigraph};
