//! Compressed graph formats.
//!
//! - `csr`: Compressed Sparse Row with parallel weight storage

pub mod csr;

pub use csr::WeightedCsrGraph;
