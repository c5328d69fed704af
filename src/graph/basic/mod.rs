//! Basic graph implementations.
//!
//! This module contains the growable adjacency-list representation used to
//! build graphs edge by edge.

pub mod directed;

pub use directed::DirectedGraph;
