//! Error taxonomy for rejected calls.
//!
//! Every variant describes input the caller handed over that cannot be used.
//! A graph containing a cycle is *not* an error: the engine reports it through
//! [`Outcome::NotADag`](crate::graph::dag::Outcome::NotADag).

/// Invalid input rejected before any computation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested source vertex does not exist.
    #[error("source vertex {vertex} is out of bounds for {node_count} vertices")]
    SourceOutOfBounds {
        /// Requested source.
        vertex: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },

    /// The requested target vertex does not exist.
    #[error("target vertex {vertex} is out of bounds for {node_count} vertices")]
    TargetOutOfBounds {
        /// Requested target.
        vertex: usize,
        /// Number of vertices in the result.
        node_count: usize,
    },

    /// An edge endpoint does not exist.
    #[error("edge {from}->{to} is out of bounds for {node_count} vertices")]
    VertexOutOfBounds {
        /// Tail of the offending edge.
        from: usize,
        /// Head of the offending edge.
        to: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },

    /// Distance and parent arrays disagree on the vertex count.
    #[error("distance array has {distances} entries but parent array has {parents}")]
    LengthMismatch {
        /// Length of the distance array.
        distances: usize,
        /// Length of the parent array.
        parents: usize,
    },

    /// A parent link names a vertex that does not exist.
    #[error("parent of vertex {vertex} is {parent}, out of bounds for {node_count} vertices")]
    ParentOutOfBounds {
        /// Vertex carrying the bad link.
        vertex: usize,
        /// The linked parent.
        parent: usize,
        /// Number of vertices in the result.
        node_count: usize,
    },

    /// Edge weights must be finite; NaN and infinities break relaxation.
    #[error("edge {from}->{to} has a non-finite weight")]
    NonFiniteWeight {
        /// Tail of the offending edge.
        from: usize,
        /// Head of the offending edge.
        to: usize,
    },

    /// Undirected input cannot be acyclic once it has an edge.
    #[error("graph document is undirected; only directed graphs are supported")]
    UndirectedGraph,

    /// CSR parts do not describe a well-formed graph.
    #[error("malformed CSR parts: {reason}")]
    InvalidCsr {
        /// What check failed.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
