//! Error handling for Arcflow.
//!
//! All fallible operations across the workspace return [`Result`]. Each
//! failure class gets its own variant so callers can distinguish a
//! precondition violation (bad index, malformed input) from a structural
//! property of the graph (negative cycle, disconnection). These algorithms
//! are deterministic, so every error is a property of the input; nothing is
//! retried.

use thiserror::Error;

use crate::types::VertexId;

/// Error type for all Arcflow operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex id lies outside the graph's fixed vertex range.
    #[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: VertexId,
        /// Vertex count of the graph it was used against.
        vertex_count: usize,
    },

    /// No arc exists for the given ordered vertex pair.
    #[error("no arc from {from} to {to}")]
    ArcNotFound {
        /// Tail of the missing arc.
        from: VertexId,
        /// Head of the missing arc.
        to: VertexId,
    },

    /// No mark is stored for the given ordered vertex pair.
    #[error("no mark stored for arc ({from}, {to})")]
    MarkNotFound {
        /// Tail of the unmarked arc.
        from: VertexId,
        /// Head of the unmarked arc.
        to: VertexId,
    },

    /// A flow computation was asked to route flow from a vertex to itself.
    #[error("source and target must be distinct vertices")]
    SourceIsTarget,

    /// A negative-weight cycle was detected, making shortest distances
    /// (and any flow routed along them) undefined.
    #[error("negative-weight cycle detected ({} vertices implicated)", vertices.len())]
    NegativeCycle {
        /// Vertices still relaxing on the final round, i.e. vertices on or
        /// reaching the cycle.
        vertices: Vec<VertexId>,
    },

    /// A vertex required to be reachable was not.
    #[error("vertex {0} is unreachable")]
    UnreachableVertex(VertexId),

    /// Malformed input dimensions or arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used across all Arcflow crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ArcNotFound {
            from: VertexId::new(1),
            to: VertexId::new(2),
        };
        assert_eq!(err.to_string(), "no arc from 1 to 2");

        let err = Error::VertexOutOfBounds {
            vertex: VertexId::new(9),
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "vertex 9 is out of bounds for a graph with 4 vertices"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(Error::SourceIsTarget, Error::SourceIsTarget);
        assert_ne!(
            Error::SourceIsTarget,
            Error::UnreachableVertex(VertexId::new(0))
        );
    }
}
