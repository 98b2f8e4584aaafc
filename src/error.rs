//! Error types.

use thiserror::Error;

use crate::models::Violation;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PostmanError>;

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// An edge endpoint is not in `[0, vertex_count)`.
    #[error("edge {edge}: vertex {vertex} out of range (vertex count {vertex_count})")]
    VertexOutOfRange {
        /// Index of the offending edge in the caller's list.
        edge: usize,
        /// The endpoint that was out of range.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight is below zero.
    #[error("edge {edge}: negative weight {weight}")]
    NegativeWeight {
        /// Index of the offending edge.
        edge: usize,
        /// The weight supplied.
        weight: f64,
    },
    /// An edge weight is NaN or infinite.
    #[error("edge {edge}: weight {weight} is not finite")]
    NonFiniteWeight {
        /// Index of the offending edge.
        edge: usize,
        /// The weight supplied.
        weight: f64,
    },
    /// A requested start vertex does not exist.
    #[error("start vertex {vertex} out of range (vertex count {vertex_count})")]
    StartOutOfRange {
        /// The requested start.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A requested start vertex has no links while the graph has some.
    #[error("start vertex {vertex} has no links")]
    StartIsolated {
        /// The requested start.
        vertex: usize,
    },
}

/// Errors raised while computing a postman tour.
///
/// Every error is final: the computation is deterministic, so retrying with
/// the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PostmanError {
    /// The caller supplied an invalid graph.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// No path exists between two vertices that must be connected.
    ///
    /// The graph is not connected (undirected) or not strongly connected
    /// (directed).
    #[error("graph is disconnected: no path from {from} to {to}")]
    DisconnectedGraph {
        /// Path source.
        from: usize,
        /// Unreachable target.
        to: usize,
    },

    /// A perfect matching was required but cannot exist.
    ///
    /// Signals a broken invariant (e.g. an odd number of odd-degree vertices).
    #[error("no perfect matching over {vertices} vertices")]
    MatchingInfeasible {
        /// Number of vertices that needed pairing.
        vertices: usize,
    },

    /// Circuit extraction found a vertex with unbalanced degree.
    #[error("graph is not eulerian: vertex {vertex} is unbalanced")]
    NotEulerian {
        /// First unbalanced vertex found.
        vertex: usize,
    },

    /// A walk step matches no edge of the caller's list.
    #[error("step {step}: no original edge joins {from} and {to}")]
    EdgeLookup {
        /// Position of the step in the walk.
        step: usize,
        /// Step tail.
        from: usize,
        /// Step head.
        to: usize,
    },

    /// The computed walk did not pass verification.
    #[error("walk failed verification with {} violation(s)", .violations.len())]
    InvalidTour {
        /// Everything the evaluator reported.
        violations: Vec<Violation>,
    },

    /// Request or response (de)serialization failed in a binding layer.
    #[error("serialization error: {0}")]
    Serialization(String),
}
