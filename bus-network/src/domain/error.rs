//! Network error types.
//!
//! These errors abort a single query or a single bus's schedule. The graph
//! itself is never modified by a failed operation, so repeating the same
//! call yields the same error.

use super::{InvalidStop, Stop, TimeError};

/// Errors from graph lookups, path searches and schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A stop name is not present in the graph
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no directed path joins them
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Stop, to: Stop },

    /// Both stops exist but there is no edge between them
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: Stop, to: Stop },

    /// A bus route references a stop pair that is not an edge
    #[error("{bus} route has no edge from {from} to {to}")]
    RouteEdgeMissing {
        bus: String,
        from: Stop,
        to: Stop,
    },

    /// A stop name failed validation
    #[error(transparent)]
    InvalidStop(#[from] InvalidStop),

    /// A computed time fell outside the representable range
    #[error(transparent)]
    Time(#[from] TimeError),
}
