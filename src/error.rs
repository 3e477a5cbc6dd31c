use thiserror::Error;

use crate::color::VertexId;

/// errors raised while building graphs, reading instances or searching colorings
#[derive(Debug, Error)]
pub enum ColorError {
    /// a graph needs at least one vertex
    #[error("a graph needs at least one vertex")]
    EmptyGraph,
    /// a vertex index is not in 0..n
    #[error("vertex {vertex} out of range (graph has {n} vertices)")]
    VertexOutOfRange {
        /// offending index
        vertex: VertexId,
        /// number of vertices of the graph
        n: usize,
    },
    /// self-loops make a graph uncolorable
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),
    /// the exact search exceeded its candidate budget
    #[error("search aborted after testing {tested} colorings")]
    SearchAborted {
        /// number of candidate colorings tested before giving up
        tested: u64,
    },
    /// benchmark parameters that cannot produce measures
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// malformed instance file
    #[error("parse error: {0}")]
    Parse(String),
    /// io error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
