use std::io;

use thiserror::Error;

/// Errors raised while building or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex {0} not found")]
    VertexNotFound(usize),

    #[error("edge endpoint {vertex} is outside the vertex range 0..{vertex_count}")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid vertex count {0}: a graph needs at least one vertex")]
    InvalidVertexCount(i64),

    #[error("invalid graph type {0}: expected 0 (undirected) or 1 (directed)")]
    InvalidGraphType(i64),

    #[error("could not parse `{token}` on line {line}")]
    Parse { token: String, line: usize },

    #[error("could not read graph: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
