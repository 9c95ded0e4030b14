//! Error type shared by graph construction, generation and path queries.
//!
//! Unreachability is *not* an error: queries that may find no path return
//! `Option::None`. Everything in [`GraphError`] is an invalid argument supplied
//! by the caller.

/// Errors raised while building, generating or querying a [`crate::Graph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The generator was asked for a graph with zero vertices.
    #[error("vertex count must be positive")]
    NoVertices,

    /// The requested edge count cannot be met without self-loops or
    /// duplicate edges.
    #[error(
        "edge count {requested} exceeds the {max} distinct directed edges possible over {vertices} vertices"
    )]
    TooManyEdges {
        requested: usize,
        max: usize,
        vertices: usize,
    },

    /// The weight range is empty or admits a zero weight.
    #[error("invalid weight range [{min}, {max}]")]
    InvalidWeightRange { min: u32, max: u32 },

    /// A vertex named in a query or an edge does not exist in the graph.
    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),

    /// The same vertex was declared twice.
    #[error("duplicate vertex `{0}`")]
    DuplicateVertex(String),

    /// An edge would point back at its own source.
    #[error("self-loop on vertex `{0}`")]
    SelfLoop(String),

    /// The ordered pair already carries an edge.
    #[error("duplicate edge `{from}` -> `{to}`")]
    DuplicateEdge { from: String, to: String },
}

impl GraphError {
    /// `true` for errors caused by a bad argument from the caller. The match
    /// has no wildcard, so every new variant has to be classified here.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        match self {
            Self::NoVertices
            | Self::TooManyEdges { .. }
            | Self::InvalidWeightRange { .. }
            | Self::UnknownVertex(_)
            | Self::DuplicateVertex(_)
            | Self::SelfLoop(_)
            | Self::DuplicateEdge { .. } => true,
        }
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
