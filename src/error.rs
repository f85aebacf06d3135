use thiserror::Error;

/// Errors produced by the matrix-parsing and algorithm wrapper layers.
///
/// Structural matrix problems (non-square, asymmetric, nonzero diagonal) are
/// *not* reported through this type by [`Graph`](crate::graph::Graph) itself:
/// the constructor absorbs them into its validity flag so callers can decide
/// whether to proceed. Only the convenience wrappers and the textual I/O
/// layer convert that flag into an `Err`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input does not describe an undirected, loop-free weighted graph.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Textual matrix input with the wrong shape (bad header, missing rows,
    /// ragged or short rows).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A matrix cell or header field that is not an integer.
    #[error("Invalid token: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// File-level failure while reading input or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    /// Creates a `MalformedInput` error with the given message.
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        GraphError::MalformedInput(msg.into())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
