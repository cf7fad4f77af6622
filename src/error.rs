//! Errors produced by the game and learning primitives.

/// Failures of the core operations. All of them are local to the caller: the
/// operation that returns an error does not leave partial state behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The session is still being played, but the operation requires a
    /// finished one.
    #[error("game session is still active")]
    InvalidState,
    /// A random move was requested on a board without empty cells.
    #[error("no open cells left on the board")]
    NoOpenCells,
    /// Boards of different variants were mixed together.
    #[error("expected a board with {expected} cells, got {actual}")]
    TypeMismatch {
        /// Size of the board the receiver was configured for.
        expected: usize,
        /// Size of the board that was passed in.
        actual: usize,
    },
    /// The variant description is inconsistent.
    #[error("invalid game variant: {0}")]
    InvalidVariant(String),
}

/// Shorthand for results of the core operations.
pub type Result<T> = std::result::Result<T, Error>;
