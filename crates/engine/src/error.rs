//! Error types for board operations.

use crate::r#move::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Coordinates outside the 8x8 grid
    #[error("Invalid coordinate: ({row},{col}) is off the board")]
    InvalidCoordinate { row: usize, col: usize },

    /// Destination is occupied
    #[error("Illegal move: from {from} to occupied square {to}")]
    IllegalMove { from: Square, to: Square },

    /// The piece is not where it claims to be
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Malformed board layout text
    #[error("Invalid layout at line {line}: {message}")]
    ParseLayout { line: usize, message: String },
}

pub type CheckersResult<T> = Result<T, CheckersError>;
