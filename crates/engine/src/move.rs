//! Squares, move maps and fully resolved moves.

use crate::piece::Piece;
use std::collections::HashMap;
use std::fmt;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Destination -> pieces jumped to get there.
///
/// Capture lists hold the most recently jumped piece first, followed by the
/// rest of the chain. Quiet moves map to an empty list.
pub type MoveMap = HashMap<Square, Vec<Piece>>;

/// A single piece's move, as picked from a [`MoveMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub to: Square,
    pub captured: Vec<Piece>,
}

impl Move {
    pub fn new(piece: Piece, to: Square, captured: Vec<Piece>) -> Self {
        Self { piece, to, captured }
    }

    pub fn origin(&self) -> Square {
        self.piece.square()
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.origin(), sep, self.to)
    }
}
