//! A single checkers piece.

use crate::constants::Player;
use crate::r#move::Square;

/// One man or king on the board.
///
/// The board keeps the stored `row`/`col` in step with the grid cell the
/// piece occupies; a piece never moves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    pub king: bool,
}

impl Piece {
    pub fn new(row: usize, col: usize, player: Player) -> Self {
        Self { row, col, player, king: false }
    }

    /// Overwrites the position. Bounds are the caller's concern.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub fn make_king(&mut self) {
        self.king = true;
    }

    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    /// Layout character: `w`/`r` for men, upper case for kings.
    pub fn to_char(&self) -> char {
        let c = match self.player {
            Player::White => 'w',
            Player::Red => 'r',
        };
        if self.king { c.to_ascii_uppercase() } else { c }
    }

    /// Inverse of [`Piece::to_char`].
    pub fn from_char(ch: char, row: usize, col: usize) -> Option<Self> {
        let player = match ch.to_ascii_lowercase() {
            'w' => Player::White,
            'r' => Player::Red,
            _ => return None,
        };
        let mut piece = Piece::new(row, col, player);
        if ch.is_ascii_uppercase() {
            piece.make_king();
        }
        Some(piece)
    }
}
