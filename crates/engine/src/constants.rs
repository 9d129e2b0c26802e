//! Constants used in the checkers engine.

use once_cell::sync::Lazy;

use crate::r#move::Square;

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: u32 = 12;

/// Rows at the top of the board occupied by `Player::TOP` at the start.
pub const TOP_HOME_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Red,
}

impl Player {
    /// The side that starts on rows 0..3 and moves toward increasing rows.
    pub const TOP: Player = Player::White;
    /// The side that starts on rows 5..8 and moves toward decreasing rows.
    pub const BOTTOM: Player = Player::Red;

    /// Get the opponent of the current player.
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Red,
            Player::Red => Player::White,
        }
    }

    /// Row step of an uncrowned piece of this side.
    pub fn forward(self) -> isize {
        match self {
            Player::White => 1,
            Player::Red => -1,
        }
    }

    pub fn get_idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Red => 1,
        }
    }

    /// Row on which a man of this side is crowned.
    pub fn crowning_row(self) -> usize {
        match self {
            Player::White => ROWS - 1,
            Player::Red => 0,
        }
    }
}

/// Dark squares: the only cells a piece may ever stand on.
pub const fn is_playable(row: usize, col: usize) -> bool {
    col % 2 == (row + 1) % 2
}

pub const fn is_on_board(row: isize, col: isize) -> bool {
    row >= 0 && row < ROWS as isize && col >= 0 && col < COLS as isize
}

/// All playable squares in row-major order.
pub static PLAYABLE_SQUARES: Lazy<Vec<Square>> = Lazy::new(|| {
    let mut squares = Vec::with_capacity(ROWS * COLS / 2);
    for row in 0..ROWS {
        for col in 0..COLS {
            if is_playable(row, col) {
                squares.push(Square::new(row, col));
            }
        }
    }
    squares
});
