//! The core board representation for the checkers engine.

use crate::config::Config;
use crate::constants::{COLS, PLAYABLE_SQUARES, Player, ROWS, TOP_HOME_ROWS, is_playable};
use crate::error::{CheckersError, CheckersResult};
use crate::evaluate;
use crate::piece::Piece;
use crate::r#move::{Move, Square};
use log::debug;
use std::fmt;

/// Represents the state of the checkers board at any point in time.
///
/// Every piece lives in exactly one grid cell and its stored coordinates
/// always name that cell. `pieces_left` and `kings` are indexed by
/// [`Player::get_idx`]; `pieces_left` tracks the grid while `kings` counts
/// crownings and is not lowered by captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; COLS]; ROWS],
    pieces_left: [u32; 2],
    kings: [u32; 2],
}

impl Board {
    /// Creates a board set up in the starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.create_board();
        board
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            grid: [[None; COLS]; ROWS],
            pieces_left: [0; 2],
            kings: [0; 2],
        }
    }

    /// Top side on the first three rows, bottom side on the last three.
    fn create_board(&mut self) {
        for sq in PLAYABLE_SQUARES.iter() {
            let player = if sq.row < TOP_HOME_ROWS {
                Player::TOP
            } else if sq.row >= ROWS - TOP_HOME_ROWS {
                Player::BOTTOM
            } else {
                continue;
            };
            self.set_piece(Piece::new(sq.row, sq.col, player));
        }
    }

    fn set_piece(&mut self, piece: Piece) {
        let idx = piece.player.get_idx();
        self.grid[piece.row][piece.col] = Some(piece);
        self.pieces_left[idx] += 1;
        if piece.king {
            self.kings[idx] += 1;
        }
    }

    /// Parses an 8-line text layout: `.` for empty, `w`/`W` for the top side,
    /// `r`/`R` for the bottom side (upper case is a king).
    pub fn from_layout(layout: &str) -> CheckersResult<Self> {
        let mut board = Board::empty();
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != ROWS {
            return Err(CheckersError::ParseLayout {
                line: lines.len(),
                message: format!("expected {} rows, found {}", ROWS, lines.len()),
            });
        }

        for (row, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != COLS {
                return Err(CheckersError::ParseLayout {
                    line: row + 1,
                    message: format!("expected {} columns, found {}", COLS, cells.len()),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(ch, row, col).ok_or_else(|| CheckersError::ParseLayout {
                        line: row + 1,
                        message: format!("unknown piece '{}'", ch),
                    })?;
                if !is_playable(row, col) {
                    return Err(CheckersError::ParseLayout {
                        line: row + 1,
                        message: format!("piece on light square {}", Square::new(row, col)),
                    });
                }
                board.set_piece(piece);
            }
        }

        Ok(board)
    }

    pub fn to_layout(&self) -> String {
        let mut layout = String::with_capacity(ROWS * (COLS + 1));
        for (r, row) in self.grid.iter().enumerate() {
            for cell in row {
                layout.push(cell.map_or('.', |piece| piece.to_char()));
            }
            if r < ROWS - 1 {
                layout.push('\n');
            }
        }
        layout
    }

    fn check_bounds(row: usize, col: usize) -> CheckersResult<()> {
        if row < ROWS && col < COLS {
            Ok(())
        } else {
            Err(CheckersError::InvalidCoordinate { row, col })
        }
    }

    pub fn get_piece(&self, row: usize, col: usize) -> CheckersResult<Option<Piece>> {
        Self::check_bounds(row, col)?;
        Ok(self.grid[row][col])
    }

    /// Every piece of `player`, scanned row by row.
    pub fn get_all_pieces(&self, player: Player) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.player == player)
            .copied()
            .collect()
    }

    pub fn pieces_left(&self, player: Player) -> u32 {
        self.pieces_left[player.get_idx()]
    }

    pub fn kings(&self, player: Player) -> u32 {
        self.kings[player.get_idx()]
    }

    /// Moves `piece` to `(row, col)` and crowns it on either edge row.
    ///
    /// Returns the piece as it stands after the move. Crowning an existing
    /// king again leaves the king count unchanged.
    pub fn move_piece(&mut self, piece: &Piece, row: usize, col: usize) -> CheckersResult<Piece> {
        Self::check_bounds(piece.row, piece.col)?;
        Self::check_bounds(row, col)?;
        let from = piece.square();
        let to = Square::new(row, col);

        let mut moving = match self.grid[from.row][from.col] {
            Some(current) if current.player == piece.player => current,
            _ => return Err(CheckersError::NoPieceAtSquare { square: from }),
        };
        if self.grid[row][col].is_some() {
            return Err(CheckersError::IllegalMove { from, to });
        }

        self.grid[from.row][from.col] = None;
        moving.move_to(row, col);

        if (row == ROWS - 1 || row == 0) && !moving.king {
            moving.make_king();
            self.kings[moving.player.get_idx()] += 1;
            debug!("{:?} piece crowned at {}", moving.player, to);
        }

        self.grid[row][col] = Some(moving);
        debug!("{:?} moved {} -> {}", moving.player, from, to);
        Ok(moving)
    }

    /// Clears the cells of captured pieces and updates the counters.
    ///
    /// All coordinates are checked before anything is cleared. A cell that is
    /// already empty is skipped. Only the live-piece counter drops; the king
    /// counter keeps every crowning, as the evaluation expects.
    pub fn remove(&mut self, pieces: &[Piece]) -> CheckersResult<()> {
        for piece in pieces {
            Self::check_bounds(piece.row, piece.col)?;
        }

        for piece in pieces {
            let Some(removed) = self.grid[piece.row][piece.col].take() else {
                continue;
            };
            self.pieces_left[removed.player.get_idx()] -= 1;
            debug!("{:?} piece removed from {}", removed.player, removed.square());
        }
        Ok(())
    }

    /// Plays a move picked from [`Board::get_valid_moves`], removing whatever
    /// it jumped.
    ///
    /// Nothing changes unless every captured square holds an opposing piece.
    pub fn apply(&mut self, mv: &Move) -> CheckersResult<Piece> {
        for captured in &mv.captured {
            match self.get_piece(captured.row, captured.col)? {
                Some(current) if current.player != mv.piece.player => {}
                _ => return Err(CheckersError::NoPieceAtSquare { square: captured.square() }),
            }
        }

        let moved = self.move_piece(&mv.piece, mv.to.row, mv.to.col)?;
        self.remove(&mv.captured)?;
        Ok(moved)
    }

    /// The side that has captured every opposing piece, if any.
    ///
    /// A side left without legal moves is not reported here.
    pub fn winner(&self) -> Option<Player> {
        if self.pieces_left(Player::BOTTOM) == 0 {
            Some(Player::TOP)
        } else if self.pieces_left(Player::TOP) == 0 {
            Some(Player::BOTTOM)
        } else {
            None
        }
    }

    /// Material score from the top side's point of view.
    pub fn evaluate(&self) -> f64 {
        evaluate::evaluate(self, &Config::default())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "(White: {} [{} kings], Red: {} [{} kings])",
            self.pieces_left(Player::White),
            self.kings(Player::White),
            self.pieces_left(Player::Red),
            self.kings(Player::Red)
        )?;
        writeln!(f, "  +-----------------+")?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "{} | ", r)?;
            for cell in row {
                write!(f, "{} ", cell.map_or('.', |piece| piece.to_char()))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    0 1 2 3 4 5 6 7")
    }
}
