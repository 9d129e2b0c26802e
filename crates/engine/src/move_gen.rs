//! Move generation: simple moves and capture chains share one diagonal walk.

use crate::board::Board;
use crate::constants::{Player, ROWS, is_on_board};
use crate::piece::Piece;
use crate::r#move::{Move, MoveMap, Square};
use log::trace;

/// Rows a single walk may look ahead, counting the starting row.
const WINDOW: isize = 3;

/// One diagonal walk: rows `start..stop` (exclusive) stepping `row_step`,
/// beginning at column `col` and stepping `col_step`.
#[derive(Debug, Clone, Copy)]
struct Ray {
    start: isize,
    stop: isize,
    row_step: isize,
    col: isize,
    col_step: isize,
}

impl Ray {
    /// A ray leaving `(row, col)` diagonally, limited to the look-ahead
    /// window and clipped to the board.
    fn leaving(row: isize, col: isize, row_step: isize, col_step: isize) -> Self {
        let stop = if row_step < 0 {
            (row - WINDOW).max(-1)
        } else {
            (row + WINDOW).min(ROWS as isize)
        };
        Self {
            start: row + row_step,
            stop,
            row_step,
            col: col + col_step,
            col_step,
        }
    }

    fn contains(&self, row: isize) -> bool {
        if self.row_step > 0 { row < self.stop } else { row > self.stop }
    }
}

impl Board {
    /// Every destination reachable by `piece`, mapped to the pieces it jumps.
    ///
    /// Men walk toward the opponent, kings both ways. The diagonal walks are
    /// merged toward row 0 first, then toward the last row, left before right
    /// each time; a later walk reaching the same square overwrites the earlier
    /// capture list.
    pub fn get_valid_moves(&self, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.row as isize;
        let col = piece.col as isize;

        let mut row_steps = Vec::with_capacity(2);
        if piece.player == Player::BOTTOM || piece.king {
            row_steps.push(Player::BOTTOM.forward());
        }
        if piece.player == Player::TOP || piece.king {
            row_steps.push(Player::TOP.forward());
        }

        for row_step in row_steps {
            for col_step in [-1, 1] {
                let ray = Ray::leaving(row, col, row_step, col_step);
                moves.extend(self.traverse(ray, piece.player, &[]));
            }
        }

        trace!("{:?} at {}: {} destinations", piece.player, piece.square(), moves.len());
        moves
    }

    /// Walks one diagonal. `skipped` is the capture chain that led here; when
    /// it is non-empty only a further jump counts as a move.
    fn traverse(&self, ray: Ray, player: Player, skipped: &[Piece]) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut last: Option<Piece> = None;
        let mut row = ray.start;
        let mut col = ray.col;

        while ray.contains(row) {
            if !is_on_board(row, col) {
                break;
            }

            match self.grid[row as usize][col as usize] {
                None => {
                    if !skipped.is_empty() && last.is_none() {
                        break;
                    }

                    let captured: Vec<Piece> = last.iter().chain(skipped).copied().collect();
                    moves.insert(Square::new(row as usize, col as usize), captured.clone());

                    if last.is_some() {
                        for col_step in [-1, 1] {
                            let next = Ray::leaving(row, col, ray.row_step, col_step);
                            moves.extend(self.traverse(next, player, &captured));
                        }
                    }
                    break;
                }
                Some(current) if current.player == player => break,
                Some(current) => {
                    // Two pieces in a row cannot be jumped.
                    if last.is_some() {
                        break;
                    }
                    last = Some(current);
                }
            }

            row += ray.row_step;
            col += ray.col_step;
        }

        moves
    }

    /// All moves for every piece of `player`, pieces in row-major order and
    /// destinations sorted within each piece.
    pub fn valid_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.get_all_pieces(player) {
            let mut destinations: Vec<_> = self.get_valid_moves(&piece).into_iter().collect();
            destinations.sort_by_key(|(to, _)| *to);
            moves.extend(
                destinations
                    .into_iter()
                    .map(|(to, captured)| Move::new(piece, to, captured)),
            );
        }
        moves
    }

    pub fn has_moves(&self, player: Player) -> bool {
        self.get_all_pieces(player)
            .iter()
            .any(|piece| !self.get_valid_moves(piece).is_empty())
    }
}
