//! Evaluates a board position and returns a score.

use crate::board::Board;
use crate::config::Config;
use crate::constants::Player;

/// Material balance from `Player::TOP`'s point of view.
///
/// Each man counts one point and each king `config.king_bonus` on top of
/// that, so the score is zero-sum between the two sides.
pub fn evaluate(board: &Board, config: &Config) -> f64 {
    let top = board.pieces_left(Player::TOP) as f64;
    let bottom = board.pieces_left(Player::BOTTOM) as f64;
    let top_kings = board.kings(Player::TOP) as f64;
    let bottom_kings = board.kings(Player::BOTTOM) as f64;

    top - bottom + (top_kings * config.king_bonus - bottom_kings * config.king_bonus)
}
