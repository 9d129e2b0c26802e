//! Random self-play driver exercising the engine from the start position.

use anyhow::{Context, Result};
use engine::board::Board;
use engine::constants::Player;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Every opposing piece was captured.
    Captured(Player),
    /// The named side had no legal move on its turn.
    Stuck(Player),
    /// The ply limit was reached.
    Unfinished,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Captured(winner) => write!(f, "{:?} wins by capture", winner),
            GameResult::Stuck(loser) => {
                write!(f, "{:?} is blocked, {:?} wins", loser, loser.opponent())
            }
            GameResult::Unfinished => write!(f, "No result"),
        }
    }
}

pub struct Outcome {
    pub board: Board,
    pub result: GameResult,
    pub plies: usize,
}

/// Plays random legal moves for both sides, bottom side first.
pub fn play(seed: Option<u64>, max_plies: usize, verbose: bool) -> Result<Outcome> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Self-play seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut board = Board::new();
    let mut player = Player::BOTTOM;

    for ply in 0..max_plies {
        if let Some(winner) = board.winner() {
            return Ok(Outcome { board, result: GameResult::Captured(winner), plies: ply });
        }

        let moves = board.valid_moves(player);
        let Some(mv) = moves.choose(&mut rng) else {
            return Ok(Outcome { board, result: GameResult::Stuck(player), plies: ply });
        };
        debug!("{:?} picks {} out of {} moves", player, mv, moves.len());

        board
            .apply(mv)
            .with_context(|| format!("applying {} for {:?}", mv, player))?;

        if verbose {
            println!("{}. {:?} {}", ply + 1, player, mv);
            println!("{}", board);
        }
        player = player.opponent();
    }

    let result = match board.winner() {
        Some(winner) => GameResult::Captured(winner),
        None => GameResult::Unfinished,
    };
    Ok(Outcome { board, result, plies: max_plies })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_game() {
        let first = play(Some(7), 60, false).unwrap();
        let second = play(Some(7), 60, false).unwrap();
        assert_eq!(first.board, second.board);
        assert_eq!(first.result, second.result);
        assert_eq!(first.plies, second.plies);
    }

    #[test]
    fn test_ply_limit() {
        let outcome = play(Some(1), 0, false).unwrap();
        assert_eq!(outcome.result, GameResult::Unfinished);
        assert_eq!(outcome.board, Board::new());
    }
}
