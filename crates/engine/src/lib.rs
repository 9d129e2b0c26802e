pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluate;
pub mod move_gen;
pub mod piece;
pub mod r#move;

#[cfg(test)]
mod tests {
    use super::board::Board;
    use super::constants::{COLS, PIECES_PER_SIDE, Player, ROWS};
    use super::error::CheckersError;
    use super::piece::Piece;
    use super::r#move::{Move, Square};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    const START_LAYOUT: &str = "\
.w.w.w.w
w.w.w.w.
.w.w.w.w
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.";

    fn piece_at(board: &Board, row: usize, col: usize) -> Piece {
        board.get_piece(row, col).unwrap().unwrap()
    }

    /// Grid, stored coordinates and counters all agree. Captured kings stay
    /// in the king count, so it can only exceed the kings on the grid.
    fn assert_consistent(board: &Board) {
        for player in [Player::White, Player::Red] {
            let pieces = board.get_all_pieces(player);
            assert_eq!(pieces.len() as u32, board.pieces_left(player));
            assert!(pieces.iter().filter(|p| p.king).count() as u32 <= board.kings(player));
        }
        for row in 0..ROWS {
            for col in 0..COLS {
                if let Some(piece) = board.get_piece(row, col).unwrap() {
                    assert_eq!(piece.square(), Square::new(row, col));
                }
            }
        }
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        for player in [Player::TOP, Player::BOTTOM] {
            assert_eq!(board.pieces_left(player), PIECES_PER_SIDE);
            assert_eq!(board.kings(player), 0);
        }
        assert_eq!(board.winner(), None);
        assert_eq!(board.evaluate(), 0.0);
        assert_eq!(board.to_layout(), START_LAYOUT);
        assert_eq!(Board::from_layout(START_LAYOUT).unwrap(), board);

        let white = board.get_all_pieces(Player::White);
        assert_eq!(white[0].square(), Square::new(0, 1));
        assert_eq!(white[11].square(), Square::new(2, 7));
        assert_consistent(&board);
    }

    #[test]
    fn test_make_move() {
        let mut board = Board::new();
        let piece = piece_at(&board, 5, 0);

        let moved = board.move_piece(&piece, 4, 1).unwrap();

        assert_eq!(moved.square(), Square::new(4, 1));
        assert_eq!(board.get_piece(4, 1).unwrap(), Some(moved));
        assert_eq!(board.get_piece(5, 0).unwrap(), None);
        assert_consistent(&board);
    }

    #[test]
    fn test_crowning_counts_each_piece_once() {
        let mut board = Board::from_layout(
            "\
........
..r.....
........
........
........
........
.w......
........",
        )
        .unwrap();

        let red = piece_at(&board, 1, 2);
        let king = board.move_piece(&red, 0, 1).unwrap();
        assert!(king.king);
        assert_eq!(board.kings(Player::Red), 1);

        let white = piece_at(&board, 6, 1);
        board.move_piece(&white, 7, 0).unwrap();
        assert_eq!(board.kings(Player::White), 1);

        // A king landing on an edge row again is not crowned twice.
        let king = board.move_piece(&king, 1, 2).unwrap();
        board.move_piece(&king, 0, 3).unwrap();
        assert_eq!(board.kings(Player::Red), 1);
        assert_eq!(board.evaluate(), 0.0);
        assert_consistent(&board);
    }

    #[test]
    fn test_illegal_moves_are_rejected() {
        let mut board = Board::new();
        let piece = piece_at(&board, 5, 0);

        assert_eq!(
            board.move_piece(&piece, 6, 1),
            Err(CheckersError::IllegalMove { from: Square::new(5, 0), to: Square::new(6, 1) })
        );
        assert_eq!(
            board.move_piece(&piece, 8, 1),
            Err(CheckersError::InvalidCoordinate { row: 8, col: 1 })
        );
        assert_eq!(board.get_piece(3, 9), Err(CheckersError::InvalidCoordinate { row: 3, col: 9 }));

        let ghost = Piece::new(4, 1, Player::Red);
        assert_eq!(
            board.move_piece(&ghost, 3, 0),
            Err(CheckersError::NoPieceAtSquare { square: Square::new(4, 1) })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_remove_and_winner() {
        let mut board = Board::from_layout(
            "\
........
........
...W....
........
.w......
r.r.....
........
........",
        )
        .unwrap();
        let captured = vec![piece_at(&board, 4, 1), piece_at(&board, 2, 3)];

        board.remove(&captured).unwrap();
        assert_eq!(board.pieces_left(Player::White), 0);
        assert_eq!(board.kings(Player::White), 1);
        assert_eq!(board.get_piece(4, 1).unwrap(), None);
        assert_eq!(board.winner(), Some(Player::Red));

        // Removing the same pieces again changes nothing.
        board.remove(&captured).unwrap();
        assert_eq!(board.pieces_left(Player::White), 0);
        assert_eq!(board.pieces_left(Player::Red), 2);

        let batch = [piece_at(&board, 5, 0), Piece::new(8, 0, Player::Red)];
        assert_eq!(
            board.remove(&batch),
            Err(CheckersError::InvalidCoordinate { row: 8, col: 0 })
        );
        assert_eq!(board.pieces_left(Player::Red), 2);

        let red = board.get_all_pieces(Player::Red);
        board.remove(&red).unwrap();
        assert_eq!(board.pieces_left(Player::Red), 0);
        assert_eq!(board.winner(), Some(Player::White));
    }

    #[test]
    fn test_captured_king_still_counts_in_evaluation() {
        let mut board = Board::from_layout(
            "\
........
........
...W....
........
.w......
r.r.....
........
........",
        )
        .unwrap();
        assert_eq!(board.evaluate(), 0.5);

        let king = piece_at(&board, 2, 3);
        board.remove(&[king]).unwrap();

        // 1 - 2 + 0.5 * (1 - 0)
        assert_eq!(board.pieces_left(Player::White), 1);
        assert_eq!(board.kings(Player::White), 1);
        assert_eq!(board.evaluate(), -0.5);
    }

    #[test]
    fn test_failed_apply_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();
        let red = piece_at(&board, 5, 0);
        let to = Square::new(4, 1);

        let off_board = Move::new(red, to, vec![Piece::new(9, 9, Player::White)]);
        assert_eq!(
            board.apply(&off_board),
            Err(CheckersError::InvalidCoordinate { row: 9, col: 9 })
        );
        assert_eq!(board, before);

        let empty_square = Move::new(red, to, vec![Piece::new(3, 0, Player::White)]);
        assert_eq!(
            board.apply(&empty_square),
            Err(CheckersError::NoPieceAtSquare { square: Square::new(3, 0) })
        );
        assert_eq!(board, before);

        let own_piece = Move::new(red, to, vec![piece_at(&board, 6, 1)]);
        assert_eq!(
            board.apply(&own_piece),
            Err(CheckersError::NoPieceAtSquare { square: Square::new(6, 1) })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_capture_chain() {
        let mut board = Board::from_layout(
            "\
........
..w.....
........
..w.....
........
....w...
.....r..
........",
        )
        .unwrap();
        let red = piece_at(&board, 6, 5);
        let moves = board.get_valid_moves(&red);
        let to = Square::new(0, 3);
        let mv = Move::new(red, to, moves[&to].clone());
        assert_eq!(mv.to_string(), "(6,5)x(0,3)");

        let moved = board.apply(&mv).unwrap();

        assert!(moved.king);
        assert_eq!(board.pieces_left(Player::White), 0);
        assert_eq!(board.winner(), Some(Player::Red));
        assert_eq!(board.evaluate(), -1.5);
        assert_consistent(&board);
    }

    #[test]
    fn test_bad_layouts() {
        let too_short = "........\n........";
        assert!(matches!(
            Board::from_layout(too_short),
            Err(CheckersError::ParseLayout { .. })
        ));

        let light_square = START_LAYOUT.replacen(".w", "w.", 1);
        assert!(matches!(
            Board::from_layout(&light_square),
            Err(CheckersError::ParseLayout { line: 1, .. })
        ));

        let unknown = START_LAYOUT.replacen('r', "x", 1);
        assert!(matches!(
            Board::from_layout(&unknown),
            Err(CheckersError::ParseLayout { line: 6, .. })
        ));
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            let mut player = Player::BOTTOM;

            for _ in 0..200 {
                if board.winner().is_some() {
                    break;
                }
                let moves = board.valid_moves(player);
                for mv in &moves {
                    assert!(mv.to.row < ROWS && mv.to.col < COLS);
                    assert_eq!(board.get_piece(mv.to.row, mv.to.col).unwrap(), None);
                    assert!(mv.captured.iter().all(|p| p.player == player.opponent()));
                }
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };

                let before = board.pieces_left(player.opponent());
                board.apply(mv).unwrap();
                assert_eq!(board.pieces_left(player.opponent()), before - mv.captured.len() as u32);
                assert_consistent(&board);
                player = player.opponent();
            }
        }
    }
}
