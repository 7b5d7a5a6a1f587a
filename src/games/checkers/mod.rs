//! 8×8 checkers.
//!
//! ## Rules
//!
//! - Pieces stand on dark squares only. Player one starts on rows 1-3 and
//!   moves up the board; player two starts on rows 6-8 and moves down.
//! - Men move one square diagonally forward; kings move in all four
//!   diagonal directions.
//! - A piece next to an opponent with an empty square behind it may jump,
//!   removing the opponent. Jumps chain from the landing square.
//! - A man that ends a move on the opponent's back row is crowned.
//! - A side with no pieces left has lost. When neither side can move, the
//!   game is a draw.
//!
//! Capturing is not compulsory, but the generator lists captures first so
//! the solver tries them first.

pub mod board;
pub mod moves;
pub mod problem;

pub use board::{Board, BoardPrinter, Piece, Square, BOARD_SIZE};
pub use moves::{valid_moves, CheckersMove, Jump};
pub use problem::{CheckersProblem, DEFAULT_MAX_LEVEL};

use crate::error::Result;
use crate::games::Player;

impl Board {
    /// Every legal move for `player` on this board, captures first.
    pub fn valid_moves(&self, player: Player) -> Result<Vec<CheckersMove>> {
        valid_moves(self, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MinimaxConfig, MinimaxSolver};

    /// Player one to move, able to capture at once and again two plies
    /// later.
    fn near_endgame() -> Board {
        Board::empty()
            .place("a1", Piece::man(Player::One))
            .unwrap()
            .place("b2", Piece::man(Player::Two))
            .unwrap()
            .place("h4", Piece::man(Player::Two))
            .unwrap()
            .place("f2", Piece::man(Player::One))
            .unwrap()
    }

    fn opening_capture() -> CheckersMove {
        CheckersMove::Jump(Jump {
            from: "a1".parse().unwrap(),
            over: "b2".parse().unwrap(),
            to: "c3".parse().unwrap(),
        })
    }

    #[test]
    fn test_near_endgame_with_transposition_table() {
        let mut solver = MinimaxSolver::new(CheckersProblem::default(), MinimaxConfig::default());
        let result = solver.solve_for_best_action(&near_endgame()).unwrap();

        assert!(result.solved);
        assert_eq!(result.action, Some(opening_capture()));
        assert!(result.stats.visited_states > 0);
        assert!(solver.cached_states() > 0);
    }

    #[test]
    fn test_near_endgame_without_transposition_table() {
        // Uncached search grows quickly with depth; a shallower cutoff
        // still sees the forced win.
        let problem = CheckersProblem::default().with_max_level(12);
        let mut solver = MinimaxSolver::new(problem, MinimaxConfig::without_cache());
        let result = solver.solve_for_best_action(&near_endgame()).unwrap();

        assert!(result.solved);
        assert_eq!(result.action, Some(opening_capture()));
        assert_eq!(result.value, 1.0);
        assert_eq!(result.stats.transposition_hits, 0);
        assert!(result.stats.max_depth <= 12);
    }

    #[test]
    fn test_no_moves_is_unsolved() {
        let board = Board::empty()
            .place("b8", Piece::man(Player::One))
            .unwrap()
            .place("a1", Piece::man(Player::Two))
            .unwrap();
        let mut solver = MinimaxSolver::new(CheckersProblem::default(), MinimaxConfig::default());
        let result = solver.solve_for_best_action(&board).unwrap();

        assert!(!result.solved);
        assert!(result.action.is_none());
    }

    #[test]
    fn test_board_valid_moves_matches_generator() {
        let board = Board::standard();
        assert_eq!(
            board.valid_moves(Player::Two).unwrap(),
            valid_moves(&board, Player::Two).unwrap()
        );
    }
}
