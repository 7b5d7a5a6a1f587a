//! Checkers as an adversarial search problem.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::games::checkers::board::Board;
use crate::games::checkers::moves::{valid_moves, CheckersMove};
use crate::games::Player;
use crate::search::problem::{AdversarialProblem, State, Successor};

/// Default ply limit for checkers searches.
pub const DEFAULT_MAX_LEVEL: u32 = 30;

/// Checkers seen from the side the solver plays.
///
/// The side to move is `first_mover` on a board nobody has moved on yet,
/// otherwise the opponent of whoever moved last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersProblem {
    /// Side whose wins score `1.0`.
    pub computer: Player,
    /// Side to move on a fresh board.
    pub first_mover: Player,
    /// Deepest level the solver expands.
    pub max_level: u32,
}

impl Default for CheckersProblem {
    fn default() -> Self {
        Self {
            computer: Player::One,
            first_mover: Player::One,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl CheckersProblem {
    /// Builder method: the side the solver plays.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Builder method: the side that opens.
    pub fn with_first_mover(mut self, first_mover: Player) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Builder method: the ply limit.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// The side to move on `board`.
    pub fn player_to_move(&self, board: &Board) -> Player {
        board
            .last_player()
            .map_or(self.first_mover, Player::opponent)
    }
}

impl AdversarialProblem for CheckersProblem {
    type State = Board;
    type Action = CheckersMove;

    fn max_level(&self) -> u32 {
        self.max_level
    }

    fn successors(&self, board: &Board) -> Result<Vec<Successor<CheckersMove, Board>>> {
        let player = self.player_to_move(board);
        valid_moves(board, player)?
            .into_iter()
            .map(|action| {
                let next = action.execute(board)?.with_level(board.level() + 1);
                Ok(Successor::new(action, next))
            })
            .collect()
    }

    fn is_terminal(&self, board: &Board) -> Result<bool> {
        if board.has_won(Player::One) || board.has_won(Player::Two) {
            return Ok(true);
        }
        Ok(valid_moves(board, Player::One)?.is_empty() && valid_moves(board, Player::Two)?.is_empty())
    }

    fn utility(&self, board: &Board) -> Result<f64> {
        if board.has_won(self.computer) {
            return Ok(1.0);
        }
        if board.has_won(self.computer.opponent()) {
            return Ok(-1.0);
        }
        if valid_moves(board, Player::One)?.is_empty() && valid_moves(board, Player::Two)?.is_empty() {
            return Ok(0.0);
        }
        Err(Error::NotTerminal)
    }
}
