//! Game and puzzle implementations for the search solvers.
//!
//! These serve as:
//!
//! 1. **Validation**: small positions with known outcomes check that the
//!    solvers behave.
//!
//! 2. **Examples**: show how to implement the problem traits for new games.
//!
//! 3. **Benchmarks**: provide standard positions for performance testing.
//!
//! ## Available Games
//!
//! - [`checkers`]: 8×8 checkers with multi-jumps and kings (minimax)
//! - [`peg_board`]: triangular peg solitaire (depth-first)
//! - [`tic_tac_toe`]: noughts and crosses (minimax)
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define the state and action types
//! 3. Implement [`AdversarialProblem`] or [`ExhaustiveProblem`]
//! 4. Add tests that verify expected behavior
//!
//! [`AdversarialProblem`]: crate::search::AdversarialProblem
//! [`ExhaustiveProblem`]: crate::search::ExhaustiveProblem

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod checkers;
pub mod peg_board;
pub mod tic_tac_toe;

/// One side of a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first by default; sits at the bottom of a checkers board.
    One,
    /// Sits at the top of a checkers board.
    Two,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
