//! # Game Search
//!
//! Generic search solvers for two-player games and single-player puzzles.
//!
//! ## Features
//!
//! - **Generic problem traits**: any game implementing [`AdversarialProblem`]
//!   or [`ExhaustiveProblem`] plugs into the matching solver
//! - **Minimax**: alpha-beta pruning, an optional transposition table and a
//!   hard level cutoff
//! - **Depth-first enumeration**: every finished path, with a visited set
//!   that also folds symmetric states
//! - **Games**: checkers with multi-jumps and kings, triangular peg
//!   solitaire, tic-tac-toe
//!
//! ## Quick Start
//!
//! ```
//! use game_search::games::checkers::{Board, CheckersProblem};
//! use game_search::search::{MinimaxConfig, MinimaxSolver};
//!
//! let problem = CheckersProblem::default().with_max_level(4);
//! let mut solver = MinimaxSolver::new(problem, MinimaxConfig::default());
//!
//! let result = solver.solve_for_best_action(&Board::standard()).unwrap();
//! assert!(result.solved);
//! println!("best opening: {}", result.action.unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`search`]: problem traits and the two solvers
//! - [`games`]: game and puzzle implementations
//! - [`error`]: the crate error type
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────┐     ┌────────────────────────────┐
//! │       MinimaxSolver        │     │     DepthFirstSolver       │
//! │  - alpha-beta pruning      │     │  - path enumeration        │
//! │  - transposition table     │     │  - visited set + folding   │
//! └────────────────────────────┘     └────────────────────────────┘
//!               │                                  │
//!               │ AdversarialProblem               │ ExhaustiveProblem
//!               ▼                                  ▼
//!      ┌─────────────┬─────────────┐         ┌───────────┐
//!      │  Checkers   │ Tic-tac-toe │         │ Peg board │
//!      └─────────────┴─────────────┘         └───────────┘
//! ```

#![warn(missing_docs)]

pub mod error;

/// Game and puzzle implementations.
pub mod games;

/// Problem traits and solvers.
pub mod search;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use search::{
    AdversarialProblem, DepthFirstConfig, DepthFirstSolver, ExhaustiveProblem, MinimaxConfig,
    MinimaxSolver, SearchStats, State, Successor,
};
