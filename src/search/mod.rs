//! Generic search solvers.
//!
//! This module provides the problem abstraction and the two solvers that
//! run on top of it.
//!
//! # Overview
//!
//! A caller wraps a concrete initial state in a problem, picks a solver and
//! its configuration, and runs it. The solver repeatedly asks the problem
//! for successors and, for games, for terminal checks and utility values.
//! It never inspects game-specific fields.
//!
//! # Solvers
//!
//! - **Minimax** ([`MinimaxSolver`]): two-player zero-sum games. Alpha-beta
//!   pruning, an optional transposition table and a hard level cutoff.
//! - **Depth-first** ([`DepthFirstSolver`]): single-agent puzzles. Records
//!   every path that ends in a state without successors, skipping states
//!   (and equivalent transforms of states) that were already visited.
//!
//! # Example
//!
//! ```
//! use game_search::games::peg_board::{PegBoard, PegBoardProblem};
//! use game_search::search::{DepthFirstConfig, DepthFirstSolver};
//!
//! let problem = PegBoardProblem::new(PegBoard::standard().unwrap());
//! let mut solver = DepthFirstSolver::new(problem, DepthFirstConfig::default());
//! let result = solver.solve().unwrap();
//!
//! let best = result.best_by_key(|s| s.final_state.peg_count()).unwrap();
//! println!("{} pegs left after {} jumps", best.final_state.peg_count(), best.depth);
//! ```
//!
//! # Ordering
//!
//! Successor order is part of the contract. Minimax keeps the first action
//! that reaches the best value, and the depth-first solver records
//! solutions in the order it finds them.

pub mod config;
pub mod depth_first;
pub mod minimax;
pub mod problem;
pub mod storage;

// Re-export main types for convenient access
pub use config::{DepthFirstConfig, MinimaxConfig, SearchStats};
pub use depth_first::{DepthFirstResult, DepthFirstSolver, Solution};
pub use minimax::{MinimaxResult, MinimaxSolver};
pub use problem::{Action, AdversarialProblem, ExhaustiveProblem, Printer, State, Successor};
pub use storage::{TranspositionTable, VisitedSet};
