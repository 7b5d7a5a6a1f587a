//! Minimax with alpha-beta pruning.
//!
//! The solver alternates MAX layers (the computer) and MIN layers (the
//! opponent), depth-first, in the order the problem lists successors.
//! Two refinements sit on top of plain alpha-beta:
//!
//! - **Transposition table**: the value of every expanded state is cached
//!   for the rest of the solve; a later visit of the same state returns the
//!   cached value without expanding it again.
//! - **Level cutoff**: a successor whose level exceeds the maximum level is
//!   skipped. The node keeps whatever value it has backed up so far; there
//!   is no static evaluator to substitute.
//!
//! The solver is generic over any problem that implements
//! [`AdversarialProblem`].

use std::time::Instant;

use log::{debug, trace};

use crate::error::Result;
use crate::search::config::{MinimaxConfig, SearchStats};
use crate::search::problem::{AdversarialProblem, State};
use crate::search::storage::TranspositionTable;

/// Outcome of [`MinimaxSolver::solve_for_best_action`].
#[derive(Debug, Clone)]
pub struct MinimaxResult<A> {
    /// Whether a best action was found.
    pub solved: bool,
    /// The best action for the computer, if any.
    pub action: Option<A>,
    /// Backed-up minimax value of the chosen action.
    pub value: f64,
    /// Statistics of the solve.
    pub stats: SearchStats,
}

/// The minimax solver.
///
/// # Example
/// ```
/// use game_search::games::tic_tac_toe::{TicTacToe, TicTacToeBoard};
/// use game_search::search::{MinimaxConfig, MinimaxSolver};
///
/// let mut solver = MinimaxSolver::new(TicTacToe::new(), MinimaxConfig::without_cache());
/// let result = solver.solve_for_best_action(&TicTacToeBoard::new()).unwrap();
///
/// assert!(result.solved);
/// assert_eq!(result.value, 0.0); // perfect play is a draw
/// ```
pub struct MinimaxSolver<P: AdversarialProblem> {
    /// The game being solved.
    problem: P,

    /// Configuration for the solver.
    config: MinimaxConfig,

    /// Values of expanded states, cleared per solve.
    table: TranspositionTable<P::State>,

    /// Statistics of the current or last solve.
    stats: SearchStats,

    /// Configured level override, or the problem's maximum level.
    max_level: u32,
}

impl<P: AdversarialProblem> MinimaxSolver<P> {
    /// Create a new solver for the given problem.
    pub fn new(problem: P, config: MinimaxConfig) -> Self {
        let max_level = config.max_level.unwrap_or_else(|| problem.max_level());
        Self {
            problem,
            config,
            table: TranspositionTable::new(),
            stats: SearchStats::new(),
            max_level,
        }
    }

    /// Find the best action for the computer at `state`.
    ///
    /// The root is a MAX layer that also remembers which successor produced
    /// the running maximum. The first evaluated successor is always taken; a
    /// later one replaces it only when strictly better, so the first of
    /// several equally good actions wins, even when every branch backs up
    /// `-inf` from the level cutoff. A root without successors within the
    /// maximum level yields `solved = false`.
    ///
    /// # Errors
    /// Propagates errors from the problem, such as a utility request for a
    /// state the problem does not consider terminal.
    pub fn solve_for_best_action(&mut self, state: &P::State) -> Result<MinimaxResult<P::Action>> {
        self.table.clear();
        self.stats = SearchStats::new();

        debug!(
            "minimax solve from level {} (max level {}, transposition table {})",
            state.level(),
            self.max_level,
            self.config.use_transposition_table
        );

        let start_time = Instant::now();
        self.stats.record_depth(state.level());

        let mut v = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_action = None;

        for successor in self.problem.successors(state)? {
            if successor.state.level() > self.max_level {
                continue;
            }

            let value = self.min_value(&successor.state, alpha, beta)?;
            if best_action.is_none() || value > v {
                v = value;
                best_action = Some(successor.action);
            }
            if v >= beta {
                break;
            }
            alpha = alpha.max(v);
        }

        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        debug!(
            "minimax visited {} states in {:.3}s (value {}, {} cached)",
            self.stats.visited_states,
            self.stats.elapsed_seconds,
            v,
            self.table.len()
        );

        Ok(MinimaxResult {
            solved: best_action.is_some(),
            action: best_action,
            value: v,
            stats: self.stats.clone(),
        })
    }

    /// MAX layer: value of `state` when the computer is to move.
    fn max_value(&mut self, state: &P::State, alpha: f64, beta: f64) -> Result<f64> {
        self.visit(state);

        if self.problem.is_terminal(state)? {
            return self.problem.utility(state);
        }
        if let Some(value) = self.probe(state) {
            return Ok(value);
        }

        let value = self.expand_max(state, alpha, beta)?;
        self.store(state, value);
        Ok(value)
    }

    /// MIN layer: value of `state` when the opponent is to move.
    fn min_value(&mut self, state: &P::State, alpha: f64, beta: f64) -> Result<f64> {
        self.visit(state);

        if self.problem.is_terminal(state)? {
            return self.problem.utility(state);
        }
        if let Some(value) = self.probe(state) {
            return Ok(value);
        }

        let value = self.expand_min(state, alpha, beta)?;
        self.store(state, value);
        Ok(value)
    }

    fn expand_max(&mut self, state: &P::State, mut alpha: f64, beta: f64) -> Result<f64> {
        let mut v = f64::NEG_INFINITY;
        for successor in self.problem.successors(state)? {
            if successor.state.level() > self.max_level {
                continue;
            }

            v = v.max(self.min_value(&successor.state, alpha, beta)?);
            if v >= beta {
                return Ok(v);
            }
            alpha = alpha.max(v);
        }
        Ok(v)
    }

    fn expand_min(&mut self, state: &P::State, alpha: f64, mut beta: f64) -> Result<f64> {
        let mut v = f64::INFINITY;
        for successor in self.problem.successors(state)? {
            if successor.state.level() > self.max_level {
                continue;
            }

            v = v.min(self.max_value(&successor.state, alpha, beta)?);
            if v <= alpha {
                return Ok(v);
            }
            beta = beta.min(v);
        }
        Ok(v)
    }

    fn visit(&mut self, state: &P::State) {
        self.stats.visited_states += 1;
        self.stats.record_depth(state.level());
    }

    fn probe(&mut self, state: &P::State) -> Option<f64> {
        if !self.config.use_transposition_table {
            return None;
        }
        let value = self.table.probe(state)?;
        self.stats.transposition_hits += 1;
        trace!("transposition hit at level {}: {}", state.level(), value);
        Some(value)
    }

    fn store(&mut self, state: &P::State, value: f64) {
        if self.config.use_transposition_table {
            self.table.store(state, value);
        }
    }

    /// Get statistics of the last solve.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get reference to the problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Number of states cached by the last solve.
    pub fn cached_states(&self) -> usize {
        self.table.len()
    }
}
