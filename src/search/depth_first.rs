//! Exhaustive depth-first enumeration of every finished path.
//!
//! Starting from the problem's initial state, the solver follows successors
//! depth-first. Any state without successors ends a path and is recorded as
//! a [`Solution`], whatever its quality; callers pick the solutions they care
//! about afterwards (for example the one leaving the fewest pegs).
//!
//! A visited set keeps the search from expanding a state twice. When
//! folding is enabled a state is also skipped if one of its equivalent
//! transforms was visited, so symmetric positions are explored once.

use std::time::Instant;

use log::debug;

use crate::error::Result;
use crate::search::config::{DepthFirstConfig, SearchStats};
use crate::search::problem::{ExhaustiveProblem, State, Successor};
use crate::search::storage::VisitedSet;

/// One root-to-leaf path found by the depth-first solver.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    /// The state the search started from.
    pub initial_state: S,
    /// Every step taken, in order.
    pub successors: Vec<Successor<A, S>>,
    /// The state at the end of the path.
    pub final_state: S,
    /// Number of steps on the path.
    pub depth: usize,
}

impl<S: Clone, A> Solution<S, A> {
    /// Build a solution from its starting state and path.
    ///
    /// An empty path ends where it started.
    pub fn new(initial_state: S, successors: Vec<Successor<A, S>>) -> Self {
        let final_state = successors
            .last()
            .map(|s| s.state.clone())
            .unwrap_or_else(|| initial_state.clone());
        let depth = successors.len();
        Self {
            initial_state,
            successors,
            final_state,
            depth,
        }
    }

    /// The actions of the path, in order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.successors.iter().map(|s| &s.action)
    }
}

/// Outcome of [`DepthFirstSolver::solve`].
#[derive(Debug, Clone)]
pub struct DepthFirstResult<S, A> {
    /// Whether any path was completed.
    pub solved: bool,
    /// Every completed path, in discovery order.
    pub solutions: Vec<Solution<S, A>>,
    /// Statistics of the solve.
    pub stats: SearchStats,
}

impl<S, A> DepthFirstResult<S, A> {
    /// The first solution minimizing `key`.
    pub fn best_by_key<K, F>(&self, key: F) -> Option<&Solution<S, A>>
    where
        K: Ord,
        F: FnMut(&&Solution<S, A>) -> K,
    {
        self.solutions.iter().min_by_key(key)
    }
}

/// The depth-first solver.
pub struct DepthFirstSolver<P: ExhaustiveProblem> {
    problem: P,
    config: DepthFirstConfig,
    visited: VisitedSet<P::State>,
    solutions: Vec<Solution<P::State, P::Action>>,
    stats: SearchStats,
}

impl<P: ExhaustiveProblem> DepthFirstSolver<P> {
    /// Create a new solver for the given problem.
    pub fn new(problem: P, config: DepthFirstConfig) -> Self {
        Self {
            problem,
            config,
            visited: VisitedSet::new(),
            solutions: Vec::new(),
            stats: SearchStats::new(),
        }
    }

    /// Enumerate every finished path reachable from the initial state.
    ///
    /// # Errors
    /// Propagates errors from the problem's successor generation.
    pub fn solve(&mut self) -> Result<DepthFirstResult<P::State, P::Action>> {
        self.visited.clear();
        self.solutions.clear();
        self.stats = SearchStats::new();

        let start_time = Instant::now();
        let initial = self.problem.initial_state().clone();
        let mut path = Vec::new();

        self.solve_recursive(&initial, &initial, &mut path)?;

        self.stats.visited_states = self.visited.len();
        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        debug!(
            "depth-first search found {} solutions, visited {} states in {:.3}s",
            self.solutions.len(),
            self.stats.visited_states,
            self.stats.elapsed_seconds
        );

        let solutions = std::mem::take(&mut self.solutions);
        Ok(DepthFirstResult {
            solved: !solutions.is_empty(),
            solutions,
            stats: self.stats.clone(),
        })
    }

    fn solve_recursive(
        &mut self,
        initial: &P::State,
        state: &P::State,
        path: &mut Vec<Successor<P::Action, P::State>>,
    ) -> Result<()> {
        let successors = self.problem.successors(state)?;

        if successors.is_empty() {
            self.solutions.push(Solution::new(initial.clone(), path.clone()));
            return Ok(());
        }

        for successor in successors {
            if self.is_visited(&successor.state) {
                continue;
            }
            self.visited.insert(successor.state.clone());

            let next = successor.state.clone();
            path.push(successor);
            self.stats.record_depth(path.len() as u32);

            self.solve_recursive(initial, &next, path)?;
            path.pop();
        }

        Ok(())
    }

    fn is_visited(&self, state: &P::State) -> bool {
        if self.config.fold_equivalent_states {
            self.visited.contains_any(state, &state.transforms())
        } else {
            self.visited.contains(state)
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
    pub fn config(&self) -> &DepthFirstConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::problem::Action;
    use std::hash::{Hash, Hasher};

    /// Pile of stones; each move takes one or two.
    #[derive(Debug, Clone)]
    struct Pile {
        remaining: u32,
        level: u32,
    }

    impl PartialEq for Pile {
        fn eq(&self, other: &Self) -> bool {
            self.remaining == other.remaining
        }
    }

    impl Eq for Pile {}

    impl Hash for Pile {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.remaining.hash(state);
        }
    }

    impl State for Pile {
        fn level(&self) -> u32 {
            self.level
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Take(u32);

    impl Action for Take {}

    struct PileProblem {
        initial: Pile,
    }

    impl ExhaustiveProblem for PileProblem {
        type State = Pile;
        type Action = Take;

        fn initial_state(&self) -> &Pile {
            &self.initial
        }

        fn successors(&self, state: &Pile) -> Result<Vec<Successor<Take, Pile>>> {
            Ok((1..=2)
                .filter(|&n| n <= state.remaining)
                .map(|n| {
                    Successor::new(
                        Take(n),
                        Pile {
                            remaining: state.remaining - n,
                            level: state.level + 1,
                        },
                    )
                })
                .collect())
        }
    }

    /// Two counters that may be swapped freely.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Pair(u32, u32);

    impl State for Pair {
        fn level(&self) -> u32 {
            self.0 + self.1
        }

        fn transforms(&self) -> Vec<Self> {
            vec![Pair(self.1, self.0)]
        }
    }

    struct PairProblem {
        initial: Pair,
    }

    impl ExhaustiveProblem for PairProblem {
        type State = Pair;
        type Action = Take;

        fn initial_state(&self) -> &Pair {
            &self.initial
        }

        fn successors(&self, state: &Pair) -> Result<Vec<Successor<Take, Pair>>> {
            if state.0 + state.1 >= 2 {
                return Ok(vec![]);
            }
            Ok(vec![
                Successor::new(Take(0), Pair(state.0 + 1, state.1)),
                Successor::new(Take(1), Pair(state.0, state.1 + 1)),
            ])
        }
    }

    #[test]
    fn test_visited_states_are_not_expanded_twice() {
        let problem = PileProblem {
            initial: Pile {
                remaining: 4,
                level: 0,
            },
        };
        let mut solver = DepthFirstSolver::new(problem, DepthFirstConfig::default());
        let result = solver.solve().unwrap();

        // Only the all-ones path survives; every other path rejoins it.
        assert!(result.solved);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.stats.visited_states, 4);
        assert_eq!(result.stats.max_depth, 4);

        let solution = &result.solutions[0];
        assert_eq!(solution.depth, 4);
        assert_eq!(solution.final_state.remaining, 0);
        assert!(solution.actions().all(|a| *a == Take(1)));
    }

    #[test]
    fn test_initial_dead_end_is_a_solution() {
        let problem = PileProblem {
            initial: Pile {
                remaining: 0,
                level: 0,
            },
        };
        let mut solver = DepthFirstSolver::new(problem, DepthFirstConfig::default());
        let result = solver.solve().unwrap();

        assert!(result.solved);
        assert_eq!(result.solutions[0].depth, 0);
        assert_eq!(result.solutions[0].final_state.remaining, 0);
    }

    #[test]
    fn test_folding_skips_equivalent_states() {
        let mut folded = DepthFirstSolver::new(
            PairProblem { initial: Pair(0, 0) },
            DepthFirstConfig::default(),
        );
        let result = folded.solve().unwrap();
        assert_eq!(result.solutions.len(), 2);
        assert_eq!(result.stats.visited_states, 3);

        let mut unfolded = DepthFirstSolver::new(
            PairProblem { initial: Pair(0, 0) },
            DepthFirstConfig::default().with_folding(false),
        );
        let result = unfolded.solve().unwrap();
        assert_eq!(result.solutions.len(), 3);
        assert_eq!(result.stats.visited_states, 5);
    }

    #[test]
    fn test_best_by_key_picks_first_minimum() {
        let mut solver = DepthFirstSolver::new(
            PairProblem { initial: Pair(0, 0) },
            DepthFirstConfig::default(),
        );
        let result = solver.solve().unwrap();

        let best = result.best_by_key(|s| s.final_state.1).unwrap();
        assert_eq!(best.final_state, Pair(2, 0));
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let mut solver = DepthFirstSolver::new(
            PairProblem { initial: Pair(0, 0) },
            DepthFirstConfig::default(),
        );
        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();
        assert_eq!(first.solutions.len(), second.solutions.len());
        assert_eq!(first.stats.visited_states, second.stats.visited_states);
    }
}
