//! Peg solitaire as an exhaustive search problem.

use crate::error::Result;
use crate::games::peg_board::board::{Jump, PegBoard};
use crate::search::problem::{ExhaustiveProblem, State, Successor};

/// Clear as many pegs as possible from a starting board.
#[derive(Debug, Clone)]
pub struct PegBoardProblem {
    initial: PegBoard,
}

impl PegBoardProblem {
    /// Create a problem starting from `initial`.
    pub fn new(initial: PegBoard) -> Self {
        Self { initial }
    }

    /// Every legal jump on `board`, by ascending source then landing vertex.
    pub fn available_jumps(&self, board: &PegBoard) -> Result<Vec<Jump>> {
        let mut jumps = Vec::new();
        for from in board.pegs() {
            for to in 0..board.vertex_count() {
                let Some(over) = board.adjacency().between(from, to)? else {
                    continue;
                };
                if board.has_peg(over)? && !board.has_peg(to)? {
                    jumps.push(Jump { from, over, to });
                }
            }
        }
        Ok(jumps)
    }
}

impl ExhaustiveProblem for PegBoardProblem {
    type State = PegBoard;
    type Action = Jump;

    fn initial_state(&self) -> &PegBoard {
        &self.initial
    }

    fn successors(&self, board: &PegBoard) -> Result<Vec<Successor<Jump, PegBoard>>> {
        self.available_jumps(board)?
            .into_iter()
            .map(|jump| {
                let next = board.execute_jump(&jump)?.with_level(board.level() + 1);
                Ok(Successor::new(jump, next))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_jumps() {
        let board = PegBoard::standard().unwrap();
        let problem = PegBoardProblem::new(board.clone());
        let successors = problem.successors(&board).unwrap();

        assert_eq!(
            successors.iter().map(|s| s.action).collect::<Vec<_>>(),
            vec![Jump { from: 3, over: 1, to: 0 }, Jump { from: 5, over: 2, to: 0 }]
        );
        assert!(successors.iter().all(|s| s.state.level() == 1));
        assert!(successors.iter().all(|s| s.state.peg_count() == 13));
    }

    #[test]
    fn test_no_jumps_without_neighbours() {
        let board = PegBoard::empty().unwrap().with_peg(7, true).unwrap();
        let problem = PegBoardProblem::new(board.clone());
        assert!(problem.successors(&board).unwrap().is_empty());
    }
}
