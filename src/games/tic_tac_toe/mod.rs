//! Tic-tac-toe.
//!
//! Small enough to search completely, which makes it a handy check that the
//! minimax solver plays perfectly: from the empty board the game value is a
//! draw. Cells are numbered 0-8 row by row from the top left.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::games::Player;
use crate::search::problem::{Action, AdversarialProblem, Printer, State, Successor};

/// Number of cells.
pub const CELL_COUNT: usize = 9;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe position.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeBoard {
    cells: [Option<Player>; CELL_COUNT],
    level: u32,
}

impl TicTacToeBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: mark `index` for `player`.
    pub fn with_mark(mut self, index: usize, player: Player) -> Result<Self> {
        check(index)?;
        self.cells[index] = Some(player);
        Ok(self)
    }

    /// Owner of cell `index`, if any.
    pub fn cell(&self, index: usize) -> Result<Option<Player>> {
        check(index)?;
        Ok(self.cells[index])
    }

    /// Empty cells, ascending.
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&index| self.cells[index].is_none())
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Whether `player` holds a full row, column or diagonal.
    pub fn has_won(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.cells[index] == Some(player)))
    }

    /// Whether every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl PartialEq for TicTacToeBoard {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for TicTacToeBoard {}

impl Hash for TicTacToeBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl State for TicTacToeBoard {
    fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BoardPrinter.render(self))
    }
}

/// Draws the board with `X` for player one and `O` for player two.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardPrinter;

impl BoardPrinter {
    fn render(&self, board: &TicTacToeBoard) -> String {
        board
            .cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => " ",
                        Some(Player::One) => "X",
                        Some(Player::Two) => "O",
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl Printer<TicTacToeBoard> for BoardPrinter {
    fn print(&self, board: &TicTacToeBoard) -> Result<String> {
        Ok(self.render(board))
    }
}

/// `player` marks cell `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    /// Cell to mark.
    pub index: usize,
    /// Side making the mark.
    pub player: Player,
}

impl Mark {
    /// Apply this mark, returning the new board.
    pub fn execute(&self, board: &TicTacToeBoard) -> Result<TicTacToeBoard> {
        if let Some(occupant) = board.cell(self.index)? {
            return Err(Error::OccupiedDestination {
                square: self.index.to_string(),
                occupant: occupant.to_string(),
            });
        }
        board.clone().with_mark(self.index, self.player)
    }
}

impl Action for Mark {
    fn describe(&self) -> String {
        format!("{} marks cell {}", self.player, self.index)
    }
}

/// Tic-tac-toe seen from the side the solver plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    /// Side whose wins score `1.0`.
    pub computer: Player,
    /// Side that opens.
    pub first_mover: Player,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Player one opens and the solver plays player one.
    pub fn new() -> Self {
        Self {
            computer: Player::One,
            first_mover: Player::One,
        }
    }

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

    /// The side to move, inferred from the marks on the board.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPosition`] when the opening side has fewer
    /// marks than the other.
    pub fn player_to_move(&self, board: &TicTacToeBoard) -> Result<Player> {
        let first = board.count(self.first_mover);
        let second = board.count(self.first_mover.opponent());
        if first == second {
            Ok(self.first_mover)
        } else if first > second {
            Ok(self.first_mover.opponent())
        } else {
            Err(Error::InvalidPosition {
                message: format!(
                    "{} opened but has {} marks against {}",
                    self.first_mover, first, second
                ),
            })
        }
    }
}

impl AdversarialProblem for TicTacToe {
    type State = TicTacToeBoard;
    type Action = Mark;

    fn max_level(&self) -> u32 {
        u32::MAX
    }

    fn successors(&self, board: &TicTacToeBoard) -> Result<Vec<Successor<Mark, TicTacToeBoard>>> {
        let player = self.player_to_move(board)?;
        board
            .valid_moves()
            .map(|index| {
                let mark = Mark { index, player };
                let mut next = mark.execute(board)?;
                next.level = board.level + 1;
                Ok(Successor::new(mark, next))
            })
            .collect()
    }

    fn is_terminal(&self, board: &TicTacToeBoard) -> Result<bool> {
        Ok(board.has_won(Player::One) || board.has_won(Player::Two) || board.is_full())
    }

    fn utility(&self, board: &TicTacToeBoard) -> Result<f64> {
        if board.has_won(self.computer) {
            Ok(1.0)
        } else if board.has_won(self.computer.opponent()) {
            Ok(-1.0)
        } else if board.is_full() {
            Ok(0.0)
        } else {
            Err(Error::NotTerminal)
        }
    }
}

fn check(index: usize) -> Result<()> {
    if index >= CELL_COUNT {
        return Err(Error::InvalidCoordinate {
            coordinate: index.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MinimaxConfig, MinimaxSolver};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn board(marks: &[(usize, Player)]) -> TicTacToeBoard {
        marks
            .iter()
            .fold(TicTacToeBoard::new(), |b, &(i, p)| b.with_mark(i, p).unwrap())
    }

    #[test]
    fn test_valid_moves() {
        let empty = TicTacToeBoard::new();
        assert_eq!(empty.valid_moves().count(), 9);
        assert!(empty.is_empty());

        let one = board(&[(0, Player::One)]);
        let moves: Vec<_> = one.valid_moves().collect();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&0));
    }

    #[test]
    fn test_turn_inference() {
        let game = TicTacToe::new();
        assert_eq!(game.player_to_move(&TicTacToeBoard::new()).unwrap(), Player::One);
        assert_eq!(
            game.player_to_move(&board(&[(4, Player::One)])).unwrap(),
            Player::Two
        );
        assert!(matches!(
            game.player_to_move(&board(&[(4, Player::Two)])),
            Err(Error::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_wins_and_draws() {
        let game = TicTacToe::new();
        let row = board(&[(0, Player::Two), (1, Player::Two), (2, Player::Two)]);
        assert!(row.has_won(Player::Two));
        assert!(game.is_terminal(&row).unwrap());
        assert_eq!(game.utility(&row).unwrap(), -1.0);

        let diagonal = board(&[(2, Player::One), (4, Player::One), (6, Player::One)]);
        assert_eq!(game.utility(&diagonal).unwrap(), 1.0);

        use Player::{One as X, Two as O};
        #[rustfmt::skip]
        let draw = board(&[
            (0, X), (1, O), (2, X),
            (3, X), (4, O), (5, O),
            (6, O), (7, X), (8, X),
        ]);
        assert!(game.is_terminal(&draw).unwrap());
        assert_eq!(game.utility(&draw).unwrap(), 0.0);

        assert!(matches!(
            game.utility(&TicTacToeBoard::new()),
            Err(Error::NotTerminal)
        ));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let taken = board(&[(4, Player::One)]);
        let mark = Mark {
            index: 4,
            player: Player::Two,
        };
        assert!(matches!(
            mark.execute(&taken),
            Err(Error::OccupiedDestination { .. })
        ));
        assert!(TicTacToeBoard::new().cell(9).is_err());
    }

    #[test]
    fn test_takes_the_winning_cell() {
        use Player::{One as X, Two as O};
        #[rustfmt::skip]
        let position = board(&[
            (0, X), (1, O), (2, X),
            (3, O), (4, O),
            (6, X), (7, X),
        ]);
        let game = TicTacToe::new().with_computer(Player::Two);
        let mut solver = MinimaxSolver::new(game, MinimaxConfig::default());
        let result = solver.solve_for_best_action(&position).unwrap();

        assert!(result.solved);
        assert_eq!(result.action, Some(Mark { index: 5, player: O }));
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut solver = MinimaxSolver::new(TicTacToe::new(), MinimaxConfig::without_cache());
        let result = solver.solve_for_best_action(&TicTacToeBoard::new()).unwrap();

        assert!(result.solved);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.stats.max_depth, 9);
    }

    #[test]
    fn test_never_loses_to_random_play() {
        let game = TicTacToe::new().with_computer(Player::Two);
        let mut solver = MinimaxSolver::new(game, MinimaxConfig::without_cache());

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut position = TicTacToeBoard::new();

            while !game.is_terminal(&position).unwrap() {
                let moves: Vec<usize> = position.valid_moves().collect();
                let &index = moves.choose(&mut rng).unwrap();
                position = Mark { index, player: Player::One }.execute(&position).unwrap();
                if game.is_terminal(&position).unwrap() {
                    break;
                }

                let result = solver.solve_for_best_action(&position).unwrap();
                position = result.action.unwrap().execute(&position).unwrap();
            }

            assert!(!position.has_won(Player::One), "seed {} lost:\n{}", seed, position);
        }
    }

    #[test]
    fn test_printer() {
        let position = board(&[(0, Player::One), (1, Player::Two), (2, Player::One)]);
        assert_eq!(position.to_string(), "X|O|X\n-+-+-\n | | \n-+-+-\n | | ");
    }
}
