//! Peg board state and jumps.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::games::peg_board::adjacency::Adjacency;
use crate::games::peg_board::config::{BoardConfiguration, EMPTY, HAS_PEG, SEPARATOR};
use crate::games::peg_board::printer::BoardPrinter;
use crate::search::problem::{Action, Printer, State};

/// A peg on `from` jumps the peg on `over` and lands on the hole `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    /// Vertex the jumping peg starts on.
    pub from: usize,
    /// Vertex of the removed peg.
    pub over: usize,
    /// Landing vertex.
    pub to: usize,
}

impl Action for Jump {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peg at {} jumps peg {} to {}", self.from, self.over, self.to)
    }
}

/// Pegs on a graph of vertices.
///
/// The adjacency is shared between a board and every board derived from
/// it. Equality and hashing look at the pegs only.
#[derive(Debug, Clone)]
pub struct PegBoard {
    pegs: Vec<bool>,
    adjacency: Arc<Adjacency>,
    level: u32,
}

impl PegBoard {
    /// Build a board from peg flags and connectivity.
    ///
    /// # Errors
    /// The adjacency must cover exactly the given vertices.
    pub fn new(pegs: Vec<bool>, adjacency: Arc<Adjacency>) -> Result<Self> {
        if pegs.len() != adjacency.size() {
            return Err(Error::MalformedConfiguration {
                message: format!(
                    "{} vertices but connectivity for {}",
                    pegs.len(),
                    adjacency.size()
                ),
            });
        }
        Ok(Self {
            pegs,
            adjacency,
            level: 0,
        })
    }

    /// Build a board from a configuration.
    pub fn from_configuration(configuration: &BoardConfiguration) -> Result<Self> {
        Self::new(configuration.pegs()?, Arc::new(configuration.adjacency()?))
    }

    /// The standard 15-hole triangle, empty at vertex 0.
    pub fn standard() -> Result<Self> {
        Self::from_configuration(&BoardConfiguration::standard()?)
    }

    /// The 15-hole triangle without pegs.
    pub fn empty() -> Result<Self> {
        Self::from_configuration(&BoardConfiguration::empty()?)
    }

    /// The 15-hole triangle filled except at `hole`.
    pub fn with_hole(hole: usize) -> Result<Self> {
        let board = Self::empty()?;
        board.check(hole)?;
        let pegs = (0..board.vertex_count()).map(|index| index != hole).collect();
        Ok(Self { pegs, ..board })
    }

    /// Builder method: set or clear the peg on `index`.
    pub fn with_peg(mut self, index: usize, has_peg: bool) -> Result<Self> {
        self.check(index)?;
        self.pegs[index] = has_peg;
        Ok(self)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.pegs.len()
    }

    /// Number of pegs left.
    pub fn peg_count(&self) -> usize {
        self.pegs.iter().filter(|&&p| p).count()
    }

    /// Whether vertex `index` holds a peg.
    pub fn has_peg(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.pegs[index])
    }

    /// Indices of vertices holding a peg, ascending.
    pub fn pegs(&self) -> impl Iterator<Item = usize> + '_ {
        self.pegs
            .iter()
            .enumerate()
            .filter_map(|(index, &has_peg)| has_peg.then_some(index))
    }

    /// The board's connectivity.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Apply `jump`, returning the new board.
    ///
    /// # Errors
    /// `from` and `over` must hold pegs, `to` must be empty, and `over`
    /// must lie between `from` and `to`.
    pub fn execute_jump(&self, jump: &Jump) -> Result<PegBoard> {
        let illegal = |reason: &str| Error::IllegalPegJump {
            from: jump.from,
            over: jump.over,
            to: jump.to,
            reason: reason.to_string(),
        };

        if self.adjacency.between(jump.from, jump.to)? != Some(jump.over) {
            return Err(illegal("no such edge"));
        }
        if !self.pegs[jump.from] {
            return Err(illegal("no peg to move"));
        }
        if !self.pegs[jump.over] {
            return Err(illegal("no peg to jump"));
        }
        if self.pegs[jump.to] {
            return Err(illegal("landing vertex is taken"));
        }

        let mut next = self.clone();
        next.pegs[jump.from] = false;
        next.pegs[jump.over] = false;
        next.pegs[jump.to] = true;
        Ok(next)
    }

    /// Number of rows when the vertices form a triangle.
    pub fn rows(&self) -> Option<usize> {
        let count = self.vertex_count();
        let mut rows = 0;
        while rows * (rows + 1) / 2 < count {
            rows += 1;
        }
        (rows > 0 && rows * (rows + 1) / 2 == count).then_some(rows)
    }

    /// The board turned by 120°.
    ///
    /// Vertices are numbered row by row from the apex; the apex moves to
    /// the bottom-left corner and the bottom-left corner to the
    /// bottom-right.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedLayout`] unless the vertices form a
    /// triangle.
    pub fn rotate(&self) -> Result<PegBoard> {
        let rows = self.rows().ok_or_else(|| Error::UnsupportedLayout {
            message: format!("{} vertices do not form a triangle", self.vertex_count()),
        })?;

        let mut pegs = vec![false; self.pegs.len()];
        let mut index = 0;
        for row in 0..rows {
            for column in 0..=row {
                let new_row = rows - 1 - column;
                let new_column = row - column;
                pegs[new_row * (new_row + 1) / 2 + new_column] = self.pegs[index];
                index += 1;
            }
        }
        Ok(Self {
            pegs,
            adjacency: Arc::clone(&self.adjacency),
            level: self.level,
        })
    }

    /// Describe this board as a configuration.
    pub fn to_configuration(&self) -> BoardConfiguration {
        let vertices = self
            .pegs
            .iter()
            .enumerate()
            .map(|(index, &has_peg)| {
                let token = if has_peg { HAS_PEG } else { EMPTY };
                (index.to_string(), token.to_string())
            })
            .collect();
        let edges = self
            .adjacency
            .edges()
            .map(|(from, over, to)| format!("{from}{SEPARATOR}{over}{SEPARATOR}{to}"))
            .collect();
        BoardConfiguration { vertices, edges }
    }

    pub(crate) fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.pegs.len() {
            return Err(Error::InvalidVertex {
                index,
                count: self.pegs.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for PegBoard {
    fn eq(&self, other: &Self) -> bool {
        self.pegs == other.pegs
    }
}

impl Eq for PegBoard {}

impl Hash for PegBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pegs.hash(state);
    }
}

impl State for PegBoard {
    fn level(&self) -> u32 {
        self.level
    }

    /// The two other rotations of a triangular board.
    fn transforms(&self) -> Vec<Self> {
        let Ok(once) = self.rotate() else {
            return Vec::new();
        };
        match once.rotate() {
            Ok(twice) => vec![once, twice],
            Err(_) => vec![once],
        }
    }
}

impl fmt::Display for PegBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match BoardPrinter.print(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => {
                let row: String = self.pegs.iter().map(|&p| if p { 'X' } else { 'O' }).collect();
                writeln!(f, "{}", row)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn single_peg(index: usize) -> PegBoard {
        PegBoard::empty().unwrap().with_peg(index, true).unwrap()
    }

    #[test]
    fn test_standard_board() {
        let board = PegBoard::standard().unwrap();
        assert_eq!(board.vertex_count(), 15);
        assert_eq!(board.peg_count(), 14);
        assert!(!board.has_peg(0).unwrap());
        assert_eq!(board.rows(), Some(5));
        assert_eq!(board, PegBoard::with_hole(0).unwrap());
    }

    #[test]
    fn test_empty_board() {
        let board = PegBoard::empty().unwrap();
        assert_eq!(board.peg_count(), 0);
        assert_eq!(board.pegs().count(), 0);
    }

    #[test]
    fn test_equality_and_hashing() {
        let board1 = PegBoard::standard().unwrap();
        let board2 = PegBoard::standard().unwrap();
        let jump = Jump {
            from: 3,
            over: 1,
            to: 0,
        };
        let board3 = board1.execute_jump(&jump).unwrap();

        assert_eq!(board1, board2);
        assert_ne!(board1, board3);

        let mut map = HashMap::new();
        map.insert(board1.clone(), 1);
        assert_eq!(map.get(&board2), Some(&1));
        assert_eq!(map.get(&board3), None);

        // Level is not part of the identity.
        assert_eq!(board1.clone().with_level(4), board1);
    }

    #[test]
    fn test_execute_jump() {
        let board = PegBoard::standard().unwrap();
        let next = board
            .execute_jump(&Jump {
                from: 3,
                over: 1,
                to: 0,
            })
            .unwrap();

        assert_eq!(next.peg_count(), 13);
        assert!(next.has_peg(0).unwrap());
        assert!(!next.has_peg(1).unwrap());
        assert!(!next.has_peg(3).unwrap());
        // The source board is untouched.
        assert_eq!(board.peg_count(), 14);
    }

    #[test]
    fn test_illegal_jumps_are_rejected() {
        let board = PegBoard::standard().unwrap();
        let cases = [
            Jump { from: 0, over: 1, to: 3 },
            Jump { from: 5, over: 4, to: 3 },
            Jump { from: 3, over: 2, to: 0 },
        ];
        for jump in cases {
            assert!(
                matches!(board.execute_jump(&jump), Err(Error::IllegalPegJump { .. })),
                "{} should be rejected",
                jump
            );
        }

        let jump = Jump { from: 3, over: 1, to: 20 };
        assert!(matches!(board.execute_jump(&jump), Err(Error::InvalidVertex { .. })));
    }

    #[test]
    fn test_rotation() {
        let board = single_peg(0).rotate().unwrap();
        assert_eq!(board, single_peg(10));

        let board = board.rotate().unwrap();
        assert_eq!(board, single_peg(14));

        let board = board.rotate().unwrap();
        assert_eq!(board, single_peg(0));
    }

    #[test]
    fn test_transforms() {
        let transforms = single_peg(0).transforms();
        assert_eq!(transforms, vec![single_peg(10), single_peg(14)]);

        let mut adjacency = Adjacency::new(4);
        adjacency.add_edge(0, 1, 2).unwrap();
        let square = PegBoard::new(vec![true; 4], Arc::new(adjacency)).unwrap();
        assert!(square.transforms().is_empty());
        assert!(matches!(square.rotate(), Err(Error::UnsupportedLayout { .. })));
    }

    #[test]
    fn test_configuration_round_trip() {
        let board = PegBoard::with_hole(4).unwrap();
        let configuration = board.to_configuration();

        assert_eq!(configuration.edges.len(), 36);
        assert_eq!(configuration.vertices.get("4").map(String::as_str), Some(EMPTY));
        assert_eq!(PegBoard::from_configuration(&configuration).unwrap(), board);
    }

    #[test]
    fn test_out_of_range_indices() {
        assert!(PegBoard::with_hole(15).is_err());
        assert!(PegBoard::standard().unwrap().has_peg(15).is_err());

        let adjacency = Arc::new(Adjacency::new(3));
        assert!(matches!(
            PegBoard::new(vec![true; 4], adjacency),
            Err(Error::MalformedConfiguration { .. })
        ));
    }
}
