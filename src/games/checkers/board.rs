//! Checkers board, squares and pieces.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::games::Player;
use crate::search::problem::{Printer, State};

/// Number of columns and rows.
pub const BOARD_SIZE: u8 = 8;

const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The four diagonal steps as `(column, row)` offsets. The first two lead
/// down the board, the last two lead up.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// A square on the board, addressed by column and row.
///
/// Text form is chess notation: the column letter `a`-`h` followed by the
/// 1-based row, so `a1` is column 0, row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    column: u8,
    row: u8,
}

impl Square {
    /// Create a square, rejecting coordinates off the board.
    pub fn new(column: u8, row: u8) -> Result<Self> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(Error::InvalidCoordinate {
                coordinate: format!("({},{})", column, row),
            });
        }
        Ok(Self { column, row })
    }

    /// Column index, 0 for `a`.
    pub fn column(self) -> u8 {
        self.column
    }

    /// Row index, 0 for row `1`.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Pieces only ever stand on dark squares.
    pub fn is_dark(self) -> bool {
        (self.column + self.row) % 2 == 0
    }

    /// The square `steps` diagonal steps away, if it is on the board.
    pub fn offset(self, direction: (i8, i8), steps: i8) -> Option<Self> {
        let column = self.column as i8 + direction.0 * steps;
        let row = self.row as i8 + direction.1 * steps;
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&column) && (0..size).contains(&row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Position in the board's backing array, column-major.
    fn index(self) -> usize {
        self.column as usize * BOARD_SIZE as usize + self.row as usize
    }

    fn from_index(index: usize) -> Self {
        Self {
            column: (index / BOARD_SIZE as usize) as u8,
            row: (index % BOARD_SIZE as usize) as u8,
        }
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate {
            coordinate: s.to_string(),
        };

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let digits: String = chars.collect();
        if !letter.is_ascii_lowercase() {
            return Err(invalid());
        }
        let row: u8 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Square::new(letter as u8 - b'a', row - 1).map_err(|_| invalid())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, self.row + 1)
    }
}

/// A piece and its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The player the piece belongs to.
    pub owner: Player,
    /// Kings move in all four diagonal directions.
    pub is_king: bool,
}

impl Piece {
    /// A regular piece.
    pub fn man(owner: Player) -> Self {
        Self {
            owner,
            is_king: false,
        }
    }

    /// A crowned piece.
    pub fn king(owner: Player) -> Self {
        Self {
            owner,
            is_king: true,
        }
    }

    /// Diagonal directions this piece may move in.
    ///
    /// Player one starts at the bottom and moves up, player two moves down.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        if self.is_king {
            return &DIAGONALS;
        }
        match self.owner {
            Player::One => &DIAGONALS[2..],
            Player::Two => &DIAGONALS[..2],
        }
    }
}

/// An 8×8 checkers position.
///
/// Boards are never changed once handed to a solver: moves build new boards
/// (see [`crate::games::checkers::CheckersMove::execute`]). Equality and
/// hashing cover all 64 squares and the player who moved last, but not the
/// search level.
#[derive(Debug, Clone)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
    last_player: Option<Player>,
    level: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board without pieces.
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
            last_player: None,
            level: 0,
        }
    }

    /// The starting position: twelve pieces each on the dark squares of the
    /// three rows nearest each player.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for index in 0..SQUARE_COUNT {
            let square = Square::from_index(index);
            if !square.is_dark() {
                continue;
            }
            if square.row < 3 {
                board.squares[index] = Some(Piece::man(Player::One));
            } else if square.row > 4 {
                board.squares[index] = Some(Piece::man(Player::Two));
            }
        }
        board
    }

    /// Builder method: put `piece` on `square`.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.squares[square.index()] = Some(piece);
        self
    }

    /// Builder method: put `piece` on the square named `coordinate`.
    pub fn place(self, coordinate: &str, piece: Piece) -> Result<Self> {
        let square = coordinate.parse()?;
        Ok(self.with_piece(square, piece))
    }

    /// Builder method: record who moved last, which decides whose turn it is.
    pub fn with_last_player(mut self, player: Option<Player>) -> Self {
        self.last_player = player;
        self
    }

    /// The piece on `square`, if any.
    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// The piece on the square named `coordinate`, if any.
    pub fn piece_at(&self, coordinate: &str) -> Result<Option<Piece>> {
        let square: Square = coordinate.parse()?;
        Ok(self.piece(square))
    }

    /// The player who made the last move, `None` before the first move.
    pub fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    /// Every occupied square with its piece, column by column.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.map(|p| (Square::from_index(index), p)))
    }

    /// Number of pieces `player` has left.
    pub fn piece_count(&self, player: Player) -> usize {
        self.occupied().filter(|(_, p)| p.owner == player).count()
    }

    /// Whether `player` has won, i.e. the opponent has no pieces left.
    pub fn has_won(&self, player: Player) -> bool {
        self.piece_count(player.opponent()) == 0
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub(crate) fn set_last_player(&mut self, player: Player) {
        self.last_player = Some(player);
    }

    pub(crate) fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.last_player == other.last_player
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for square in &self.squares {
            square.hash(state);
        }
        self.last_player.hash(state);
    }
}

impl State for Board {
    fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BoardPrinter.render(self))
    }
}

/// Draws the board as a text grid, row 8 at the top.
///
/// Player one is `x`, player two is `o`; kings are upper case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardPrinter;

impl BoardPrinter {
    fn render(&self, board: &Board) -> String {
        let separator = format!("+{}+\n", vec!["-"; BOARD_SIZE as usize].join("+"));
        let mut output = String::new();

        for row in (0..BOARD_SIZE).rev() {
            output.push_str(&separator);
            output.push('|');
            for column in 0..BOARD_SIZE {
                let square = Square { column, row };
                let symbol = match board.piece(square) {
                    None => ' ',
                    Some(Piece { owner: Player::One, is_king: false }) => 'x',
                    Some(Piece { owner: Player::One, is_king: true }) => 'X',
                    Some(Piece { owner: Player::Two, is_king: false }) => 'o',
                    Some(Piece { owner: Player::Two, is_king: true }) => 'O',
                };
                output.push(symbol);
                output.push('|');
            }
            output.push('\n');
        }
        output.push_str(&separator);
        output
    }
}

impl Printer<Board> for BoardPrinter {
    fn print(&self, board: &Board) -> Result<String> {
        Ok(self.render(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_square_notation() {
        let square: Square = "a3".parse().unwrap();
        assert_eq!(square.column(), 0);
        assert_eq!(square.row(), 2);
        assert_eq!(square.to_string(), "a3");

        let corner: Square = "h8".parse().unwrap();
        assert_eq!((corner.column(), corner.row()), (7, 7));
    }

    #[test]
    fn test_invalid_coordinates_are_rejected() {
        for text in ["", "a", "a0", "a9", "i1", "A1", "3a", "b-1"] {
            assert!(
                matches!(text.parse::<Square>(), Err(Error::InvalidCoordinate { .. })),
                "'{}' should be rejected",
                text
            );
        }
        assert!(Square::new(8, 0).is_err());
        assert!(Board::empty().piece_at("z9").is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset((1, 1), 1), Some("b2".parse().unwrap()));
        assert_eq!(a1.offset((1, 1), 2), Some("c3".parse().unwrap()));
        assert_eq!(a1.offset((-1, 1), 1), None);
        assert_eq!(a1.offset((1, -1), 1), None);
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.piece_count(Player::One), 12);
        assert_eq!(board.piece_count(Player::Two), 12);
        assert!(board.occupied().all(|(square, _)| square.is_dark()));
        assert_eq!(board.piece_at("a1").unwrap(), Some(Piece::man(Player::One)));
        assert_eq!(board.piece_at("h8").unwrap(), Some(Piece::man(Player::Two)));
        assert_eq!(board.piece_at("b4").unwrap(), None);
    }

    #[test]
    fn test_start_position_has_no_winner() {
        let board = Board::standard();
        assert!(!board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
    }

    #[test]
    fn test_lone_piece_wins() {
        let board = Board::empty().place("a1", Piece::man(Player::One)).unwrap();
        assert!(board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));

        let board = Board::empty().place("a1", Piece::man(Player::Two)).unwrap();
        assert!(!board.has_won(Player::One));
        assert!(board.has_won(Player::Two));
    }

    #[test]
    fn test_clone_equality_and_hashing() {
        let board1 = Board::standard();
        let board2 = board1.clone();
        let board3 = Board::empty();
        assert_eq!(board1, board2);
        assert_ne!(board1, board3);

        let mut map = HashMap::new();
        map.insert(board1, 1);
        assert_eq!(map.get(&board2), Some(&1));
        assert_eq!(map.get(&board3), None);
    }

    #[test]
    fn test_difference_past_first_squares_breaks_equality() {
        let board1 = Board::empty().place("a1", Piece::man(Player::One)).unwrap();
        let board2 = board1.clone().place("h8", Piece::man(Player::Two)).unwrap();
        assert_ne!(board1, board2);
    }

    #[test]
    fn test_level_is_not_part_of_identity() {
        let board = Board::standard();
        assert_eq!(board.clone().with_level(5), board);
        assert_eq!(board.clone().with_level(5).level(), 5);
        assert_ne!(board.clone().with_last_player(Some(Player::One)), board);
    }

    #[test]
    fn test_printer() {
        let board = Board::empty()
            .place("a1", Piece::man(Player::One))
            .unwrap()
            .place("h8", Piece::king(Player::Two))
            .unwrap();
        let text = BoardPrinter.print(&board).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "+-+-+-+-+-+-+-+-+");
        assert_eq!(lines[1], "| | | | | | | |O|");
        assert_eq!(lines[15], "|x| | | | | | | |");
        assert_eq!(board.to_string(), text);
    }
}
