//! Checkers moves and the move generator.
//!
//! For each of the mover's pieces the generator walks the piece's diagonal
//! directions. An empty neighbour gives a simple move. An opponent
//! neighbour with an empty square behind it gives a jump, and from the
//! landing square the same piece is probed again for follow-up jumps; a
//! chain of two or more jumps becomes one [`CheckersMove::MultiJump`].
//!
//! Captures come before simple moves in the returned list, newest capture
//! first, so a chain is listed ahead of the shorter chains it extends.

use std::fmt;

use crate::error::{Error, Result};
use crate::games::checkers::board::{Board, Piece, Square, BOARD_SIZE};
use crate::games::Player;
use crate::search::problem::Action;

/// A single capture: the piece on `from` jumps `over` an opponent to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    /// Square the jumping piece starts on.
    pub from: Square,
    /// Square of the captured piece.
    pub over: Square,
    /// Landing square.
    pub to: Square,
}

impl Jump {
    /// Apply this jump to `board`, returning the new board.
    ///
    /// # Errors
    /// Fails when `over` is empty or holds a piece of the jumping side, or
    /// when the landing square is not free.
    pub fn execute(&self, board: &Board) -> Result<Board> {
        let mover = board.piece(self.from).ok_or_else(|| Error::EmptySource {
            square: self.from.to_string(),
        })?;
        match board.piece(self.over) {
            None => {
                return Err(Error::IllegalJump {
                    square: self.over.to_string(),
                    reason: "the square is empty".to_string(),
                })
            }
            Some(jumped) if jumped.owner == mover.owner => {
                return Err(Error::IllegalJump {
                    square: self.over.to_string(),
                    reason: format!("the square is held by {}", jumped.owner),
                })
            }
            Some(_) => {}
        }

        let mut next = step(board, self.from, self.to)?;
        next.set(self.over, None);
        Ok(next)
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} jumps {} to {}", self.from, self.over, self.to)
    }
}

/// A checkers move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckersMove {
    /// A non-capturing diagonal step.
    Simple {
        /// Starting square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// One capture.
    Jump(Jump),
    /// Two or more captures by the same piece, applied in order.
    MultiJump(Vec<Jump>),
}

impl CheckersMove {
    /// Square the moving piece starts on; `None` for a multi-jump without
    /// legs.
    pub fn from(&self) -> Option<Square> {
        match self {
            CheckersMove::Simple { from, .. } => Some(*from),
            CheckersMove::Jump(jump) => Some(jump.from),
            CheckersMove::MultiJump(jumps) => jumps.first().map(|j| j.from),
        }
    }

    /// Square the moving piece ends on; `None` for a multi-jump without
    /// legs.
    pub fn destination(&self) -> Option<Square> {
        match self {
            CheckersMove::Simple { to, .. } => Some(*to),
            CheckersMove::Jump(jump) => Some(jump.to),
            CheckersMove::MultiJump(jumps) => jumps.last().map(|j| j.to),
        }
    }

    /// Captures made by this move, in order.
    pub fn jumps(&self) -> &[Jump] {
        match self {
            CheckersMove::Simple { .. } => &[],
            CheckersMove::Jump(jump) => std::slice::from_ref(jump),
            CheckersMove::MultiJump(jumps) => jumps,
        }
    }

    /// Whether this move captures.
    pub fn is_capture(&self) -> bool {
        !matches!(self, CheckersMove::Simple { .. })
    }

    /// Apply this move to `board`, returning the new board. `board` itself
    /// is left untouched.
    ///
    /// # Errors
    /// Fails on any move the generator could not have produced: an empty
    /// start square, an occupied destination, a jump over an empty or
    /// friendly square, or a multi-jump with fewer than two legs.
    pub fn execute(&self, board: &Board) -> Result<Board> {
        match self {
            CheckersMove::Simple { from, to } => step(board, *from, *to),
            CheckersMove::Jump(jump) => jump.execute(board),
            CheckersMove::MultiJump(jumps) => {
                if jumps.len() < 2 {
                    return Err(Error::InvalidMultiJump { legs: jumps.len() });
                }
                let mut next = board.clone();
                for jump in jumps {
                    next = jump.execute(&next)?;
                }
                Ok(next)
            }
        }
    }
}

impl Action for CheckersMove {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CheckersMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersMove::Simple { from, to } => write!(f, "{} moves to {}", from, to),
            CheckersMove::Jump(jump) => write!(f, "{}", jump),
            CheckersMove::MultiJump(jumps) => {
                let legs: Vec<String> = jumps.iter().map(|j| j.to_string()).collect();
                write!(f, "{}", legs.join(", then "))
            }
        }
    }
}

/// Move the piece on `from` to the empty square `to`, crowning it on the
/// opponent's back row.
fn step(board: &Board, from: Square, to: Square) -> Result<Board> {
    let piece = board.piece(from).ok_or_else(|| Error::EmptySource {
        square: from.to_string(),
    })?;
    if let Some(occupant) = board.piece(to) {
        return Err(Error::OccupiedDestination {
            square: to.to_string(),
            occupant: occupant.owner.to_string(),
        });
    }

    let back_row = match piece.owner {
        Player::One => BOARD_SIZE - 1,
        Player::Two => 0,
    };
    let moved = Piece {
        owner: piece.owner,
        is_king: piece.is_king || to.row() == back_row,
    };

    let mut next = board.clone();
    next.set(from, None);
    next.set(to, Some(moved));
    next.set_last_player(piece.owner);
    Ok(next)
}

/// Every legal move for `player`, captures first.
///
/// # Errors
/// Only fails if probing a capture chain hits an inconsistent board, which
/// points at a generator bug.
pub fn valid_moves(board: &Board, player: Player) -> Result<Vec<CheckersMove>> {
    let opponent = player.opponent();
    let mut captures = Vec::new();
    let mut simple = Vec::new();

    for (square, piece) in board.occupied().filter(|(_, p)| p.owner == player) {
        for &direction in piece.directions() {
            let Some(target) = square.offset(direction, 1) else {
                continue;
            };
            match board.piece(target) {
                None => simple.push(CheckersMove::Simple {
                    from: square,
                    to: target,
                }),
                Some(neighbour) if neighbour.owner == opponent => {
                    find_jumps(board, square, direction, opponent, &[], &mut captures)?;
                }
                Some(_) => {}
            }
        }
    }

    captures.reverse();
    captures.extend(simple);
    Ok(captures)
}

/// Try a jump from `square` in `direction`, then recurse from the landing
/// square for further jumps in every direction the piece may now move.
fn find_jumps(
    board: &Board,
    square: Square,
    direction: (i8, i8),
    opponent: Player,
    chain: &[Jump],
    captures: &mut Vec<CheckersMove>,
) -> Result<()> {
    let (Some(over), Some(to)) = (square.offset(direction, 1), square.offset(direction, 2)) else {
        return Ok(());
    };
    let jumpable = board.piece(over).is_some_and(|p| p.owner == opponent);
    if !jumpable || board.piece(to).is_some() {
        return Ok(());
    }

    let jump = Jump {
        from: square,
        over,
        to,
    };
    let mut legs = chain.to_vec();
    legs.push(jump);

    captures.push(if legs.len() > 1 {
        CheckersMove::MultiJump(legs.clone())
    } else {
        CheckersMove::Jump(jump)
    });

    let next = jump.execute(board)?;
    let Some(landed) = next.piece(to) else {
        return Ok(());
    };
    for &next_direction in landed.directions() {
        find_jumps(&next, to, next_direction, opponent, &legs, captures)?;
    }
    Ok(())
}
