//! Text rendering of the 15-hole triangle.

use crate::error::{Error, Result};
use crate::games::peg_board::board::PegBoard;
use crate::search::problem::Printer;

const ROWS: usize = 5;
const WIDTH: usize = 9;
const FILL: char = '_';

/// Draws a 15-vertex board as a centred triangle, `X` for a peg and `O`
/// for a hole.
///
/// ```text
/// ____O____
/// ___X_X___
/// __X_X_X__
/// _X_X_X_X_
/// X_X_X_X_X
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardPrinter;

impl Printer<PegBoard> for BoardPrinter {
    fn print(&self, board: &PegBoard) -> Result<String> {
        if board.vertex_count() != ROWS * (ROWS + 1) / 2 {
            return Err(Error::UnsupportedLayout {
                message: format!("expected 15 vertices to print, found {}", board.vertex_count()),
            });
        }

        let mut output = String::new();
        let mut index = 0;
        for row in 0..ROWS {
            let mut tokens = Vec::with_capacity(row + 1);
            for _ in 0..=row {
                tokens.push(if board.has_peg(index)? { "X" } else { "O" });
                index += 1;
            }
            let line = tokens.join(&FILL.to_string());
            let padding = FILL.to_string().repeat((WIDTH - line.len()) / 2);
            output.push_str(&padding);
            output.push_str(&line);
            output.push_str(&padding);
            output.push('\n');
        }
        Ok(output)
    }
}
