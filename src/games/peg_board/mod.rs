//! Triangular peg solitaire.
//!
//! Fifteen holes in five rows, numbered from the apex:
//!
//! ```text
//!         0
//!       1   2
//!     3   4   5
//!   6   7   8   9
//! 10  11  12  13  14
//! ```
//!
//! A peg jumps a neighbouring peg along a line into an empty hole and the
//! jumped peg is removed. The puzzle ends when no jump is left; the fewer
//! pegs remain, the better. Boards can be described in JSON (see
//! [`BoardConfiguration`]) so other layouts can be solved too.

pub mod adjacency;
pub mod board;
pub mod config;
pub mod printer;
pub mod problem;

pub use adjacency::Adjacency;
pub use board::{Jump, PegBoard};
pub use config::BoardConfiguration;
pub use printer::BoardPrinter;
pub use problem::PegBoardProblem;
