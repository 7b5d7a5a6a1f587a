//! Error type shared by the search framework and the games.
//!
//! Every variant is a precondition violation: the search core never retries
//! and never recovers from one. A solver that legitimately finds nothing
//! reports `solved = false` instead of an error.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A checkers square or tic-tac-toe cell that is not on the board.
    #[error("invalid coordinate: '{coordinate}'")]
    InvalidCoordinate { coordinate: String },

    /// A peg-board vertex index past the end of the board.
    #[error("vertex {index} is out of bounds (board has {count} vertices)")]
    InvalidVertex { index: usize, count: usize },

    /// A move onto a square that already holds a piece.
    #[error("cannot move to '{square}': square is occupied by {occupant}")]
    OccupiedDestination { square: String, occupant: String },

    /// A move from a square without a piece.
    #[error("cannot move from '{square}': square is empty")]
    EmptySource { square: String },

    /// A checkers jump over an empty or friendly square.
    #[error("cannot jump over '{square}': {reason}")]
    IllegalJump { square: String, reason: String },

    /// A multiple jump with fewer than two legs.
    #[error("multiple jump has {legs} legs, at least 2 are required")]
    InvalidMultiJump { legs: usize },

    /// A peg jump that does not match the board.
    #[error("illegal peg jump {from} -> {over} -> {to}: {reason}")]
    IllegalPegJump {
        from: usize,
        over: usize,
        to: usize,
        reason: String,
    },

    /// A utility value asked of a state that is not terminal.
    #[error("state must be terminal to have a utility value")]
    NotTerminal,

    /// A position that cannot arise in play.
    #[error("invalid position: {message}")]
    InvalidPosition { message: String },

    /// A board configuration with missing or out-of-range entries.
    #[error("malformed board configuration: {message}")]
    MalformedConfiguration { message: String },

    /// An operation that needs a different board shape.
    #[error("unsupported board layout: {message}")]
    UnsupportedLayout { message: String },

    /// Reading or writing a file failed.
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
