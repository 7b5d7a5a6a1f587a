//! Problem traits for the search solvers.
//!
//! Any game or puzzle that implements one of the problem traits can be
//! handed to the matching solver. The solvers only ever talk to a problem
//! through these traits and never look at game-specific fields.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// Trait for a snapshot of a game or puzzle position.
///
/// States are immutable values: executing an action always builds a new
/// state. Equality and hashing must cover the whole position so that two
/// states with the same content are interchangeable as cache keys, however
/// they were built.
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Number of plies between the search root and this state.
    fn level(&self) -> u32;

    /// Alternate encodings of this state that are equivalent to it, such as
    /// rotations of a symmetric board.
    ///
    /// The exhaustive solver skips a state when any of its transforms has
    /// already been visited. The default has no transforms.
    fn transforms(&self) -> Vec<Self> {
        Vec::new()
    }
}

/// Trait for a single transition between states.
pub trait Action: Clone + Eq + Hash + Debug + Send + Sync {
    /// Human-readable description, used by reports and logs.
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// An action together with the state it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<A, S> {
    /// The action taken.
    pub action: A,
    /// The state after the action.
    pub state: S,
}

impl<A, S> Successor<A, S> {
    /// Pair an action with its resulting state.
    pub fn new(action: A, state: S) -> Self {
        Self { action, state }
    }
}

/// A two-player zero-sum game searched with minimax.
///
/// # Example
/// ```ignore
/// impl AdversarialProblem for MyGame {
///     type State = MyBoard;
///     type Action = MyMove;
///
///     // ... implement required methods
/// }
/// ```
pub trait AdversarialProblem {
    /// The type representing a position.
    type State: State;

    /// The type representing a move.
    type Action: Action;

    /// Deepest level the solver may expand; successors beyond it are not
    /// explored.
    fn max_level(&self) -> u32;

    /// Legal successors of `state`, in the order the solver should try them.
    ///
    /// Must be deterministic and leave `state` untouched. The order decides
    /// ties: the first successor reaching the best value wins.
    fn successors(&self, state: &Self::State) -> Result<Vec<Successor<Self::Action, Self::State>>>;

    /// Whether the game is over at `state`.
    fn is_terminal(&self, state: &Self::State) -> Result<bool>;

    /// Outcome of a terminal state from the computer's point of view:
    /// `1.0` win, `-1.0` loss, `0.0` draw.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotTerminal`] when `state` is not terminal.
    fn utility(&self, state: &Self::State) -> Result<f64>;
}

/// A single-agent puzzle whose every completed path is enumerated.
pub trait ExhaustiveProblem {
    /// The type representing a puzzle position.
    type State: State;

    /// The type representing a move.
    type Action: Action;

    /// The position the search starts from.
    fn initial_state(&self) -> &Self::State;

    /// Legal successors of `state`. An empty list marks a finished path.
    fn successors(&self, state: &Self::State) -> Result<Vec<Successor<Self::Action, Self::State>>>;
}

/// Renders a state as text. Purely presentational.
pub trait Printer<T> {
    /// Render `item`.
    fn print(&self, item: &T) -> Result<String>;
}
