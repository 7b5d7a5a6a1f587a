//! Solver-private caches.
//!
//! Both caches belong to one solver and are cleared at the start of every
//! top-level solve, so nothing leaks from one call into the next.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Cache of already-computed minimax values, keyed by state.
///
/// Entries are write-once: [`TranspositionTable::store`] ignores a state
/// that already has a value.
#[derive(Debug, Clone)]
pub struct TranspositionTable<S: Eq + Hash> {
    values: FxHashMap<S, f64>,
}

impl<S: Eq + Hash> Default for TranspositionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> TranspositionTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Create a table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Cached value for `state`, if any.
    pub fn probe(&self, state: &S) -> Option<f64> {
        self.values.get(state).copied()
    }

    /// Record `value` for `state` unless the state already has an entry.
    ///
    /// Returns `true` when the value was inserted.
    pub fn store(&mut self, state: &S, value: f64) -> bool
    where
        S: Clone,
    {
        if self.values.contains_key(state) {
            return false;
        }
        self.values.insert(state.clone(), value);
        true
    }

    /// Number of cached states.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Set of states already reached by the depth-first solver.
#[derive(Debug, Clone)]
pub struct VisitedSet<S: Eq + Hash> {
    states: FxHashSet<S>,
}

impl<S: Eq + Hash> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> VisitedSet<S> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            states: FxHashSet::default(),
        }
    }

    /// Whether `state` was visited.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Whether `state` or any of `equivalents` was visited.
    pub fn contains_any<'a, I>(&self, state: &S, equivalents: I) -> bool
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        self.contains(state) || equivalents.into_iter().any(|s| self.contains(s))
    }

    /// Mark `state` as visited. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Number of distinct visited states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget every state.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}
