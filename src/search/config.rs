//! Configuration options and statistics for the solvers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the minimax solver.
///
/// # Example
/// ```
/// use game_search::search::MinimaxConfig;
///
/// let config = MinimaxConfig::default();
/// assert!(config.use_transposition_table);
/// assert_eq!(config.max_level, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Cache the value of every evaluated state for the rest of the solve.
    ///
    /// An entry is written once and never replaced, even when the same state
    /// is later reached with a different amount of search left below it.
    pub use_transposition_table: bool,

    /// Override for the problem's own maximum level.
    ///
    /// Set to `None` to use [`AdversarialProblem::max_level`].
    ///
    /// [`AdversarialProblem::max_level`]: crate::search::AdversarialProblem::max_level
    pub max_level: Option<u32>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            use_transposition_table: true,
            max_level: None,
        }
    }
}

impl MinimaxConfig {
    /// Create a new MinimaxConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain alpha-beta with no caching.
    pub fn without_cache() -> Self {
        Self {
            use_transposition_table: false,
            ..Default::default()
        }
    }

    /// Builder method: set whether to use the transposition table.
    pub fn with_transposition_table(mut self, enable: bool) -> Self {
        self.use_transposition_table = enable;
        self
    }

    /// Builder method: cap the searchable level.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }
}

/// Configuration for the depth-first solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthFirstConfig {
    /// Skip a state when one of its equivalent transforms was already visited.
    pub fold_equivalent_states: bool,
}

impl Default for DepthFirstConfig {
    fn default() -> Self {
        Self {
            fold_equivalent_states: true,
        }
    }
}

impl DepthFirstConfig {
    /// Create a new DepthFirstConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set whether equivalent states are folded together.
    pub fn with_folding(mut self, enable: bool) -> Self {
        self.fold_equivalent_states = enable;
        self
    }
}

/// Statistics collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Wall-clock time of the solve (in seconds).
    pub elapsed_seconds: f64,

    /// States visited. For minimax this counts every evaluation attempt,
    /// cache hits included; for depth-first it counts distinct states.
    pub visited_states: usize,

    /// Deepest level reached.
    pub max_depth: u32,

    /// Evaluations answered from the transposition table.
    pub transposition_hits: usize,
}

impl SearchStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited states per second.
    pub fn states_per_second(&self) -> f64 {
        if self.elapsed_seconds > 0.0 {
            self.visited_states as f64 / self.elapsed_seconds
        } else {
            0.0
        }
    }

    pub(crate) fn record_depth(&mut self, level: u32) {
        self.max_depth = self.max_depth.max(level);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elapsed time in seconds: {:.4}", self.elapsed_seconds)?;
        writeln!(f, "Visited state count: {}", self.visited_states)?;
        writeln!(f, "Max depth: {}", self.max_depth)?;
        write!(f, "Transposition hits: {}", self.transposition_hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = MinimaxConfig::new()
            .with_transposition_table(false)
            .with_max_level(12);
        assert!(!config.use_transposition_table);
        assert_eq!(config.max_level, Some(12));
        assert_eq!(MinimaxConfig::without_cache().max_level, None);

        assert!(DepthFirstConfig::default().fold_equivalent_states);
        assert!(!DepthFirstConfig::new().with_folding(false).fold_equivalent_states);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = MinimaxConfig::default().with_max_level(8);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MinimaxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_states_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.states_per_second(), 0.0);

        stats.visited_states = 100;
        stats.elapsed_seconds = 2.0;
        assert_eq!(stats.states_per_second(), 50.0);

        stats.record_depth(4);
        stats.record_depth(2);
        assert_eq!(stats.max_depth, 4);
        assert!(stats.to_string().contains("Visited state count: 100"));
    }
}
