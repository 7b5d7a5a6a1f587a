//! JSON board configurations.
//!
//! A configuration lists every vertex with its peg flag and every edge as
//! `"from -> over -> to"`:
//!
//! ```json
//! {
//!   "vertices": { "0": "0", "1": "1", "2": "1" },
//!   "edges": ["0 -> 1 -> 3"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::games::peg_board::adjacency::Adjacency;

/// Separates the three vertices of an edge.
pub const SEPARATOR: &str = " -> ";
/// Vertex value for a peg.
pub const HAS_PEG: &str = "1";
/// Vertex value for a hole.
pub const EMPTY: &str = "0";

const STANDARD_BOARD: &str = include_str!("standard_board.json");

/// Serializable description of a peg board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfiguration {
    /// Vertex index (as text) to [`HAS_PEG`] or [`EMPTY`].
    pub vertices: BTreeMap<String, String>,
    /// Edges as `"from -> over -> to"`.
    pub edges: Vec<String>,
}

impl BoardConfiguration {
    /// The 15-hole triangle with every hole filled except vertex 0.
    pub fn standard() -> Result<Self> {
        Self::from_json(STANDARD_BOARD)
    }

    /// The 15-hole triangle without any pegs.
    pub fn empty() -> Result<Self> {
        let mut configuration = Self::standard()?;
        for value in configuration.vertices.values_mut() {
            *value = EMPTY.to_string();
        }
        Ok(configuration)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read board configuration {}", path.display()),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Peg flags indexed by vertex.
    ///
    /// # Errors
    /// Vertex keys must be the integers `0..n` and values must be
    /// [`HAS_PEG`] or [`EMPTY`].
    pub fn pegs(&self) -> Result<Vec<bool>> {
        let mut indexed = Vec::with_capacity(self.vertices.len());
        for (key, value) in &self.vertices {
            let index: usize = key
                .trim()
                .parse()
                .map_err(|_| malformed(format!("vertex key '{}' is not an index", key)))?;
            let has_peg = match value.as_str() {
                HAS_PEG => true,
                EMPTY => false,
                other => return Err(malformed(format!("vertex {} has value '{}'", index, other))),
            };
            indexed.push((index, has_peg));
        }

        indexed.sort_unstable_by_key(|&(index, _)| index);
        for (expected, &(index, _)) in indexed.iter().enumerate() {
            if index != expected {
                return Err(malformed(format!("vertex {} is missing", expected)));
            }
        }
        Ok(indexed.into_iter().map(|(_, has_peg)| has_peg).collect())
    }

    /// Connectivity of the configured vertices.
    ///
    /// # Errors
    /// Every edge must name three vertices of the configuration.
    pub fn adjacency(&self) -> Result<Adjacency> {
        let size = self.vertices.len();
        let mut adjacency = Adjacency::new(size);

        for edge in &self.edges {
            let parts = edge
                .split(SEPARATOR)
                .map(|part| part.trim().parse::<usize>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| malformed(format!("edge '{}' is not 'from -> over -> to'", edge)))?;
            let &[from, over, to] = parts.as_slice() else {
                return Err(malformed(format!("edge '{}' is not 'from -> over -> to'", edge)));
            };
            adjacency
                .add_edge(from, over, to)
                .map_err(|_| malformed(format!("edge '{}' leaves the {} vertices", edge, size)))?;
        }
        Ok(adjacency)
    }
}

fn malformed(message: String) -> Error {
    Error::MalformedConfiguration { message }
}
