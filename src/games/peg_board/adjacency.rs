//! Board connectivity.

use crate::error::{Error, Result};

/// Symmetric map from a pair of vertices to the vertex lying between them.
///
/// A peg on one end of an edge can jump the peg on the middle vertex and
/// land on the other end. Pairs without an edge map to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    size: usize,
    between: Vec<Option<usize>>,
}

impl Adjacency {
    /// A graph of `size` vertices without edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            between: vec![None; size * size],
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Connect `from` and `to` in both directions through `over`.
    pub fn add_edge(&mut self, from: usize, over: usize, to: usize) -> Result<()> {
        for index in [from, over, to] {
            self.check(index)?;
        }
        self.between[from * self.size + to] = Some(over);
        self.between[to * self.size + from] = Some(over);
        Ok(())
    }

    /// The vertex jumped when moving from `from` to `to`, if they share an edge.
    pub fn between(&self, from: usize, to: usize) -> Result<Option<usize>> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.between[from * self.size + to])
    }

    /// Whether `from` and `to` share an edge.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        Ok(self.between(from, to)?.is_some())
    }

    /// Every edge as `(from, over, to)`, once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.between.iter().enumerate().filter_map(move |(cell, over)| {
            over.map(|over| (cell / self.size, over, cell % self.size))
        })
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::InvalidVertex {
                index,
                count: self.size,
            });
        }
        Ok(())
    }
}
