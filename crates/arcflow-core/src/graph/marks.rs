//! Sparse arc-mark overlays.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastIndexMap;

/// A mapping from ordered vertex pairs to numeric values.
///
/// An overlay is independent of any adjacency structure: several overlays
/// (say capacity, cost, and flow) can coexist over one topology, and an
/// overlay can outlive the graph it was snapshotted from. Cloning produces a
/// fully independent copy, so an algorithm may snapshot-and-mutate without
/// corrupting the original.
///
/// Entries iterate in insertion order, which keeps everything built on top of
/// an overlay deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcMarks {
    marks: FastIndexMap<(VertexId, VertexId), Weight>,
}

impl ArcMarks {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of marked pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no pair is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` if the ordered pair carries a mark.
    #[must_use]
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.marks.contains_key(&(from, to))
    }

    /// Looks up the mark for an ordered pair.
    pub fn get(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.marks
            .get(&(from, to))
            .copied()
            .ok_or(Error::MarkNotFound { from, to })
    }

    /// Looks up the mark for an ordered pair, falling back to a default.
    #[must_use]
    pub fn get_or(&self, from: VertexId, to: VertexId, default: Weight) -> Weight {
        self.marks.get(&(from, to)).copied().unwrap_or(default)
    }

    /// Sets the mark for an ordered pair, inserting or overwriting.
    pub fn set(&mut self, from: VertexId, to: VertexId, value: Weight) {
        self.marks.insert((from, to), value);
    }

    /// Adds a delta to an existing mark.
    pub fn adjust(&mut self, from: VertexId, to: VertexId, delta: Weight) -> Result<()> {
        let mark = self
            .marks
            .get_mut(&(from, to))
            .ok_or(Error::MarkNotFound { from, to })?;
        *mark += delta;
        Ok(())
    }

    /// Removes the mark for an ordered pair, returning its value.
    pub fn remove(&mut self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.marks
            .shift_remove(&(from, to))
            .ok_or(Error::MarkNotFound { from, to })
    }

    /// Assigns one value to every currently marked pair.
    pub fn reset_all(&mut self, value: Weight) {
        for mark in self.marks.values_mut() {
            *mark = value;
        }
    }

    /// Iterates over all `((from, to), value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ((VertexId, VertexId), Weight)> + '_ {
        self.marks.iter().map(|(&pair, &value)| (pair, value))
    }
}

impl FromIterator<((VertexId, VertexId), Weight)> for ArcMarks {
    fn from_iter<I: IntoIterator<Item = ((VertexId, VertexId), Weight)>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}
