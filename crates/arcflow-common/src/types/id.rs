//! Identifier types for graph elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex in a graph.
///
/// Vertices are dense: a graph with `n` vertices uses ids `0..n-1`, so a
/// `VertexId` doubles as an index into vertex-indexed storage via
/// [`index`](Self::index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Creates a new VertexId from a raw u32 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as an index into dense vertex-indexed storage.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<VertexId> for u32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let id = VertexId::new(42);
        assert_eq!(id.as_u32(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(u32::from(id), 42);
        assert_eq!(VertexId::from(42u32), id);
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(VertexId::default(), VertexId::new(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(VertexId::new(7).to_string(), "7");
    }
}
