//! Directed graph with dense vertex indexing.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastIndexSet;

use super::marks::ArcMarks;

/// A directed graph over a fixed set of vertices `0..n-1`.
///
/// Adjacency is dense (one out-neighbor set per vertex) with a mirrored
/// in-neighbor set, so both successor and predecessor enumeration are O(1)
/// per neighbor. At most one arc exists per ordered pair; self-loops are
/// rejected silently. Arc marks live in an [`ArcMarks`] overlay owned by the
/// graph, and an arc may exist without a mark.
///
/// Neighbor sets preserve insertion order, so every traversal over a given
/// construction sequence is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    forward: Vec<FastIndexSet<VertexId>>,
    backward: Vec<FastIndexSet<VertexId>>,
    marks: ArcMarks,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no arcs.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            forward: (0..vertex_count).map(|_| FastIndexSet::default()).collect(),
            backward: (0..vertex_count).map(|_| FastIndexSet::default()).collect(),
            marks: ArcMarks::new(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.forward.len()
    }

    /// Returns the number of arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.forward.iter().map(FastIndexSet::len).sum()
    }

    /// Iterates over all vertex ids in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.forward.len() as u32).map(VertexId::new)
    }

    /// Checks that a vertex id is valid for this graph.
    pub fn validate_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() < self.forward.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfBounds {
                vertex,
                vertex_count: self.forward.len(),
            })
        }
    }

    /// Adds an arc from `from` to `to`, optionally marking it.
    ///
    /// A self-loop is rejected silently. Re-adding an existing arc keeps its
    /// multiplicity at one; a supplied mark overwrites the stored one, while
    /// `None` leaves any stored mark untouched.
    pub fn add_arc(
        &mut self,
        from: VertexId,
        to: VertexId,
        mark: impl Into<Option<Weight>>,
    ) -> Result<()> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;
        self.insert_arc(from, to, mark.into());
        Ok(())
    }

    /// Inserts an arc whose endpoints are already known to be in bounds.
    ///
    /// Same silent self-loop and mark-overwrite semantics as
    /// [`add_arc`](Self::add_arc).
    pub(crate) fn insert_arc(&mut self, from: VertexId, to: VertexId, mark: Option<Weight>) {
        debug_assert!(from.index() < self.forward.len());
        debug_assert!(to.index() < self.forward.len());

        if from == to {
            return;
        }

        self.forward[from.index()].insert(to);
        self.backward[to.index()].insert(from);
        if let Some(value) = mark {
            self.marks.set(from, to, value);
        }
    }

    /// Removes the arc from `from` to `to` along with its mark.
    pub fn remove_arc(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;

        if !self.forward[from.index()].shift_remove(&to) {
            return Err(Error::ArcNotFound { from, to });
        }
        self.backward[to.index()].shift_remove(&from);
        let _ = self.marks.remove(from, to);
        Ok(())
    }

    /// Returns `true` if an arc from `from` to `to` exists.
    #[must_use]
    pub fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.forward
            .get(from.index())
            .is_some_and(|set| set.contains(&to))
    }

    /// Iterates over the out-neighbors of a vertex in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds; algorithm entry points validate
    /// their inputs eagerly via [`validate_vertex`](Self::validate_vertex).
    pub fn forward_neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.forward[vertex.index()].iter().copied()
    }

    /// Iterates over the in-neighbors of a vertex in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn backward_neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.backward[vertex.index()].iter().copied()
    }

    /// Iterates over all arcs as `(from, to)` pairs, grouped by tail vertex.
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.forward.iter().enumerate().flat_map(|(from, set)| {
            let from = VertexId::new(from as u32);
            set.iter().map(move |&to| (from, to))
        })
    }

    /// Looks up the mark on an arc.
    pub fn get_mark(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.marks.get(from, to)
    }

    /// Sets the mark on an existing arc.
    pub fn set_mark(&mut self, from: VertexId, to: VertexId, value: Weight) -> Result<()> {
        if !self.has_arc(from, to) {
            return Err(Error::ArcNotFound { from, to });
        }
        self.marks.set(from, to, value);
        Ok(())
    }

    /// Returns an independent copy of the mark overlay.
    ///
    /// Algorithms snapshot the capacity marks this way and repurpose the
    /// copy (for flow bookkeeping, say) without touching the graph.
    #[must_use]
    pub fn snapshot_marks(&self) -> ArcMarks {
        self.marks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_add_and_query_arcs() {
        let mut graph = Graph::new(3);
        graph.add_arc(v(0), v(1), 5).unwrap();
        graph.add_arc(v(1), v(2), None).unwrap();

        assert!(graph.has_arc(v(0), v(1)));
        assert!(graph.has_arc(v(1), v(2)));
        assert!(!graph.has_arc(v(1), v(0)));
        assert_eq!(graph.arc_count(), 2);
        assert_eq!(graph.get_mark(v(0), v(1)), Ok(5));
        assert!(graph.get_mark(v(1), v(2)).is_err());
    }

    #[test]
    fn test_self_loop_rejected_silently() {
        let mut graph = Graph::new(2);
        graph.add_arc(v(1), v(1), 10).unwrap();

        assert!(!graph.has_arc(v(1), v(1)));
        assert_eq!(graph.arc_count(), 0);
    }

    #[test]
    fn test_readd_overwrites_mark_not_multiplicity() {
        let mut graph = Graph::new(2);
        graph.add_arc(v(0), v(1), 5).unwrap();
        graph.add_arc(v(0), v(1), 9).unwrap();

        assert_eq!(graph.arc_count(), 1);
        assert_eq!(graph.get_mark(v(0), v(1)), Ok(9));

        // A markless re-add keeps the stored mark
        graph.add_arc(v(0), v(1), None).unwrap();
        assert_eq!(graph.get_mark(v(0), v(1)), Ok(9));
    }

    #[test]
    fn test_out_of_bounds_vertex() {
        let mut graph = Graph::new(2);
        assert_eq!(
            graph.add_arc(v(0), v(5), 1),
            Err(Error::VertexOutOfBounds {
                vertex: v(5),
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_remove_arc() {
        let mut graph = Graph::new(2);
        graph.add_arc(v(0), v(1), 5).unwrap();

        graph.remove_arc(v(0), v(1)).unwrap();
        assert!(!graph.has_arc(v(0), v(1)));
        assert!(graph.get_mark(v(0), v(1)).is_err());

        assert_eq!(
            graph.remove_arc(v(0), v(1)),
            Err(Error::ArcNotFound {
                from: v(0),
                to: v(1)
            })
        );
    }

    #[test]
    fn test_backward_neighbors_mirror_arcs() {
        let mut graph = Graph::new(4);
        graph.add_arc(v(0), v(2), None).unwrap();
        graph.add_arc(v(1), v(2), None).unwrap();
        graph.add_arc(v(3), v(2), None).unwrap();

        let preds: Vec<_> = graph.backward_neighbors(v(2)).collect();
        assert_eq!(preds, vec![v(0), v(1), v(3)]);

        graph.remove_arc(v(1), v(2)).unwrap();
        let preds: Vec<_> = graph.backward_neighbors(v(2)).collect();
        assert_eq!(preds, vec![v(0), v(3)]);
    }

    #[test]
    fn test_set_mark_requires_arc() {
        let mut graph = Graph::new(2);
        assert!(graph.set_mark(v(0), v(1), 3).is_err());

        graph.add_arc(v(0), v(1), None).unwrap();
        graph.set_mark(v(0), v(1), 3).unwrap();
        assert_eq!(graph.get_mark(v(0), v(1)), Ok(3));
    }

    #[test]
    fn test_snapshot_marks_is_independent() {
        let mut graph = Graph::new(2);
        graph.add_arc(v(0), v(1), 7).unwrap();

        let mut snapshot = graph.snapshot_marks();
        snapshot.reset_all(0);

        assert_eq!(graph.get_mark(v(0), v(1)), Ok(7));
        assert_eq!(snapshot.get(v(0), v(1)), Ok(0));
    }

    #[test]
    fn test_arcs_iteration_grouped_by_tail() {
        let mut graph = Graph::new(3);
        graph.add_arc(v(2), v(0), None).unwrap();
        graph.add_arc(v(0), v(2), None).unwrap();
        graph.add_arc(v(0), v(1), None).unwrap();

        let arcs: Vec<_> = graph.arcs().collect();
        assert_eq!(arcs, vec![(v(0), v(2)), (v(0), v(1)), (v(2), v(0))]);
    }
}
