//! Undirected graph stored as mirrored arc pairs.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::Result;

use super::directed::Graph;

/// An undirected graph over a fixed set of vertices `0..n-1`.
///
/// Each edge is stored as two mirrored arcs `(u, v)` and `(v, u)` sharing
/// one conceptual weight; consumers see a single adjacency set per vertex.
/// All mutation goes through edge-level operations that keep the two
/// directions in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph {
    graph: Graph,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            graph: Graph::new(vertex_count),
        }
    }

    /// Wraps a directed graph whose arcs and marks are already symmetric.
    ///
    /// Used by contraction-style transformations that operate on the
    /// underlying arc representation and re-wrap the result. The caller is
    /// responsible for symmetry; edge-level accessors assume it.
    #[must_use]
    pub fn from_symmetric_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.arc_count() / 2
    }

    /// Iterates over all vertex ids in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.vertices()
    }

    /// Adds an edge between `u` and `v`, optionally weighting it.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        mark: impl Into<Option<Weight>>,
    ) -> Result<()> {
        let mark = mark.into();
        self.graph.add_arc(u, v, mark)?;
        self.graph.add_arc(v, u, mark)
    }

    /// Removes the edge between `u` and `v` along with its weight.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.graph.remove_arc(u, v)?;
        self.graph.remove_arc(v, u)
    }

    /// Returns `true` if an edge between `u` and `v` exists.
    #[must_use]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.graph.has_arc(u, v)
    }

    /// Iterates over the neighbors of a vertex in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.forward_neighbors(vertex)
    }

    /// Looks up the weight of an edge.
    pub fn get_mark(&self, u: VertexId, v: VertexId) -> Result<Weight> {
        self.graph.get_mark(u, v)
    }

    /// Sets the weight of an existing edge, updating both stored directions.
    pub fn set_mark(&mut self, u: VertexId, v: VertexId, value: Weight) -> Result<()> {
        self.graph.set_mark(u, v, value)?;
        self.graph.set_mark(v, u, value)
    }

    /// Returns the underlying symmetric directed graph.
    #[must_use]
    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }
}
