//! Pure graph transformations.
//!
//! Every function here returns a new graph and leaves its input untouched,
//! so callers can reuse one graph across repeated invocations without
//! aliasing hazards. The flow engines use these to synthesize super-sources,
//! super-sinks, and contracted graphs.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastHashSet;

use crate::graph::Graph;

/// Returns a new graph with every arc reversed and its mark preserved.
#[must_use]
pub fn inverse(graph: &Graph) -> Graph {
    let mut reversed = Graph::new(graph.vertex_count());
    for (from, to) in graph.arcs() {
        reversed.insert_arc(to, from, graph.get_mark(from, to).ok());
    }
    reversed
}

/// Returns a copy of the graph with one extra isolated vertex appended.
#[must_use]
pub fn add_vertex(graph: &Graph) -> Graph {
    let mut expanded = Graph::new(graph.vertex_count() + 1);
    for (from, to) in graph.arcs() {
        expanded.insert_arc(from, to, graph.get_mark(from, to).ok());
    }
    expanded
}

/// Appends a synthetic source wired to each of `sources` with `mark`-weighted
/// arcs, returning the expanded graph and the new vertex's id.
///
/// Flow callers pass [`ARC_WEIGHT_LIMIT`](arcflow_common::ARC_WEIGHT_LIMIT)
/// as the mark to make the wiring effectively uncapacitated.
pub fn add_synthetic_source(
    graph: &Graph,
    sources: &[VertexId],
    mark: Weight,
) -> Result<(Graph, VertexId)> {
    for &source in sources {
        graph.validate_vertex(source)?;
    }

    let new_vertex = VertexId::new(graph.vertex_count() as u32);
    let mut expanded = add_vertex(graph);
    for &source in sources {
        expanded.insert_arc(new_vertex, source, Some(mark));
    }
    Ok((expanded, new_vertex))
}

/// Appends a synthetic target wired from each of `targets` with
/// `mark`-weighted arcs, returning the expanded graph and the new vertex's id.
pub fn add_synthetic_target(
    graph: &Graph,
    targets: &[VertexId],
    mark: Weight,
) -> Result<(Graph, VertexId)> {
    for &target in targets {
        graph.validate_vertex(target)?;
    }

    let new_vertex = VertexId::new(graph.vertex_count() as u32);
    let mut expanded = add_vertex(graph);
    for &target in targets {
        expanded.insert_arc(target, new_vertex, Some(mark));
    }
    Ok((expanded, new_vertex))
}

/// Collapses a set of vertices onto the first one listed.
///
/// Returns a smaller graph (remaining vertices renumbered densely, in their
/// original order) together with the old-to-new index mapping. Arcs incident
/// to the merged set are redirected to the representative; parallel arcs
/// created by the merge have their marks summed into one; arcs interior to
/// the merged set become self-loops and are dropped.
pub fn merge_vertices(
    graph: &Graph,
    vertices: &[VertexId],
) -> Result<(Graph, Vec<VertexId>)> {
    let mut merged_set: FastHashSet<VertexId> = FastHashSet::default();
    for &vertex in vertices {
        graph.validate_vertex(vertex)?;
        merged_set.insert(vertex);
    }
    if merged_set.len() < 2 {
        return Err(Error::InvalidInput(
            "merge requires at least two distinct vertices".into(),
        ));
    }

    let representative = vertices[0];
    let old_count = graph.vertex_count();
    let new_count = old_count - (merged_set.len() - 1);

    // Surviving vertices keep their relative order; merged ones land on the
    // representative's new id.
    let mut mapping = vec![VertexId::new(0); old_count];
    let mut next_id = 0u32;
    for old in graph.vertices() {
        if merged_set.contains(&old) && old != representative {
            continue;
        }
        mapping[old.index()] = VertexId::new(next_id);
        next_id += 1;
    }
    let merged_id = mapping[representative.index()];
    for &vertex in &merged_set {
        mapping[vertex.index()] = merged_id;
    }

    let mut contracted = Graph::new(new_count);
    for (from, to) in graph.arcs() {
        let new_from = mapping[from.index()];
        let new_to = mapping[to.index()];
        if new_from == new_to {
            continue;
        }

        let mark = graph.get_mark(from, to).ok();
        let combined = if contracted.has_arc(new_from, new_to) {
            match (contracted.get_mark(new_from, new_to).ok(), mark) {
                (Some(existing), Some(incoming)) => Some(existing + incoming),
                (existing, incoming) => existing.or(incoming),
            }
        } else {
            mark
        };
        contracted.insert_arc(new_from, new_to, combined);
    }

    Ok((contracted, mapping))
}

/// Splits a vertex in two, moving its outgoing arcs onto a fresh vertex.
///
/// The new vertex is appended at index `n`; `vertex` keeps its incoming
/// arcs and gains a `mark`-weighted arc to the new vertex (mirrored when
/// `bidirectional` is set).
pub fn split_vertex(
    graph: &Graph,
    vertex: VertexId,
    mark: Option<Weight>,
    bidirectional: bool,
) -> Result<Graph> {
    graph.validate_vertex(vertex)?;

    let new_vertex = VertexId::new(graph.vertex_count() as u32);
    let mut split = Graph::new(graph.vertex_count() + 1);
    for (from, to) in graph.arcs() {
        let mark = graph.get_mark(from, to).ok();
        let from = if from == vertex { new_vertex } else { from };
        split.insert_arc(from, to, mark);
    }

    split.insert_arc(vertex, new_vertex, mark);
    if bidirectional {
        split.insert_arc(new_vertex, vertex, mark);
    }
    Ok(split)
}
