//! Minimum spanning tree by Prim's algorithm.

use std::collections::BinaryHeap;

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_core::graph::UndirectedGraph;

use crate::traits::MinScored;

/// Result of a minimum-spanning-tree computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    /// Total weight of the tree edges.
    pub total_weight: Weight,
    /// Tree edges in join order, each as `(tree vertex, newly joined
    /// vertex)`.
    pub edges: Vec<(VertexId, VertexId)>,
}

/// Computes a minimum spanning tree.
///
/// Grows the tree from vertex `0`, repeatedly taking the lightest edge from
/// a discovered vertex to an undiscovered one off a [`MinScored`] heap.
/// Every edge must carry a weight. The graph must be connected: an
/// undiscoverable vertex is a fatal [`Error::UnreachableVertex`].
///
/// # Complexity
///
/// O(|E| · log |E|)
pub fn prim(graph: &UndirectedGraph) -> Result<MstResult> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(MstResult {
            total_weight: 0,
            edges: Vec::new(),
        });
    }

    let mut discovered = vec![false; n];
    let mut heap: BinaryHeap<MinScored<Weight, (VertexId, VertexId)>> = BinaryHeap::new();
    let mut edges = Vec::with_capacity(n - 1);
    let mut total_weight = 0;

    let start = VertexId::new(0);
    discovered[start.index()] = true;
    push_incident_edges(graph, start, &discovered, &mut heap)?;

    while edges.len() + 1 < n {
        let Some(MinScored(weight, (from, to))) = heap.pop() else {
            let unreached = discovered
                .iter()
                .position(|&seen| !seen)
                .map(|index| VertexId::new(index as u32))
                .unwrap_or(start);
            return Err(Error::UnreachableVertex(unreached));
        };
        // `from` was discovered when the edge was pushed; `to` may have
        // been discovered since.
        if discovered[to.index()] {
            continue;
        }

        discovered[to.index()] = true;
        edges.push((from, to));
        total_weight += weight;
        push_incident_edges(graph, to, &discovered, &mut heap)?;
    }

    Ok(MstResult {
        total_weight,
        edges,
    })
}

fn push_incident_edges(
    graph: &UndirectedGraph,
    vertex: VertexId,
    discovered: &[bool],
    heap: &mut BinaryHeap<MinScored<Weight, (VertexId, VertexId)>>,
) -> Result<()> {
    for to in graph.neighbors(vertex) {
        if !discovered[to.index()] {
            heap.push(MinScored(graph.get_mark(vertex, to)?, (vertex, to)));
        }
    }
    Ok(())
}
