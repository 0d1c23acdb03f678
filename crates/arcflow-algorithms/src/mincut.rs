//! Global minimum cut by the Stoer-Wagner contraction algorithm.

use arcflow_common::types::{ARC_WEIGHT_LIMIT, VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_core::graph::UndirectedGraph;
use arcflow_core::transform;

/// Computes the weight of a global minimum cut of a weighted undirected
/// graph.
///
/// Each phase runs a maximum-adjacency ordering: vertices join a growing
/// set in order of their total edge weight into it, and the connectivity of
/// the last vertex added is the cut separating it from everything else (the
/// cut of the phase). The two last-added vertices are then contracted via
/// [`transform::merge_vertices`], which sums parallel edges, and the phases
/// repeat until one vertex remains. The lightest cut of any phase is the
/// global minimum; a disconnected graph yields zero.
///
/// Every edge must carry a non-negative weight.
///
/// # Complexity
///
/// O(|V|³) with the plain selection scan used here.
pub fn stoer_wagner(graph: &UndirectedGraph) -> Result<Weight> {
    if graph.vertex_count() < 2 {
        return Err(Error::InvalidInput(
            "global minimum cut requires at least two vertices".into(),
        ));
    }

    let mut current = graph.clone();
    let mut best_cut = ARC_WEIGHT_LIMIT;

    while current.vertex_count() > 1 {
        let (cut_of_phase, s, t) = minimum_cut_phase(&current)?;
        best_cut = best_cut.min(cut_of_phase);
        tracing::trace!(
            "cut of the phase is {} at {} vertices",
            cut_of_phase,
            current.vertex_count()
        );

        let (merged, _mapping) = transform::merge_vertices(current.as_graph(), &[s, t])?;
        current = UndirectedGraph::from_symmetric_graph(merged);
    }

    Ok(best_cut)
}

/// One maximum-adjacency phase. Returns the cut of the phase and the last
/// two vertices of the ordering. The graph must have at least two vertices.
fn minimum_cut_phase(graph: &UndirectedGraph) -> Result<(Weight, VertexId, VertexId)> {
    let n = graph.vertex_count();
    let mut added = vec![false; n];
    let mut connectivity: Vec<Weight> = vec![0; n];
    let mut order: Vec<VertexId> = Vec::with_capacity(n);

    for _ in 0..n {
        // Most strongly connected vertex not yet added; the strict
        // comparison keeps the scan deterministic.
        let mut next: Option<VertexId> = None;
        for vertex in graph.vertices() {
            if added[vertex.index()] {
                continue;
            }
            if next.is_none_or(|best| connectivity[vertex.index()] > connectivity[best.index()]) {
                next = Some(vertex);
            }
        }
        let Some(next) = next else {
            break;
        };

        added[next.index()] = true;
        order.push(next);
        for to in graph.neighbors(next) {
            if !added[to.index()] {
                connectivity[to.index()] += graph.get_mark(next, to)?;
            }
        }
    }

    let t = order[order.len() - 1];
    let s = order[order.len() - 2];
    Ok((connectivity[t.index()], s, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_stoer_wagner_simple() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(v(0), v(1), 10).unwrap();
        graph.add_edge(v(0), v(2), 4).unwrap();
        graph.add_edge(v(1), v(2), 5).unwrap();
        graph.add_edge(v(1), v(3), 6).unwrap();
        graph.add_edge(v(2), v(3), 5).unwrap();

        // Cutting {3} off costs 6 + 5 = 11, cheaper than any other cut
        assert_eq!(stoer_wagner(&graph), Ok(11));
    }

    #[test]
    fn test_stoer_wagner_single_bridge() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(v(0), v(1), 8).unwrap();
        graph.add_edge(v(1), v(2), 2).unwrap();
        graph.add_edge(v(2), v(3), 9).unwrap();

        assert_eq!(stoer_wagner(&graph), Ok(2));
    }

    #[test]
    fn test_stoer_wagner_disconnected_graph() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(v(0), v(1), 3).unwrap();
        graph.add_edge(v(2), v(3), 4).unwrap();

        assert_eq!(stoer_wagner(&graph), Ok(0));
    }

    #[test]
    fn test_stoer_wagner_needs_two_vertices() {
        assert!(matches!(
            stoer_wagner(&UndirectedGraph::new(1)),
            Err(Error::InvalidInput(_))
        ));
    }
}
