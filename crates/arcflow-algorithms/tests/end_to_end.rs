//! Cross-algorithm integration tests over one shared network.

use arcflow_algorithms::{
    bellman_ford, floyd_warshall, johnson, max_flow, max_flow_multi, min_cost_flow,
};
use arcflow_common::types::{VertexId, Weight};
use arcflow_core::graph::{ArcMarks, Graph};
use arcflow_core::transform;

fn v(id: u32) -> VertexId {
    VertexId::new(id)
}

/// The classic six-vertex network with capacities and costs.
fn capacitated_network() -> (Graph, ArcMarks) {
    let arcs: [(u32, u32, Weight, Weight); 10] = [
        (0, 1, 3, 10),
        (0, 2, 15, 7),
        (1, 2, 7, 12),
        (1, 3, 2, 3),
        (2, 1, 13, 22),
        (2, 4, 5, 16),
        (3, 2, 1, 1),
        (3, 5, 20, 20),
        (4, 3, 3, 14),
        (4, 5, 4, 31),
    ];

    let mut graph = Graph::new(6);
    let mut costs = ArcMarks::new();
    for (from, to, capacity, cost) in arcs {
        graph.add_arc(v(from), v(to), capacity).unwrap();
        costs.set(v(from), v(to), cost);
    }
    (graph, costs)
}

#[test]
fn min_cost_flow_achieves_the_max_flow_value() {
    let (graph, costs) = capacitated_network();

    let plain = max_flow(&graph, v(0), v(5)).unwrap();
    let cheap = min_cost_flow(&graph, &costs, v(0), v(5)).unwrap();

    assert_eq!(plain.value, 7);
    assert_eq!(cheap.flow_value, 7);
    assert_eq!(cheap.total_cost, 339);
}

#[test]
fn single_terminal_flow_matches_degenerate_multi_terminal_flow() {
    let (graph, _) = capacitated_network();

    let single = max_flow(&graph, v(0), v(5)).unwrap();
    let multi = max_flow_multi(&graph, &[v(0)], &[v(5)]).unwrap();

    assert_eq!(single.value, multi.value);
}

#[test]
fn johnson_and_floyd_warshall_agree_on_the_cost_overlay() {
    // Reinterpret the cost overlay as arc weights
    let (graph, costs) = capacitated_network();
    let mut weighted = graph.clone();
    for (from, to) in graph.arcs() {
        weighted
            .set_mark(from, to, costs.get(from, to).unwrap())
            .unwrap();
    }

    let reweighted = johnson(&weighted).unwrap();
    let dense = floyd_warshall(&weighted).unwrap();
    assert_eq!(reweighted.distances, dense.distances);

    // Spot check against a single-source run
    let single = bellman_ford(&weighted, v(0)).unwrap();
    for vertex in weighted.vertices() {
        assert_eq!(reweighted.distance(v(0), vertex), single.distance(vertex));
    }
}

#[test]
fn synthetic_terminals_leave_the_original_graph_untouched() {
    let (graph, _) = capacitated_network();
    let before = graph.clone();

    let (expanded, source) = transform::add_synthetic_source(&graph, &[v(0), v(1)], 99).unwrap();
    let _ = max_flow(&expanded, source, v(5)).unwrap();

    assert_eq!(graph, before);
}

#[test]
fn repeated_invocations_are_deterministic() {
    let (graph, costs) = capacitated_network();

    let first = min_cost_flow(&graph, &costs, v(0), v(5)).unwrap();
    let second = min_cost_flow(&graph, &costs, v(0), v(5)).unwrap();
    assert_eq!(first, second);

    let flow_a = max_flow(&graph, v(0), v(5)).unwrap();
    let flow_b = max_flow(&graph, v(0), v(5)).unwrap();
    assert_eq!(flow_a, flow_b);
}
