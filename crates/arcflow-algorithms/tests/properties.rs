//! Property tests across the algorithm suite.

use arcflow_algorithms::{bellman_ford, dijkstra, floyd_warshall, johnson, max_flow};
use arcflow_common::types::{VertexId, Weight};
use arcflow_core::graph::Graph;
use proptest::prelude::*;

const VERTICES: usize = 8;

fn v(id: u32) -> VertexId {
    VertexId::new(id)
}

/// Random directed graph over a fixed vertex count; self-loops are dropped
/// by construction.
fn graph_strategy(
    weights: impl Strategy<Value = Weight> + Clone,
) -> impl Strategy<Value = Graph> {
    proptest::collection::vec(
        (0..VERTICES as u32, 0..VERTICES as u32, weights),
        0..60,
    )
    .prop_map(|arcs| {
        let mut graph = Graph::new(VERTICES);
        for (from, to, weight) in arcs {
            graph.add_arc(v(from), v(to), weight).unwrap();
        }
        graph
    })
}

/// Random DAG: arcs always run from a lower to a higher index, so cycles
/// (negative or otherwise) cannot occur no matter the weights.
fn dag_strategy(weights: impl Strategy<Value = Weight> + Clone) -> impl Strategy<Value = Graph> {
    proptest::collection::vec(
        (0..VERTICES as u32, 0..VERTICES as u32, weights),
        0..60,
    )
    .prop_map(|arcs| {
        let mut graph = Graph::new(VERTICES);
        for (a, b, weight) in arcs {
            if a == b {
                continue;
            }
            graph.add_arc(v(a.min(b)), v(a.max(b)), weight).unwrap();
        }
        graph
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bellman_ford_agrees_with_dijkstra_on_nonnegative_weights(
        graph in graph_strategy(0i64..50)
    ) {
        let relaxed = bellman_ford(&graph, v(0)).unwrap();
        let greedy = dijkstra(&graph, v(0)).unwrap();

        prop_assert!(!relaxed.has_negative_cycle());
        prop_assert_eq!(relaxed.distances, greedy.distances);
    }

    #[test]
    fn prop_johnson_matches_floyd_warshall_on_dags(
        graph in dag_strategy(-30i64..30)
    ) {
        let reweighted = johnson(&graph).unwrap();
        let dense = floyd_warshall(&graph).unwrap();

        prop_assert_eq!(reweighted.distances, dense.distances);
    }

    #[test]
    fn prop_max_flow_equals_min_cut_capacity(
        graph in graph_strategy(1i64..30)
    ) {
        let source = v(0);
        let target = v(VERTICES as u32 - 1);
        let result = max_flow(&graph, source, target).unwrap();

        // Duality: the cut the final search reports pays for the flow
        let cut_capacity: Weight = result
            .cut_arcs(&graph)
            .into_iter()
            .map(|(from, to)| graph.get_mark(from, to).unwrap())
            .sum();
        prop_assert_eq!(result.value, cut_capacity);

        // Capacity bounds and conservation
        for (from, to) in graph.arcs() {
            let flow = result.flow.get(from, to).unwrap();
            prop_assert!(flow >= 0);
            prop_assert!(flow <= graph.get_mark(from, to).unwrap());
        }
        for vertex in graph.vertices() {
            if vertex == source || vertex == target {
                continue;
            }
            let inflow: Weight = graph
                .backward_neighbors(vertex)
                .map(|from| result.flow.get(from, vertex).unwrap())
                .sum();
            let outflow: Weight = graph
                .forward_neighbors(vertex)
                .map(|to| result.flow.get(vertex, to).unwrap())
                .sum();
            prop_assert_eq!(inflow, outflow);
        }
    }
}
