//! # Arcflow
//!
//! A pure-Rust library of graph algorithms over one shared directed-graph
//! model with numeric arc marks (weights, capacities, costs, flows).
//!
//! The heart of the library is its flow and shortest-path engine: a
//! Bellman-Ford relaxation engine doubling as negative-cycle detector, a
//! Ford-Fulkerson maximum-flow engine with minimum-cut extraction, a
//! min-cost-flow engine over successive shortest augmenting paths, and
//! Johnson's potential reweighting for all-pairs distances on graphs with
//! negative arc weights. Around it sit the classic collaborators: Dijkstra,
//! Floyd-Warshall, Prim, Stoer-Wagner, bipartite matching and assignment,
//! exact TSP, and critical-path scheduling.
//!
//! Everything is deterministic, single-threaded, and in-memory. Algorithms
//! never mutate their input graph; transformations return new graphs.
//!
//! ## Quick Start
//!
//! ```rust
//! use arcflow::{Graph, VertexId, bellman_ford, max_flow};
//!
//! let mut graph = Graph::new(4);
//! graph.add_arc(VertexId::new(0), VertexId::new(1), 4)?;
//! graph.add_arc(VertexId::new(1), VertexId::new(2), 2)?;
//! graph.add_arc(VertexId::new(0), VertexId::new(2), 9)?;
//!
//! let paths = bellman_ford(&graph, VertexId::new(0))?;
//! assert_eq!(paths.distance(VertexId::new(2)), Some(6));
//! assert_eq!(paths.distance(VertexId::new(3)), None);
//!
//! // The same marks double as capacities for the flow engine
//! let flow = max_flow(&graph, VertexId::new(0), VertexId::new(2))?;
//! assert_eq!(flow.value, 11);
//! # Ok::<(), arcflow::Error>(())
//! ```

// Re-export the foundation types - you'll need these for ids and errors
pub use arcflow_common::{ARC_WEIGHT_LIMIT, Error, Result, VertexId, Weight};

// Re-export the graph model and transformations
pub use arcflow_core::graph::{ArcMarks, Graph, UndirectedGraph};
pub use arcflow_core::transform::{
    add_synthetic_source, add_synthetic_target, add_vertex, inverse, merge_vertices, split_vertex,
};

// Re-export every algorithm with its result type
pub use arcflow_algorithms::{
    AllPairsShortestPaths, AssignmentResult, BellmanFordResult, BottleneckAssignment,
    CriticalPathResult, DijkstraResult, MatchingResult, MaxFlowResult, MinCostFlowResult, MinCut,
    MstResult, TspResult, all_pairs_shortest_paths, bellman_ford, bottleneck_assignment,
    critical_path, dijkstra, floyd_warshall, johnson, max_flow, max_flow_multi, max_matching,
    min_cost_flow, optimal_assignment, prim, stoer_wagner, tsp,
};
