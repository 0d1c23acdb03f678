//! # arcflow-algorithms
//!
//! Graph algorithms over the Arcflow data model.
//!
//! Every algorithm is a pure function over an explicit graph (plus overlay)
//! value: nothing holds hidden mutable state, so algorithms compose by plain
//! function chaining. Johnson calls Bellman-Ford once and Dijkstra per
//! vertex, min-cost-flow calls Bellman-Ford every iteration, and the
//! matching wrappers call straight into the flow engine.
//!
//! ## Algorithm Categories
//!
//! - Shortest paths: [`bellman_ford`], [`dijkstra`], [`floyd_warshall`],
//!   [`johnson`] / [`all_pairs_shortest_paths`]
//! - Network flow: [`max_flow`], [`max_flow_multi`], [`min_cost_flow`]
//! - Matching & assignment: [`max_matching`], [`optimal_assignment`],
//!   [`bottleneck_assignment`]
//! - Minimum spanning tree: [`prim`]
//! - Global minimum cut: [`stoer_wagner`]
//! - Exact traveling salesman: [`tsp`]
//! - Critical-path scheduling: [`critical_path`]

mod flow;
mod matching;
mod min_cost_flow;
mod mincut;
mod mst;
mod scheduling;
mod shortest_path;
mod traits;
mod tsp;

// Core traits and helpers
pub use traits::MinScored;

// Shortest path algorithms
pub use shortest_path::{
    AllPairsShortestPaths, BellmanFordResult, DijkstraResult, all_pairs_shortest_paths,
    bellman_ford, dijkstra, floyd_warshall, johnson,
};

// Network flow algorithms
pub use flow::{MaxFlowResult, MinCut, max_flow, max_flow_multi};
pub use min_cost_flow::{MinCostFlowResult, min_cost_flow};

// Matching and assignment
pub use matching::{
    AssignmentResult, BottleneckAssignment, MatchingResult, bottleneck_assignment, max_matching,
    optimal_assignment,
};

// Minimum spanning tree
pub use mst::{MstResult, prim};

// Global minimum cut
pub use mincut::stoer_wagner;

// Traveling salesman
pub use tsp::{TspResult, tsp};

// Critical-path scheduling
pub use scheduling::{CriticalPathResult, critical_path};
