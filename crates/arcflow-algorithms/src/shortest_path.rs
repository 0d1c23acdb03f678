//! Shortest path algorithms: Bellman-Ford, Dijkstra, Floyd-Warshall, Johnson.
//!
//! Bellman-Ford is the shared relaxation engine of the library: besides
//! standalone single-source queries it detects negative cycles for Johnson's
//! reweighting and prices augmenting paths for the min-cost-flow engine.

use std::collections::BinaryHeap;

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastHashSet;
use arcflow_core::graph::Graph;
use arcflow_core::transform;

use crate::traits::MinScored;

// ============================================================================
// Bellman-Ford
// ============================================================================

/// Result of a Bellman-Ford relaxation run.
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult {
    /// Best known distance per vertex; `None` for vertices unreached from
    /// the source.
    pub distances: Vec<Option<Weight>>,
    /// Predecessor on the best known path per vertex; `None` for the source
    /// and for unreached vertices.
    pub predecessors: Vec<Option<VertexId>>,
    /// Vertices that performed a successful relaxation during the final
    /// round, sorted. Non-empty exactly when a negative cycle is reachable
    /// from the source.
    pub relaxed_on_final_round: Vec<VertexId>,
}

impl BellmanFordResult {
    /// Returns `true` if the run exposed a reachable negative-weight cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        !self.relaxed_on_final_round.is_empty()
    }

    /// Returns the distance to a vertex, `None` if unreached.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    /// Reconstructs the source-to-`vertex` path from the predecessor marks.
    ///
    /// Returns `None` for unreached vertices and when the predecessor chain
    /// does not terminate (which only happens on negative cycles).
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        self.distance(vertex)?;

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessors.get(current.index()).copied().flatten() {
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes single-source shortest paths by Bellman-Ford relaxation.
///
/// Runs exactly `|V|` rounds; each round scans every vertex with a known
/// distance in index order and relaxes its outgoing arcs in place. Only a
/// strictly smaller candidate distance triggers an update, so the first
/// relaxing arc wins ties and the predecessor choice is stable. The rounds
/// beyond the `|V|-1`-th exist solely to expose negative cycles: any vertex
/// still relaxing on the final round lies on or reaches one, and callers
/// that need a cycle-free result must treat a non-empty
/// [`relaxed_on_final_round`](BellmanFordResult::relaxed_on_final_round) as
/// fatal.
///
/// Arc weights may be negative. Every arc must carry a mark.
///
/// # Complexity
///
/// O(|V| · |E|)
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<BellmanFordResult> {
    graph.validate_vertex(source)?;

    let n = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    distances[source.index()] = Some(0);

    let mut relaxed: FastHashSet<VertexId> = FastHashSet::default();
    for _round in 0..n {
        relaxed.clear();
        for from in graph.vertices() {
            let Some(from_distance) = distances[from.index()] else {
                continue;
            };
            for to in graph.forward_neighbors(from) {
                let candidate = from_distance + graph.get_mark(from, to)?;
                if distances[to.index()].is_none_or(|best| candidate < best) {
                    distances[to.index()] = Some(candidate);
                    predecessors[to.index()] = Some(from);
                    relaxed.insert(from);
                }
            }
        }
    }

    let mut relaxed_on_final_round: Vec<VertexId> = relaxed.into_iter().collect();
    relaxed_on_final_round.sort_unstable();

    Ok(BellmanFordResult {
        distances,
        predecessors,
        relaxed_on_final_round,
    })
}

// ============================================================================
// Dijkstra
// ============================================================================

/// Result of a Dijkstra run.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Best distance per vertex; `None` for vertices unreached from the
    /// source.
    pub distances: Vec<Option<Weight>>,
    /// Predecessor on the shortest path per vertex.
    pub predecessors: Vec<Option<VertexId>>,
}

impl DijkstraResult {
    /// Returns the distance to a vertex, `None` if unreached.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(vertex.index()).copied().flatten()
    }
}

/// Computes single-source shortest paths over non-negative arc weights.
///
/// Greedy selection of the minimum-distance undiscovered vertex each step,
/// driven by a binary heap of [`MinScored`] entries with lazy deletion.
/// Correct only when every arc weight is non-negative; Johnson's reweighting
/// guarantees that before calling in here.
///
/// # Complexity
///
/// O((|V| + |E|) · log |V|)
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<DijkstraResult> {
    graph.validate_vertex(source)?;

    let n = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut discovered = vec![false; n];
    let mut heap: BinaryHeap<MinScored<Weight, VertexId>> = BinaryHeap::new();

    distances[source.index()] = Some(0);
    heap.push(MinScored(0, source));

    while let Some(MinScored(distance, vertex)) = heap.pop() {
        if discovered[vertex.index()] {
            continue;
        }
        discovered[vertex.index()] = true;

        for to in graph.forward_neighbors(vertex) {
            let candidate = distance + graph.get_mark(vertex, to)?;
            if distances[to.index()].is_none_or(|best| candidate < best) {
                distances[to.index()] = Some(candidate);
                predecessors[to.index()] = Some(vertex);
                heap.push(MinScored(candidate, to));
            }
        }
    }

    Ok(DijkstraResult {
        distances,
        predecessors,
    })
}

// ============================================================================
// All-pairs: Floyd-Warshall and Johnson
// ============================================================================

/// All-pairs shortest distances.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsShortestPaths {
    /// `distances[u][v]` is the shortest distance from `u` to `v`, `None`
    /// when `v` is unreachable from `u`.
    pub distances: Vec<Vec<Option<Weight>>>,
}

impl AllPairsShortestPaths {
    /// Returns the distance from `from` to `to`, `None` if unreachable.
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.distances
            .get(from.index())
            .and_then(|row| row.get(to.index()))
            .copied()
            .flatten()
    }
}

/// Computes all-pairs shortest distances by the Floyd-Warshall recurrence.
///
/// Handles negative arc weights; a negative diagonal entry after the last
/// round means some vertex reaches itself at negative cost, which is
/// reported as a fatal [`Error::NegativeCycle`].
///
/// # Complexity
///
/// O(|V|³)
pub fn floyd_warshall(graph: &Graph) -> Result<AllPairsShortestPaths> {
    let n = graph.vertex_count();
    let mut distances: Vec<Vec<Option<Weight>>> = vec![vec![None; n]; n];

    for (from, to) in graph.arcs() {
        distances[from.index()][to.index()] = Some(graph.get_mark(from, to)?);
    }
    for i in 0..n {
        distances[i][i] = Some(0);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(first_leg) = distances[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(second_leg) = distances[k][j] else {
                    continue;
                };
                let candidate = first_leg + second_leg;
                if distances[i][j].is_none_or(|best| candidate < best) {
                    distances[i][j] = Some(candidate);
                }
            }
        }
    }

    let on_negative_cycle: Vec<VertexId> = (0..n)
        .map(|i| VertexId::new(i as u32))
        .filter(|v| distances[v.index()][v.index()].is_some_and(|d| d < 0))
        .collect();
    if !on_negative_cycle.is_empty() {
        return Err(Error::NegativeCycle {
            vertices: on_negative_cycle,
        });
    }

    Ok(AllPairsShortestPaths { distances })
}

/// Computes all-pairs shortest distances by Johnson's potential reweighting.
///
/// One Bellman-Ford run from a synthetic source (zero-weight arcs to every
/// vertex) produces per-vertex potentials; every arc is reweighted
/// `w - p(u) + p(v)`, which is non-negative once the potentials are correct,
/// so one Dijkstra run per source recovers the table. Distances are mapped
/// back through the potentials and unreached entries stay `None`.
///
/// Fails with [`Error::NegativeCycle`] when the graph contains one.
///
/// # Complexity
///
/// O(|V| · |E| + |V| · (|V| + |E|) · log |V|)
pub fn johnson(graph: &Graph) -> Result<AllPairsShortestPaths> {
    let n = graph.vertex_count();
    let every_vertex: Vec<VertexId> = graph.vertices().collect();

    let (augmented, synthetic_source) = transform::add_synthetic_source(graph, &every_vertex, 0)?;
    let relaxation = bellman_ford(&augmented, synthetic_source)?;
    if relaxation.has_negative_cycle() {
        return Err(Error::NegativeCycle {
            vertices: relaxation
                .relaxed_on_final_round
                .into_iter()
                .filter(|v| v.index() < n)
                .collect(),
        });
    }

    // Every real vertex is reachable through its zero-weight arc, so the
    // distance is always present.
    let potentials: Vec<Weight> = relaxation.distances[..n]
        .iter()
        .map(|distance| -distance.unwrap_or(0))
        .collect();
    tracing::debug!("computed potentials for {} vertices", n);

    let mut reweighted = graph.clone();
    for (from, to) in graph.arcs() {
        let weight = graph.get_mark(from, to)?;
        reweighted.set_mark(
            from,
            to,
            weight - potentials[from.index()] + potentials[to.index()],
        )?;
    }

    let mut distances = Vec::with_capacity(n);
    for from in graph.vertices() {
        let per_source = dijkstra(&reweighted, from)?;
        let row: Vec<Option<Weight>> = per_source
            .distances
            .iter()
            .enumerate()
            .map(|(to, distance)| {
                distance.map(|d| d + potentials[from.index()] - potentials[to])
            })
            .collect();
        distances.push(row);
    }

    Ok(AllPairsShortestPaths { distances })
}

/// Computes the all-pairs shortest-distance table.
///
/// Convenience entry point; delegates to [`johnson`].
pub fn all_pairs_shortest_paths(graph: &Graph) -> Result<AllPairsShortestPaths> {
    johnson(graph)
}
