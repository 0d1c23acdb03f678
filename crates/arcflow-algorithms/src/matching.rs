//! Bipartite matching and assignment built on the flow engines.
//!
//! These wrappers compose graph-extension helpers with [`max_flow`] and
//! [`min_cost_flow`]: a synthetic source feeds one part at unit capacity, a
//! synthetic target drains the other, and the resulting flow picks the
//! matched arcs.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastHashSet;
use arcflow_core::graph::{ArcMarks, Graph};
use arcflow_core::transform;

use crate::flow::max_flow;
use crate::min_cost_flow::min_cost_flow;

/// Result of a maximum bipartite matching.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingResult {
    /// Number of matched pairs.
    pub size: Weight,
    /// Flow-carrying arcs between the two parts.
    pub arcs: Vec<(VertexId, VertexId)>,
}

/// Result of an optimal (minimum-cost) assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentResult {
    /// Whether every vertex of the smaller part got assigned.
    pub complete: bool,
    /// Total cost of the assignment.
    pub cost: Weight,
    /// The chosen row-to-column arcs.
    pub arcs: Vec<(VertexId, VertexId)>,
}

/// Result of a bottleneck assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct BottleneckAssignment {
    /// The maximized minimum element over complete assignments.
    pub min_element: Weight,
    /// Total cost of the assignment achieving it.
    pub cost: Weight,
    /// The chosen row-to-column arcs.
    pub arcs: Vec<(VertexId, VertexId)>,
}

/// Positive-flow arcs not incident to any excluded (synthetic) vertex.
fn arcs_with_flow(flow: &ArcMarks, excluded: &[VertexId]) -> Vec<(VertexId, VertexId)> {
    let excluded: FastHashSet<VertexId> = excluded.iter().copied().collect();
    flow.iter()
        .filter(|&((from, to), value)| {
            value > 0 && !excluded.contains(&from) && !excluded.contains(&to)
        })
        .map(|(pair, _)| pair)
        .collect()
}

/// Computes a maximum matching between `left` and the remaining vertices.
///
/// Arc marks are read as capacities, so an arc with a non-positive mark can
/// never be matched through. A synthetic source is wired to every `left`
/// vertex and a synthetic target from every other vertex, both at unit
/// capacity, and the flow engine does the rest.
pub fn max_matching(graph: &Graph, left: &[VertexId]) -> Result<MatchingResult> {
    for &vertex in left {
        graph.validate_vertex(vertex)?;
    }
    let left_set: FastHashSet<VertexId> = left.iter().copied().collect();
    let right: Vec<VertexId> = graph
        .vertices()
        .filter(|vertex| !left_set.contains(vertex))
        .collect();

    let (expanded, source) = transform::add_synthetic_source(graph, left, 1)?;
    let (expanded, target) = transform::add_synthetic_target(&expanded, &right, 1)?;

    let result = max_flow(&expanded, source, target)?;
    let arcs = arcs_with_flow(&result.flow, &[source, target]);

    Ok(MatchingResult {
        size: result.value,
        arcs,
    })
}

/// Builds the bipartite graph of a cost matrix: rows become vertices
/// `0..rows`, columns become `rows..rows+cols`, and entry `(i, j)` marks the
/// arc `i -> rows + j`. `None` entries produce no arc.
fn bipartite_graph_from_matrix(matrix: &[Vec<Option<Weight>>]) -> Result<(Graph, Vec<VertexId>)> {
    let rows = matrix.len();
    if rows == 0 {
        return Err(Error::InvalidInput("cost matrix must not be empty".into()));
    }
    let cols = matrix[0].len();
    if cols == 0 || matrix.iter().any(|row| row.len() != cols) {
        return Err(Error::InvalidInput(
            "cost matrix must be rectangular with at least one column".into(),
        ));
    }

    let mut graph = Graph::new(rows + cols);
    for (row, values) in matrix.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if let Some(value) = value {
                graph.add_arc(
                    VertexId::new(row as u32),
                    VertexId::new((rows + col) as u32),
                    value,
                )?;
            }
        }
    }
    let left: Vec<VertexId> = (0..rows as u32).map(VertexId::new).collect();
    Ok((graph, left))
}

/// Computes a minimum-cost assignment of rows to columns.
///
/// Builds the bipartite graph of the matrix, wires zero-cost synthetic
/// terminals around it, sets every capacity to one, and runs the
/// min-cost-flow engine. `complete` reports whether the achieved flow
/// saturates the smaller side.
pub fn optimal_assignment(cost_matrix: &[Vec<Weight>]) -> Result<AssignmentResult> {
    let matrix: Vec<Vec<Option<Weight>>> = cost_matrix
        .iter()
        .map(|row| row.iter().copied().map(Some).collect())
        .collect();
    let (graph, left) = bipartite_graph_from_matrix(&matrix)?;
    let rows = left.len();
    let cols = graph.vertex_count() - rows;

    let right: Vec<VertexId> = (rows as u32..(rows + cols) as u32)
        .map(VertexId::new)
        .collect();
    let (expanded, source) = transform::add_synthetic_source(&graph, &left, 0)?;
    let (mut expanded, target) = transform::add_synthetic_target(&expanded, &right, 0)?;

    let costs = expanded.snapshot_marks();

    // Unit capacity everywhere; the marks now carry flow limits, not costs.
    for (from, to) in costs.iter().map(|(pair, _)| pair) {
        expanded.set_mark(from, to, 1)?;
    }

    let result = min_cost_flow(&expanded, &costs, source, target)?;
    let arcs = arcs_with_flow(&result.flow, &[source, target]);

    Ok(AssignmentResult {
        complete: result.flow_value == rows.min(cols) as Weight,
        cost: result.total_cost,
        arcs,
    })
}

/// Computes the assignment maximizing its minimum element.
///
/// Repeatedly matches, then discards every arc costing no more than the
/// current assignment's minimum element, until no complete matching
/// remains; the last complete assignment wins. Returns `None` when not even
/// the initial matrix admits a complete matching. Entries are read as
/// capacities during matching, so non-positive entries are never matchable.
pub fn bottleneck_assignment(
    cost_matrix: &[Vec<Weight>],
) -> Result<Option<BottleneckAssignment>> {
    let mut matrix: Vec<Vec<Option<Weight>>> = cost_matrix
        .iter()
        .map(|row| row.iter().copied().map(Some).collect())
        .collect();
    let (mut graph, left) = bipartite_graph_from_matrix(&matrix)?;
    let rows = left.len();

    let mut best: Option<BottleneckAssignment> = None;

    loop {
        let matching = max_matching(&graph, &left)?;
        if matching.size != rows as Weight {
            break;
        }

        let values: Vec<Weight> = matching
            .arcs
            .iter()
            .filter_map(|&(from, to)| matrix[from.index()][to.index() - rows])
            .collect();
        debug_assert_eq!(values.len(), matching.arcs.len());

        let min_element = values.iter().copied().min().unwrap_or(0);
        let cost = values.iter().sum();
        best = Some(BottleneckAssignment {
            min_element,
            cost,
            arcs: matching.arcs,
        });
        tracing::debug!(
            "complete assignment with minimum element {}, eliminating arcs at or below it",
            min_element
        );

        // Discard every arc that cannot raise the minimum further.
        for row in 0..matrix.len() {
            for col in 0..matrix[row].len() {
                if matrix[row][col].is_some_and(|value| value <= min_element) {
                    matrix[row][col] = None;
                    graph.remove_arc(
                        VertexId::new(row as u32),
                        VertexId::new((rows + col) as u32),
                    )?;
                }
            }
        }
    }

    Ok(best)
}
