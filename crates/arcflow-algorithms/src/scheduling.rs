//! Critical-path analysis of activity networks.

use arcflow_common::types::{VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_core::graph::{ArcMarks, Graph};

/// Result of a critical-path analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPathResult {
    /// Earliest completion time of the whole project.
    pub total_time: Weight,
    /// Earliest event time per vertex.
    pub earliest: Vec<Weight>,
    /// Latest event time per vertex that keeps the project on schedule.
    pub latest: Vec<Weight>,
    /// Free slack per activity arc: delay that moves no other activity.
    pub free_slack: ArcMarks,
    /// Total slack per activity arc: delay that keeps the project on time.
    pub total_slack: ArcMarks,
}

/// Analyzes an activity-on-arc network.
///
/// The network must be numbered topologically: vertex `0` is the project
/// start, vertex `n-1` the finish, and every arc runs from a lower to a
/// higher index (checked eagerly). Arc marks are activity durations.
///
/// A forward sweep over the mirrored in-neighbor sets yields earliest event
/// times, a backward sweep yields latest ones, and the two together price
/// each activity's slack. Zero-duration arcs are precedence dummies and are
/// left out of the slack overlays.
pub fn critical_path(graph: &Graph) -> Result<CriticalPathResult> {
    let n = graph.vertex_count();
    if n < 2 {
        return Err(Error::InvalidInput(
            "an activity network needs a start and a finish vertex".into(),
        ));
    }
    for (from, to) in graph.arcs() {
        if from >= to {
            return Err(Error::InvalidInput(format!(
                "activity network is not topologically numbered: arc ({from}, {to})"
            )));
        }
    }

    // Earliest event times, forward sweep
    let mut earliest: Vec<Weight> = vec![0; n];
    for vertex in graph.vertices().skip(1) {
        for prev in graph.backward_neighbors(vertex) {
            let candidate = earliest[prev.index()] + graph.get_mark(prev, vertex)?;
            earliest[vertex.index()] = earliest[vertex.index()].max(candidate);
        }
    }
    let total_time = earliest[n - 1];

    // Longest remaining path per vertex, backward sweep
    let mut remaining: Vec<Weight> = vec![0; n];
    for index in (0..n - 1).rev() {
        let vertex = VertexId::new(index as u32);
        for next in graph.forward_neighbors(vertex) {
            let candidate = remaining[next.index()] + graph.get_mark(vertex, next)?;
            remaining[vertex.index()] = remaining[vertex.index()].max(candidate);
        }
    }
    let latest: Vec<Weight> = remaining
        .iter()
        .map(|&path_left| total_time - path_left)
        .collect();

    let mut free_slack = ArcMarks::new();
    let mut total_slack = ArcMarks::new();
    for (from, to) in graph.arcs() {
        let duration = graph.get_mark(from, to)?;
        if duration == 0 {
            continue;
        }
        free_slack.set(
            from,
            to,
            earliest[to.index()] - earliest[from.index()] - duration,
        );
        total_slack.set(
            from,
            to,
            latest[to.index()] - earliest[from.index()] - duration,
        );
    }

    Ok(CriticalPathResult {
        total_time,
        earliest,
        latest,
        free_slack,
        total_slack,
    })
}
