//! Maximum flow by Ford-Fulkerson augmenting-path search.
//!
//! The residual graph is never materialized: forward residual arcs come from
//! the capacity marks minus the current flow, backward residual arcs from
//! the current flow read through the mirrored in-neighbor sets. Each search
//! is an explicit-stack depth-first traversal carrying an iterator position
//! per frame, so deep graphs cannot overflow the call stack and reaching the
//! target terminates the search branch-locally.

use smallvec::SmallVec;

use arcflow_common::types::{ARC_WEIGHT_LIMIT, VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_common::utils::hash::FastHashSet;
use arcflow_core::graph::{ArcMarks, Graph};
use arcflow_core::transform;

/// A minimum cut: the partition of vertices witnessing flow optimality.
#[derive(Debug, Clone, PartialEq)]
pub struct MinCut {
    /// Vertices reachable in the final residual search, the source included.
    pub source_side: Vec<VertexId>,
    /// The remaining vertices, the target included.
    pub target_side: Vec<VertexId>,
}

/// Result of a maximum-flow computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlowResult {
    /// Total flow leaving the source.
    pub value: Weight,
    /// Flow assigned to each capacitated arc.
    pub flow: ArcMarks,
    /// The witnessing minimum cut.
    pub min_cut: MinCut,
}

impl MaxFlowResult {
    /// Returns the saturated arcs crossing the cut from source side to
    /// target side. Their capacities sum to the flow value.
    #[must_use]
    pub fn cut_arcs(&self, graph: &Graph) -> Vec<(VertexId, VertexId)> {
        let target_side: FastHashSet<VertexId> =
            self.min_cut.target_side.iter().copied().collect();

        let mut arcs = Vec::new();
        for &from in &self.min_cut.source_side {
            for to in graph.forward_neighbors(from) {
                if target_side.contains(&to) {
                    arcs.push((from, to));
                }
            }
        }
        arcs
    }
}

/// One step of an augmenting path: the arc it crosses and whether it is
/// crossed forward (gaining flow) or backward (cancelling flow).
type PathStep = (VertexId, VertexId, bool);

struct AugmentingPath {
    steps: SmallVec<[PathStep; 8]>,
    bottleneck: Weight,
}

enum SearchOutcome {
    /// A path to the target, ready to apply.
    Augmenting(AugmentingPath),
    /// No path; the flag vector records the vertices the search reached.
    Exhausted(Vec<bool>),
}

#[derive(Clone, Copy)]
struct SearchLabel {
    prev: VertexId,
    forward: bool,
    bottleneck: Weight,
}

/// Residual arcs leaving `vertex`: `(next, forward, residual capacity)`.
fn residual_candidates(
    graph: &Graph,
    flow: &ArcMarks,
    vertex: VertexId,
) -> Result<Vec<(VertexId, bool, Weight)>> {
    let mut candidates = Vec::new();
    for to in graph.forward_neighbors(vertex) {
        let capacity = graph.get_mark(vertex, to)?;
        let current = flow.get(vertex, to)?;
        if current < capacity {
            candidates.push((to, true, capacity - current));
        }
    }
    for from in graph.backward_neighbors(vertex) {
        let current = flow.get(from, vertex)?;
        if current > 0 {
            candidates.push((from, false, current));
        }
    }
    Ok(candidates)
}

fn search(
    graph: &Graph,
    flow: &ArcMarks,
    source: VertexId,
    target: VertexId,
) -> Result<SearchOutcome> {
    let n = graph.vertex_count();
    let mut labels: Vec<Option<SearchLabel>> = vec![None; n];

    let root_candidates = residual_candidates(graph, flow, source)?;
    let mut stack: Vec<(VertexId, Vec<(VertexId, bool, Weight)>, usize)> =
        vec![(source, root_candidates, 0)];

    while let Some((vertex, candidates, position)) = stack.last_mut() {
        if *position >= candidates.len() {
            stack.pop();
            continue;
        }
        let (next, forward, residual) = candidates[*position];
        *position += 1;

        if next == source || labels[next.index()].is_some() {
            continue;
        }

        let bottleneck = match labels[vertex.index()] {
            Some(label) => label.bottleneck.min(residual),
            None => residual, // leaving the search root
        };
        labels[next.index()] = Some(SearchLabel {
            prev: *vertex,
            forward,
            bottleneck,
        });

        if next == target {
            let mut steps: SmallVec<[PathStep; 8]> = SmallVec::new();
            let mut current = target;
            while let Some(label) = labels[current.index()] {
                if label.forward {
                    steps.push((label.prev, current, true));
                } else {
                    steps.push((current, label.prev, false));
                }
                current = label.prev;
            }
            debug_assert_eq!(current, source);
            return Ok(SearchOutcome::Augmenting(AugmentingPath { steps, bottleneck }));
        }

        let next_candidates = residual_candidates(graph, flow, next)?;
        stack.push((next, next_candidates, 0));
    }

    let mut reached: Vec<bool> = labels.iter().map(Option::is_some).collect();
    reached[source.index()] = true;
    Ok(SearchOutcome::Exhausted(reached))
}

fn apply_augmentation(flow: &mut ArcMarks, path: &AugmentingPath) -> Result<()> {
    for &(from, to, forward) in &path.steps {
        let delta = if forward {
            path.bottleneck
        } else {
            -path.bottleneck
        };
        flow.adjust(from, to, delta)?;
    }
    Ok(())
}

/// Computes the maximum flow from `source` to `target`.
///
/// Every arc's mark is read as its capacity; capacities must be finite
/// non-negative integers for the augmenting-path iteration to terminate.
/// Flow starts at zero and grows by one residual augmenting path per
/// iteration until no path remains, which is the termination condition.
/// The vertices reached by the last (failed) residual search form the
/// source side of the returned minimum cut.
pub fn max_flow(graph: &Graph, source: VertexId, target: VertexId) -> Result<MaxFlowResult> {
    graph.validate_vertex(source)?;
    graph.validate_vertex(target)?;
    if source == target {
        return Err(Error::SourceIsTarget);
    }

    let mut flow = graph.snapshot_marks();
    flow.reset_all(0);

    let reached = loop {
        match search(graph, &flow, source, target)? {
            SearchOutcome::Augmenting(path) => {
                apply_augmentation(&mut flow, &path)?;
                tracing::trace!(
                    "augmented by {} along a {}-arc residual path",
                    path.bottleneck,
                    path.steps.len()
                );
            }
            SearchOutcome::Exhausted(reached) => break reached,
        }
    };

    let mut value = 0;
    for to in graph.forward_neighbors(source) {
        value += flow.get(source, to)?;
    }
    tracing::debug!("max flow from {} to {} is {}", source, target, value);

    let (source_side, target_side): (Vec<VertexId>, Vec<VertexId>) =
        graph.vertices().partition(|v| reached[v.index()]);

    Ok(MaxFlowResult {
        value,
        flow,
        min_cut: MinCut {
            source_side,
            target_side,
        },
    })
}

/// Computes the maximum flow from any of `sources` to any of `targets`.
///
/// Synthesizes a super-source and super-target wired at
/// [`ARC_WEIGHT_LIMIT`] capacity, delegates to [`max_flow`], and restricts
/// the reported flow overlay and cut partition back to the input graph's
/// vertices.
pub fn max_flow_multi(
    graph: &Graph,
    sources: &[VertexId],
    targets: &[VertexId],
) -> Result<MaxFlowResult> {
    if sources.is_empty() || targets.is_empty() {
        return Err(Error::InvalidInput(
            "multi-terminal max flow needs at least one source and one target".into(),
        ));
    }

    let (expanded, super_source) =
        transform::add_synthetic_source(graph, sources, ARC_WEIGHT_LIMIT)?;
    let (expanded, super_target) =
        transform::add_synthetic_target(&expanded, targets, ARC_WEIGHT_LIMIT)?;

    let result = max_flow(&expanded, super_source, super_target)?;

    let n = graph.vertex_count();
    let flow: ArcMarks = result
        .flow
        .iter()
        .filter(|&((from, to), _)| from.index() < n && to.index() < n)
        .collect();
    let restrict =
        |side: Vec<VertexId>| side.into_iter().filter(|v| v.index() < n).collect::<Vec<_>>();

    Ok(MaxFlowResult {
        value: result.value,
        flow,
        min_cut: MinCut {
            source_side: restrict(result.min_cut.source_side),
            target_side: restrict(result.min_cut.target_side),
        },
    })
}
