//! Minimum-cost maximum flow by successive shortest augmenting paths.

use smallvec::SmallVec;

use arcflow_common::types::{ARC_WEIGHT_LIMIT, VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};
use arcflow_core::graph::{ArcMarks, Graph};

use crate::shortest_path::bellman_ford;

/// Result of a minimum-cost-flow computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MinCostFlowResult {
    /// Total flow pushed from source to target (the maximum achievable).
    pub flow_value: Weight,
    /// Total cost of the pushed flow.
    pub total_cost: Weight,
    /// Flow assigned to each of the input graph's arcs.
    pub flow: ArcMarks,
}

/// Computes a maximum flow of minimum total cost from `source` to `target`.
///
/// Arc marks are read as capacities and `costs` as the parallel per-unit
/// cost overlay; every arc must appear in both. The residual network pairs
/// every arc with a zero-capacity reverse arc of negated cost (an existing
/// antiparallel arc is folded into that pairing), after which each iteration
/// prices the residual arcs (real cost while residual capacity remains,
/// [`ARC_WEIGHT_LIMIT`] once saturated) and runs Bellman-Ford from the
/// source. A target distance below the sentinel yields the cheapest
/// augmenting path, which is applied at its bottleneck residual capacity;
/// a target at or above the sentinel (or unreached) proves optimality and
/// stops the iteration.
///
/// A non-empty final-round relaxed set from any Bellman-Ford run means the
/// residual network has a negative-cost cycle, which is a modeling error and
/// aborts with [`Error::NegativeCycle`].
///
/// Capacities and costs must be finite integers bounded well below the
/// sentinel.
pub fn min_cost_flow(
    graph: &Graph,
    costs: &ArcMarks,
    source: VertexId,
    target: VertexId,
) -> Result<MinCostFlowResult> {
    graph.validate_vertex(source)?;
    graph.validate_vertex(target)?;
    if source == target {
        return Err(Error::SourceIsTarget);
    }

    // Residual network: pair every arc with a zero-capacity reverse arc of
    // negated cost.
    let mut residual = graph.clone();
    let mut residual_costs = costs.clone();
    for (from, to) in graph.arcs() {
        residual.add_arc(to, from, 0)?;
        residual_costs.set(to, from, -costs.get(from, to)?);
    }

    let mut flow = residual.snapshot_marks();
    flow.reset_all(0);

    // Reusable copy whose marks get repriced each iteration.
    let mut search_graph = residual.clone();

    let mut flow_value = 0;
    let mut total_cost = 0;

    loop {
        for (from, to) in residual.arcs() {
            let capacity = residual.get_mark(from, to)?;
            let current = flow.get(from, to)?;
            let weight = if current != capacity {
                residual_costs.get(from, to)?
            } else {
                ARC_WEIGHT_LIMIT
            };
            search_graph.set_mark(from, to, weight)?;
        }

        let shortest = bellman_ford(&search_graph, source)?;
        if shortest.has_negative_cycle() {
            return Err(Error::NegativeCycle {
                vertices: shortest.relaxed_on_final_round,
            });
        }

        let Some(path_cost) = shortest.distances[target.index()] else {
            break;
        };
        if path_cost >= ARC_WEIGHT_LIMIT {
            // Only saturated arcs lead to the target: no augmenting path is
            // left, so the current flow is optimal.
            break;
        }

        let mut steps: SmallVec<[(VertexId, VertexId); 8]> = SmallVec::new();
        let mut current = target;
        while let Some(prev) = shortest.predecessors[current.index()] {
            steps.push((prev, current));
            current = prev;
        }
        debug_assert_eq!(current, source);

        let mut bottleneck = ARC_WEIGHT_LIMIT;
        for &(from, to) in &steps {
            let residual_capacity = residual.get_mark(from, to)? - flow.get(from, to)?;
            bottleneck = bottleneck.min(residual_capacity);
        }
        if bottleneck == 0 {
            // Every remaining path to the target crosses a saturated arc.
            break;
        }

        for &(from, to) in &steps {
            flow.adjust(from, to, bottleneck)?;
            flow.adjust(to, from, -bottleneck)?;
            total_cost += residual_costs.get(from, to)? * bottleneck;
        }
        flow_value += bottleneck;
        tracing::debug!(
            "pushed {} units along a path of cost {}, total flow {}",
            bottleneck,
            path_cost,
            flow_value
        );
    }

    // Report flow on the input graph's arcs only; negative entries are
    // reverse-pairing bookkeeping and read as zero net flow.
    let mut result_flow = ArcMarks::new();
    for (from, to) in graph.arcs() {
        result_flow.set(from, to, flow.get(from, to)?.max(0));
    }

    Ok(MinCostFlowResult {
        flow_value,
        total_cost,
        flow: result_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn sample_network() -> (Graph, ArcMarks) {
        let mut graph = Graph::new(6);
        let mut costs = ArcMarks::new();
        let arc = |graph: &mut Graph, costs: &mut ArcMarks, from, to, capacity: Weight, cost| {
            graph.add_arc(v(from), v(to), capacity).unwrap();
            costs.set(v(from), v(to), cost);
        };

        arc(&mut graph, &mut costs, 0, 1, 3, 10);
        arc(&mut graph, &mut costs, 0, 2, 15, 7);
        arc(&mut graph, &mut costs, 1, 2, 7, 12);
        arc(&mut graph, &mut costs, 1, 3, 2, 3);
        arc(&mut graph, &mut costs, 2, 1, 13, 22);
        arc(&mut graph, &mut costs, 2, 4, 5, 16);
        arc(&mut graph, &mut costs, 3, 2, 1, 1);
        arc(&mut graph, &mut costs, 3, 5, 20, 20);
        arc(&mut graph, &mut costs, 4, 3, 3, 14);
        arc(&mut graph, &mut costs, 4, 5, 4, 31);

        (graph, costs)
    }

    #[test]
    fn test_min_cost_flow_simple() {
        let (graph, costs) = sample_network();
        let result = min_cost_flow(&graph, &costs, v(0), v(5)).unwrap();

        assert_eq!(result.flow_value, 7);
        assert_eq!(result.total_cost, 339);
    }

    #[test]
    fn test_min_cost_flow_reports_per_arc_flow() {
        let (graph, costs) = sample_network();
        let result = min_cost_flow(&graph, &costs, v(0), v(5)).unwrap();

        // Every input arc is reported with a flow within its capacity, and
        // the flow out of the source matches the flow value.
        let mut out_of_source = 0;
        for (from, to) in graph.arcs() {
            let flow = result.flow.get(from, to).unwrap();
            assert!(flow >= 0);
            assert!(flow <= graph.get_mark(from, to).unwrap());
            if from == v(0) {
                out_of_source += flow;
            }
        }
        assert_eq!(out_of_source, result.flow_value);
    }

    #[test]
    fn test_min_cost_flow_prefers_cheap_paths() {
        // Two disjoint unit paths; the cheaper one must carry flow first,
        // and the total must reflect both.
        let mut graph = Graph::new(4);
        let mut costs = ArcMarks::new();
        graph.add_arc(v(0), v(1), 1).unwrap();
        costs.set(v(0), v(1), 1);
        graph.add_arc(v(1), v(3), 1).unwrap();
        costs.set(v(1), v(3), 1);
        graph.add_arc(v(0), v(2), 1).unwrap();
        costs.set(v(0), v(2), 10);
        graph.add_arc(v(2), v(3), 1).unwrap();
        costs.set(v(2), v(3), 10);

        let result = min_cost_flow(&graph, &costs, v(0), v(3)).unwrap();

        assert_eq!(result.flow_value, 2);
        assert_eq!(result.total_cost, 22);
    }

    #[test]
    fn test_min_cost_flow_zero_when_nothing_to_push() {
        let mut graph = Graph::new(3);
        let mut costs = ArcMarks::new();
        graph.add_arc(v(1), v(2), 4).unwrap();
        costs.set(v(1), v(2), 2);

        let result = min_cost_flow(&graph, &costs, v(0), v(2)).unwrap();

        assert_eq!(result.flow_value, 0);
        assert_eq!(result.total_cost, 0);
    }

    #[test]
    fn test_min_cost_flow_negative_cycle_aborts() {
        // 1 -> 2 -> 3 -> 1 has total cost -1, which the residual search
        // must refuse to price.
        let mut graph = Graph::new(4);
        let mut costs = ArcMarks::new();
        graph.add_arc(v(0), v(1), 1).unwrap();
        costs.set(v(0), v(1), 1);
        graph.add_arc(v(1), v(2), 1).unwrap();
        costs.set(v(1), v(2), -5);
        graph.add_arc(v(2), v(3), 1).unwrap();
        costs.set(v(2), v(3), 2);
        graph.add_arc(v(3), v(1), 1).unwrap();
        costs.set(v(3), v(1), 2);

        assert!(matches!(
            min_cost_flow(&graph, &costs, v(0), v(3)),
            Err(Error::NegativeCycle { .. })
        ));
    }

    #[test]
    fn test_min_cost_flow_precondition_errors() {
        let (graph, costs) = sample_network();
        assert_eq!(
            min_cost_flow(&graph, &costs, v(2), v(2)),
            Err(Error::SourceIsTarget)
        );
        assert!(matches!(
            min_cost_flow(&graph, &costs, v(0), v(9)),
            Err(Error::VertexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_min_cost_flow_missing_cost_is_fatal() {
        let mut graph = Graph::new(2);
        graph.add_arc(v(0), v(1), 4).unwrap();
        let costs = ArcMarks::new();

        assert!(matches!(
            min_cost_flow(&graph, &costs, v(0), v(1)),
            Err(Error::MarkNotFound { .. })
        ));
    }
}
