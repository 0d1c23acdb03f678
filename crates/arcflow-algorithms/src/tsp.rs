//! Exact traveling salesman over a cost matrix.

use arcflow_common::types::{ARC_WEIGHT_LIMIT, VertexId, Weight};
use arcflow_common::utils::error::{Error, Result};

/// Largest instance the bitmask table accepts.
const MAX_TSP_VERTICES: usize = 24;

/// Result of an exact traveling-salesman search.
#[derive(Debug, Clone, PartialEq)]
pub struct TspResult {
    /// Length of an optimal tour.
    pub length: Weight,
    /// One optimal tour, starting at vertex `0`, each vertex exactly once.
    pub tour: Vec<VertexId>,
}

/// Finds an optimal closed tour over a square cost matrix.
///
/// Held-Karp dynamic programming over vertex subsets: `dp[mask][last]` is
/// the cheapest path that starts at vertex `0`, visits exactly the vertices
/// of `mask`, and ends at `last`. Entries at [`ARC_WEIGHT_LIMIT`] or above
/// mark absent arcs. The matrix may be asymmetric.
///
/// Fails with [`Error::InvalidInput`] on a non-square or oversized matrix
/// and with [`Error::UnreachableVertex`] when no closed tour visits every
/// vertex.
///
/// # Complexity
///
/// O(|V|² · 2^|V|) time, O(|V| · 2^|V|) space.
pub fn tsp(cost_matrix: &[Vec<Weight>]) -> Result<TspResult> {
    let n = cost_matrix.len();
    if n == 0 {
        return Err(Error::InvalidInput("cost matrix must not be empty".into()));
    }
    if cost_matrix.iter().any(|row| row.len() != n) {
        return Err(Error::InvalidInput("cost matrix must be square".into()));
    }
    if n > MAX_TSP_VERTICES {
        return Err(Error::InvalidInput(format!(
            "exact tour search is limited to {MAX_TSP_VERTICES} vertices, got {n}"
        )));
    }
    if n == 1 {
        return Ok(TspResult {
            length: 0,
            tour: vec![VertexId::new(0)],
        });
    }

    let full = (1usize << n) - 1;
    let mut dp = vec![vec![ARC_WEIGHT_LIMIT; n]; 1 << n];
    let mut parent = vec![vec![usize::MAX; n]; 1 << n];
    dp[1][0] = 0;

    for mask in 1..=full {
        if mask & 1 == 0 {
            continue; // every path starts at vertex 0
        }
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let here = dp[mask][last];
            if here >= ARC_WEIGHT_LIMIT {
                continue;
            }
            for next in 0..n {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let arc = cost_matrix[last][next];
                if arc >= ARC_WEIGHT_LIMIT {
                    continue;
                }
                let candidate = here + arc;
                let next_mask = mask | (1 << next);
                if candidate < dp[next_mask][next] {
                    dp[next_mask][next] = candidate;
                    parent[next_mask][next] = last;
                }
            }
        }
    }

    // Close the tour back at vertex 0
    let mut length = ARC_WEIGHT_LIMIT;
    let mut last = usize::MAX;
    for end in 1..n {
        let path = dp[full][end];
        let back = cost_matrix[end][0];
        if path >= ARC_WEIGHT_LIMIT || back >= ARC_WEIGHT_LIMIT {
            continue;
        }
        if path + back < length {
            length = path + back;
            last = end;
        }
    }
    if last == usize::MAX {
        return Err(Error::UnreachableVertex(VertexId::new(0)));
    }

    let mut tour = Vec::with_capacity(n);
    let mut mask = full;
    let mut current = last;
    while current != 0 {
        tour.push(VertexId::new(current as u32));
        let prev = parent[mask][current];
        mask &= !(1 << current);
        current = prev;
    }
    tour.push(VertexId::new(0));
    tour.reverse();

    Ok(TspResult { length, tour })
}
