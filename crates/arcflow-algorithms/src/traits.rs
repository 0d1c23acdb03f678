//! Shared helpers for the algorithm implementations.

use std::cmp::Ordering;

/// `MinScored<K, T>` holds a score `K` and a payload `T`, ordered so that a
/// [`BinaryHeap`](std::collections::BinaryHeap) of them behaves as a
/// min-heap over the score.
///
/// Ties on the score fall back to the (reversed) payload ordering, so heap
/// pops are fully deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T: Ord> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T: Ord> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the smallest score surfaces first in a max-heap.
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}
