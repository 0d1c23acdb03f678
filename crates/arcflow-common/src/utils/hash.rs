//! Fast hashing aliases (non-cryptographic).
//!
//! Use these instead of the standard collections directly so the whole
//! workspace hashes consistently and the hasher can be swapped in one place.
//! `ahash` is optimized for the small integer keys (vertex ids and ordered
//! vertex pairs) that dominate graph workloads.

use ahash::RandomState;

/// Standard hash map with a fast non-cryptographic hasher.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, RandomState>;

/// Standard hash set with a fast non-cryptographic hasher.
pub type FastHashSet<T> = hashbrown::HashSet<T, RandomState>;

/// Insertion-order preserving set.
///
/// Adjacency sets use this so neighbor iteration (and therefore tie-breaking
/// in the relaxation and search loops) is deterministic across runs.
pub type FastIndexSet<T> = indexmap::IndexSet<T, RandomState>;

/// Insertion-order preserving map.
pub type FastIndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_set_preserves_insertion_order() {
        let mut set: FastIndexSet<u32> = FastIndexSet::default();
        for value in [5u32, 1, 9, 3] {
            set.insert(value);
        }
        let order: Vec<u32> = set.iter().copied().collect();
        assert_eq!(order, vec![5, 1, 9, 3]);
    }

    #[test]
    fn test_map_basics() {
        let mut map: FastHashMap<(u32, u32), i64> = FastHashMap::default();
        map.insert((0, 1), 10);
        assert_eq!(map.get(&(0, 1)), Some(&10));
        assert_eq!(map.get(&(1, 0)), None);
    }
}
