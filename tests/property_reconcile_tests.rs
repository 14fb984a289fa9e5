use indexmap::IndexMap;
use proptest::prelude::*;
use radar_rs::reconcile::diff_keyed;

fn keyed_map(keys: Vec<u8>) -> IndexMap<String, u8> {
    keys.into_iter()
        .map(|key| (format!("k{key}"), key))
        .collect()
}

proptest! {
    #[test]
    fn diff_partitions_are_disjoint_and_complete(
        prev_keys in proptest::collection::vec(0u8..32, 0..24),
        next_keys in proptest::collection::vec(0u8..32, 0..24)
    ) {
        let prev = keyed_map(prev_keys);
        let next = keyed_map(next_keys);
        let diff = diff_keyed(&prev, &next);

        // enter ∪ update covers exactly the next keys.
        prop_assert_eq!(diff.enter.len() + diff.update.len(), next.len());
        for key in next.keys() {
            prop_assert!(diff.enter.contains_key(key) ^ diff.update.contains_key(key));
        }

        // exit is exactly prev − next.
        for key in prev.keys() {
            prop_assert_eq!(diff.exit.contains_key(key), !next.contains_key(key));
        }
        for key in diff.exit.keys() {
            prop_assert!(prev.contains_key(key) && !next.contains_key(key));
        }

        // No entering key was present before.
        for key in diff.enter.keys() {
            prop_assert!(!prev.contains_key(key));
        }
    }

    #[test]
    fn diff_against_self_is_pure_update(
        keys in proptest::collection::vec(0u8..32, 0..24)
    ) {
        let map = keyed_map(keys);
        let diff = diff_keyed(&map, &map);

        prop_assert!(diff.enter.is_empty());
        prop_assert!(diff.exit.is_empty());
        prop_assert_eq!(diff.update.len(), map.len());
    }
}
