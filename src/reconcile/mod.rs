//! Keyed-collection diffing between consecutive renders.
//!
//! The enter/update/exit partition is computed purely from key presence so
//! the external surface can drive entrance, transition, and exit animations
//! without the engine retaining anything beyond the previous keyed maps.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Composite key identifying one polygon vertex across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexKey {
    pub category: String,
    pub axis: String,
}

impl VertexKey {
    #[must_use]
    pub fn new(category: impl Into<String>, axis: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            axis: axis.into(),
        }
    }
}

/// Enter/update/exit partition of one keyed collection.
///
/// `enter` and `update` carry next values in next insertion order; `exit`
/// carries previous values in previous insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedDiff<K: Hash + Eq, V> {
    pub enter: IndexMap<K, V>,
    pub update: IndexMap<K, V>,
    pub exit: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for KeyedDiff<K, V> {
    fn default() -> Self {
        Self {
            enter: IndexMap::new(),
            update: IndexMap::new(),
            exit: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> KeyedDiff<K, V> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }
}

/// Partitions `next` against `prev` by key.
///
/// Only key presence matters: an unchanged value under a surviving key still
/// lands in `update`, matching keyed data-join semantics.
pub fn diff_keyed<K, V>(prev: &IndexMap<K, V>, next: &IndexMap<K, V>) -> KeyedDiff<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    let mut diff = KeyedDiff::default();

    for (key, value) in next {
        if prev.contains_key(key) {
            diff.update.insert(key.clone(), value.clone());
        } else {
            diff.enter.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in prev {
        if !next.contains_key(key) {
            diff.exit.insert(key.clone(), value.clone());
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::{VertexKey, diff_keyed};
    use indexmap::IndexMap;

    fn map_of(pairs: &[(&str, i32)]) -> IndexMap<String, i32> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), *value))
            .collect()
    }

    #[test]
    fn disjoint_sets_are_all_enter_and_exit() {
        let prev = map_of(&[("a", 1)]);
        let next = map_of(&[("b", 2)]);
        let diff = diff_keyed(&prev, &next);

        assert_eq!(diff.enter.len(), 1);
        assert!(diff.enter.contains_key("b"));
        assert!(diff.update.is_empty());
        assert_eq!(diff.exit.len(), 1);
        assert!(diff.exit.contains_key("a"));
    }

    #[test]
    fn surviving_keys_update_even_when_values_are_unchanged() {
        let prev = map_of(&[("a", 1), ("b", 2)]);
        let next = map_of(&[("a", 1), ("b", 9)]);
        let diff = diff_keyed(&prev, &next);

        assert!(diff.enter.is_empty());
        assert!(diff.exit.is_empty());
        assert_eq!(diff.update.len(), 2);
        assert_eq!(diff.update.get("b").copied(), Some(9));
    }

    #[test]
    fn enter_preserves_next_insertion_order() {
        let prev = map_of(&[]);
        let next = map_of(&[("z", 1), ("a", 2), ("m", 3)]);
        let diff = diff_keyed(&prev, &next);

        let keys: Vec<&str> = diff.enter.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn vertex_keys_compare_by_both_components() {
        assert_eq!(VertexKey::new("cat", "ax"), VertexKey::new("cat", "ax"));
        assert_ne!(VertexKey::new("cat", "ax"), VertexKey::new("cat", "bx"));
        assert_ne!(VertexKey::new("cat", "ax"), VertexKey::new("dat", "ax"));
    }
}
