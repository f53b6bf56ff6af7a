//! Ordered map built on [`AvlSet`].
//!
//! Entries are stored as key/value pairs compared by key only, and writes go
//! through insert-or-replace so a repeated key overwrites its value.

use std::cmp::Ordering;
use std::fmt;

use super::avl::{AvlSet, Comparator};

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyOrder;

impl<K: Ord, V> Comparator<Entry<K, V>> for KeyOrder {
    fn compare(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering {
        a.key.cmp(&b.key)
    }
}

/// A map whose iteration order is ascending by key.
#[derive(Clone)]
pub struct AvlMap<K, V> {
    entries: AvlSet<Entry<K, V>, KeyOrder>,
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> AvlMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: AvlSet::with_comparator(KeyOrder),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Associates `value` with `key`, replacing any previous value.
    ///
    /// Returns `true` if `key` was not present before.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.entries.insert_or_replace(Entry { key, value })
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .find_by(|e| key.cmp(&e.key))
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .find_by_mut(|e| key.cmp(&e.key))
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries
            .remove_by(|e| key.cmp(&e.key))
            .map(|e| e.value)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + Clone {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + Clone {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + Clone {
        self.entries.iter().map(|e| &e.value)
    }

    /// Entries with keys `>= from`, ascending.
    pub fn range_from<'a>(&'a self, from: &K) -> impl Iterator<Item = (&'a K, &'a V)> {
        self.entries
            .higher_iter_by(|e| from.cmp(&e.key))
            .map(|e| (&e.key, &e.value))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for AvlMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_and_replace() {
        let mut map = AvlMap::new();
        assert!(map.insert("EZE", 1));
        assert!(map.insert("AEP", 2));
        assert!(!map.insert("EZE", 3));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"EZE"), Some(&3));
        assert_eq!(map.get(&"AEP"), Some(&2));
        assert_eq!(map.get(&"COR"), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map: AvlMap<u32, Vec<u32>> = AvlMap::new();
        map.insert(7, Vec::new());
        map.get_mut(&7).unwrap().push(42);
        assert_eq!(map.get(&7), Some(&vec![42]));
    }

    #[test]
    fn remove_returns_value() {
        let mut map: AvlMap<i32, &str> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
        assert_eq!(map.remove(&2), Some("b"));
        assert_eq!(map.remove(&2), None);
        assert!(!map.contains_key(&2));
        assert_eq!(map.len(), 2);
        map.entries.assert_invariants();
    }

    #[test]
    fn iteration_is_key_ordered() {
        let map: AvlMap<&str, i32> = [("MDZ", 3), ("BRC", 1), ("EZE", 2)].into_iter().collect();
        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["BRC", "EZE", "MDZ"]);
        let values: Vec<i32> = map.values().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn range_from_skips_smaller_keys() {
        let map: AvlMap<i32, ()> = (0..10).map(|k| (k * 10, ())).collect();
        let keys: Vec<i32> = map.range_from(&35).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn debug_format() {
        let map: AvlMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    }
}
