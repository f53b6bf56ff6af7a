//! Binary min-heap with mutable priorities.
//!
//! The heap is a dense vector laid out as a complete binary tree. It keeps no
//! item-to-slot index: to change an item's priority the slot is rediscovered
//! by a descent from the root that skips every subtree whose root already has
//! a larger priority than the item's current one. Worst case this is still a
//! full scan, which is acceptable for airport-sized inputs.
// TODO: keep an item -> slot index updated on every swap if networks grow
// past a few thousand airports; decrease_priority becomes O(log n).

use std::mem;

#[derive(Debug, Clone)]
struct HeapEntry<T> {
    item: T,
    priority: f64,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

/// A min-priority queue over `f64` priorities.
///
/// Items are identified by `PartialEq`; enqueuing the same item twice is
/// allowed but makes priority updates ambiguous, so callers should not.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T> {
    entries: Vec<HeapEntry<T>>,
}

impl<T: PartialEq> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> BinaryMinHeap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: f64) {
        debug_assert!(!priority.is_nan(), "NaN priority");
        self.entries.push(HeapEntry { item, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// The minimum item and its priority, without removing it.
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.entries.first().map(|e| (&e.item, e.priority))
    }

    /// The minimum priority currently enqueued.
    pub fn min_priority(&self) -> Option<f64> {
        self.entries.first().map(|e| e.priority)
    }

    /// Removes and returns the minimum item with its priority.
    pub fn dequeue(&mut self) -> Option<(T, f64)> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some((last.item, last.priority));
        }
        let root = mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Some((root.item, root.priority))
    }

    /// Current priority of `item`, if enqueued.
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.locate(item, f64::INFINITY, 0)
            .map(|i| self.entries[i].priority)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.locate(item, f64::INFINITY, 0).is_some()
    }

    /// Lowers `item` from its `current` priority to `priority`.
    ///
    /// `current` must be the priority the item was last given; it bounds the
    /// search. Returns `false` if the item was not found.
    pub fn decrease_priority(&mut self, item: &T, current: f64, priority: f64) -> bool {
        debug_assert!(priority <= current, "priority must not increase");
        let Some(i) = self.locate(item, current, 0) else {
            return false;
        };
        self.entries[i].priority = priority;
        self.sift_up(i);
        true
    }

    /// Moves `item` from its `current` priority to `priority` in either
    /// direction. Returns `false` if the item was not found.
    pub fn change_priority(&mut self, item: &T, current: f64, priority: f64) -> bool {
        debug_assert!(!priority.is_nan(), "NaN priority");
        let Some(i) = self.locate(item, current, 0) else {
            return false;
        };
        let previous = mem::replace(&mut self.entries[i].priority, priority);
        if priority < previous {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
        true
    }

    /// Removes `item`, which currently has priority `current`.
    pub fn remove(&mut self, item: &T, current: f64) -> Option<T> {
        let i = self.locate(item, current, 0)?;
        let removed = self.entries.swap_remove(i);
        if i < self.entries.len() {
            let i = self.sift_up(i);
            self.sift_down(i);
        }
        Some(removed.item)
    }

    /// Finds the slot holding `item`, whose priority is at most `bound`.
    fn locate(&self, item: &T, bound: f64, index: usize) -> Option<usize> {
        let entry = self.entries.get(index)?;
        // Everything below has a priority of at least this entry's
        if entry.priority > bound {
            return None;
        }
        if entry.item == *item {
            return Some(index);
        }
        self.locate(item, bound, left(index))
            .or_else(|| self.locate(item, bound, right(index)))
    }

    /// Returns the final slot.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = parent(i);
            if self.entries[i].priority < self.entries[p].priority {
                self.entries.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let (l, r) = (left(i), right(i));
            if l >= len {
                break;
            }
            let child = if r < len && self.entries[r].priority < self.entries[l].priority {
                r
            } else {
                l
            };
            if self.entries[child].priority < self.entries[i].priority {
                self.entries.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
impl<T> BinaryMinHeap<T> {
    fn assert_heap_order(&self) {
        for i in 1..self.entries.len() {
            assert!(
                self.entries[parent(i)].priority <= self.entries[i].priority,
                "heap order violated at {i}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut BinaryMinHeap<&'static str>) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some((item, _)) = heap.dequeue() {
            out.push(item);
        }
        out
    }

    #[test]
    fn empty_heap() {
        let mut heap: BinaryMinHeap<u32> = BinaryMinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.min_priority(), None);
        assert_eq!(heap.dequeue(), None);
    }

    #[test]
    fn dequeues_in_priority_order() {
        let mut heap = BinaryMinHeap::new();
        heap.enqueue("c", 3.0);
        heap.enqueue("a", 1.0);
        heap.enqueue("d", 4.0);
        heap.enqueue("b", 2.0);
        heap.assert_heap_order();

        assert_eq!(heap.peek(), Some((&"a", 1.0)));
        assert_eq!(drain(&mut heap), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn infinite_priorities_sort_last() {
        let mut heap = BinaryMinHeap::new();
        heap.enqueue("far", f64::INFINITY);
        heap.enqueue("near", 10.0);
        heap.enqueue("other", f64::INFINITY);
        assert_eq!(heap.dequeue(), Some(("near", 10.0)));
        assert_eq!(heap.min_priority(), Some(f64::INFINITY));
    }

    #[test]
    fn decrease_priority_moves_item_up() {
        let mut heap = BinaryMinHeap::new();
        for (item, p) in [("a", 1.0), ("b", 5.0), ("c", 6.0), ("d", 9.0)] {
            heap.enqueue(item, p);
        }

        assert!(heap.decrease_priority(&"d", 9.0, 0.5));
        heap.assert_heap_order();
        assert_eq!(heap.priority_of(&"d"), Some(0.5));
        assert_eq!(heap.dequeue(), Some(("d", 0.5)));
    }

    #[test]
    fn decrease_priority_of_missing_item() {
        let mut heap = BinaryMinHeap::new();
        heap.enqueue("a", 1.0);
        assert!(!heap.decrease_priority(&"z", 5.0, 0.0));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn stale_bound_prunes_search() {
        let mut heap = BinaryMinHeap::new();
        heap.enqueue("a", 1.0);
        heap.enqueue("b", 5.0);
        // "b" has priority 5, so a bound of 2 excludes it
        assert!(!heap.decrease_priority(&"b", 2.0, 0.0));
        assert_eq!(heap.priority_of(&"b"), Some(5.0));
    }

    #[test]
    fn change_priority_both_directions() {
        let mut heap = BinaryMinHeap::new();
        for (item, p) in [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0), ("e", 5.0)] {
            heap.enqueue(item, p);
        }

        assert!(heap.change_priority(&"a", 1.0, 10.0));
        heap.assert_heap_order();
        assert!(heap.change_priority(&"e", 5.0, 0.0));
        heap.assert_heap_order();

        assert_eq!(drain(&mut heap), vec!["e", "b", "c", "d", "a"]);
    }

    #[test]
    fn remove_arbitrary_item() {
        let mut heap = BinaryMinHeap::new();
        for (item, p) in [("a", 1.0), ("b", 7.0), ("c", 2.0), ("d", 8.0), ("e", 3.0)] {
            heap.enqueue(item, p);
        }

        assert_eq!(heap.remove(&"b", 7.0), Some("b"));
        heap.assert_heap_order();
        assert!(!heap.contains(&"b"));
        assert_eq!(drain(&mut heap), vec!["a", "c", "e", "d"]);
    }
}
