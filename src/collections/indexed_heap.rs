//! `IndexedMinHeap`: a min-priority queue with decrease-key.
//!
//! Entries live in a binary heap stored in a `Vec`. A side table maps every
//! queued key to its current slot in that `Vec`, so an existing entry can be
//! located and re-sifted in \(O(\log n)\) instead of a linear scan.
//!
//! Every swap of two heap slots updates the side table in the same call,
//! so the table never points at a stale slot between operations.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

/// A binary min-heap over keys, ordered by a priority stored with each key.
///
/// A key is present at most once. Once popped it is gone from both the heap
/// array and the index table.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `push` | \(O(\log n)\) | Sift up from the new leaf |
/// | `pop` | \(O(\log n)\) | Swap root with last leaf, sift down |
/// | `decrease_key` | \(O(\log n)\) | Slot lookup is a hash probe |
/// | `change_priority` | \(O(\log n)\) | Sifts in whichever direction is needed |
/// | `contains` / `priority` | \(O(1)\) | Index table lookup |
///
/// Priorities only need `PartialOrd`. Incomparable priorities (NaN) leave the
/// heap order unspecified.
pub struct IndexedMinHeap<K, P> {
    entries: Vec<(K, P)>,
    index: HashMap<K, usize>,
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is currently queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current priority of `key`, if queued.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Returns the key with the smallest priority without removing it.
    pub fn peek(&self) -> Option<(&K, P)> {
        self.entries.first().map(|(k, p)| (k, *p))
    }

    /// Queues `key` with `priority`.
    ///
    /// # Panics
    /// Panics if `key` is already queued.
    pub fn push(&mut self, key: K, priority: P) {
        assert!(!self.index.contains_key(&key), "key is already queued");
        let slot = self.entries.len();
        self.index.insert(key.clone(), slot);
        self.entries.push((key, priority));
        self.sift_up(slot);
    }

    /// Removes and returns the key with the smallest priority.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.entries.pop()?;
        self.index.remove(&key);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((key, priority))
    }

    /// Lowers the priority of a queued key and restores heap order.
    ///
    /// The new priority must not exceed the current one; this is checked in
    /// debug builds. Use [`change_priority`](Self::change_priority) when the
    /// priority may move in either direction.
    ///
    /// # Panics
    /// Panics if `key` is not queued.
    pub fn decrease_key(&mut self, key: &K, priority: P) {
        let slot = self.slot_of(key);
        debug_assert!(
            !(self.entries[slot].1 < priority),
            "decrease_key must not raise a priority"
        );
        self.entries[slot].1 = priority;
        self.sift_up(slot);
    }

    /// Sets the priority of a queued key, raising or lowering it.
    ///
    /// # Panics
    /// Panics if `key` is not queued.
    pub fn change_priority(&mut self, key: &K, priority: P) {
        let slot = self.slot_of(key);
        let old = self.entries[slot].1;
        self.entries[slot].1 = priority;
        if priority < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    fn slot_of(&self, key: &K) -> usize {
        match self.index.get(key) {
            Some(&slot) => slot,
            None => panic!("key is not queued"),
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Swaps two slots and repoints both keys in the index table.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(slot) = self.index.get_mut(&self.entries[a].0) {
            *slot = a;
        }
        if let Some(slot) = self.index.get_mut(&self.entries[b].0) {
            *slot = b;
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].1 < self.entries[b].1
    }
}

impl<K, P> IndexedMinHeap<K, P> {
    /// Iterates over all queued `(key, priority)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &P)> + '_ {
        self.entries.iter().map(|(k, p)| (k, p))
    }
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> fmt::Debug for IndexedMinHeap<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<K: Clone + Eq + Hash, P: PartialOrd + Copy> IndexedMinHeap<K, P> {
        fn assert_consistent(&self) {
            assert_eq!(self.entries.len(), self.index.len());
            for (slot, (key, _)) in self.entries.iter().enumerate() {
                assert_eq!(self.index.get(key), Some(&slot));
                if slot > 0 {
                    assert!(!self.less(slot, (slot - 1) / 2));
                }
            }
        }
    }

    fn drain<K: Clone + Eq + Hash, P: PartialOrd + Copy>(heap: &mut IndexedMinHeap<K, P>) -> Vec<K> {
        let mut out = Vec::new();
        while let Some((k, _)) = heap.pop() {
            heap.assert_consistent();
            out.push(k);
        }
        out
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: IndexedMinHeap<&str, f64> = IndexedMinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_pop_order_regardless_of_push_order() {
        let orders: [&[(&str, f64)]; 3] = [
            &[("a", 0.5), ("z", 0.7), ("c", 0.9)],
            &[("c", 0.9), ("z", 0.7), ("a", 0.5)],
            &[("z", 0.7), ("c", 0.9), ("a", 0.5)],
        ];
        for items in orders {
            let mut heap = IndexedMinHeap::new();
            for &(k, p) in items {
                heap.push(k, p);
                heap.assert_consistent();
            }
            assert_eq!(drain(&mut heap), vec!["a", "z", "c"]);
        }
    }

    #[test]
    fn test_decrease_key_moves_entry_to_front() {
        let mut heap = IndexedMinHeap::new();
        heap.push("z", 0.7);
        heap.push("c", 0.9);
        heap.push("a", 0.5);
        heap.decrease_key(&"z", 0.4);
        heap.assert_consistent();
        assert_eq!(heap.priority(&"z"), Some(0.4));
        assert_eq!(heap.peek(), Some((&"z", 0.4)));
        assert_eq!(drain(&mut heap), vec!["z", "a", "c"]);
    }

    #[test]
    fn test_change_priority_both_directions() {
        let mut heap = IndexedMinHeap::new();
        heap.push("a", 0.5);
        heap.change_priority(&"a", 0.8);
        assert_eq!(drain(&mut heap), vec!["a"]);

        let mut heap = IndexedMinHeap::new();
        for (k, p) in [(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)] {
            heap.push(k, p);
        }
        heap.change_priority(&1, 10.0);
        heap.assert_consistent();
        heap.change_priority(&4, 0.0);
        heap.assert_consistent();
        assert_eq!(drain(&mut heap), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_popped_key_is_forgotten() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.push('x', 1u32);
        heap.push('y', 2u32);
        assert_eq!(heap.pop(), Some(('x', 1)));
        assert!(!heap.contains(&'x'));
        assert_eq!(heap.priority(&'x'), None);
        heap.push('x', 3);
        assert_eq!(heap.len(), 2);
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&'y'));
    }

    #[test]
    fn test_many_updates_keep_index_consistent() {
        let mut heap = IndexedMinHeap::new();
        for i in 0..64u32 {
            heap.push(i, f64::from(1000 - i * 7 % 97));
        }
        for i in (0..64u32).step_by(3) {
            let p = heap.priority(&i).unwrap_or(0.0) - 500.0;
            heap.decrease_key(&i, p);
            heap.assert_consistent();
        }
        let mut last = f64::NEG_INFINITY;
        while let Some((_, p)) = heap.pop() {
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    #[should_panic(expected = "already queued")]
    fn test_push_twice_panics() {
        let mut heap = IndexedMinHeap::new();
        heap.push("a", 1.0);
        heap.push("a", 2.0);
    }

    #[test]
    #[should_panic(expected = "not queued")]
    fn test_decrease_absent_key_panics() {
        let mut heap: IndexedMinHeap<&str, f64> = IndexedMinHeap::new();
        heap.decrease_key(&"a", 1.0);
    }
}
