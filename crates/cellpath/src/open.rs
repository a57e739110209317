//! Open list: an indexed binary min-heap of node handles.
//!
//! Each node records its own position in the heap array (`heap_slot`), kept
//! in sync on every swap, so a decreased cost can be re-sifted in O(log n)
//! without searching for the node.

use crate::pool::{NONE, NodePool};

pub(crate) struct OpenList {
    heap: Vec<usize>,
}

/// Heap order: lower total cost first, then lower state handle. The order is
/// total, so the pop sequence only depends on the costs, not on insertion
/// history.
#[inline]
fn before(pool: &NodePool, a: usize, b: usize) -> bool {
    let (ca, cb) = (pool.node(a).total_cost, pool.node(b).total_cost);
    ca < cb || (ca == cb && a < b)
}

impl OpenList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Forget every entry. O(1); stale `heap_slot` values are left behind in
    /// nodes of the previous generation and are never read.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Insert `idx`, which must not already be in the list.
    pub(crate) fn push(&mut self, pool: &mut NodePool, idx: usize) {
        debug_assert_eq!(pool.node(idx).heap_slot, NONE);
        let slot = self.heap.len();
        self.heap.push(idx);
        pool.node_mut(idx).heap_slot = slot;
        self.sift_up(pool, slot);
    }

    /// Remove and return the entry with the lowest total cost.
    pub(crate) fn pop(&mut self, pool: &mut NodePool) -> Option<usize> {
        let last = self.heap.pop()?;
        let top = if self.heap.is_empty() {
            last
        } else {
            let top = self.heap[0];
            self.heap[0] = last;
            pool.node_mut(last).heap_slot = 0;
            self.sift_down(pool, 0);
            top
        };
        pool.node_mut(top).heap_slot = NONE;
        Some(top)
    }

    /// Restore heap order after the cost of `idx` decreased.
    ///
    /// Costs only ever decrease during relaxation, so sifting up suffices.
    pub(crate) fn update(&mut self, pool: &mut NodePool, idx: usize) {
        let slot = pool.node(idx).heap_slot;
        debug_assert!(slot < self.heap.len() && self.heap[slot] == idx);
        self.sift_up(pool, slot);
    }

    fn sift_up(&mut self, pool: &mut NodePool, mut slot: usize) {
        let idx = self.heap[slot];
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let p = self.heap[parent];
            if !before(pool, idx, p) {
                break;
            }
            self.heap[slot] = p;
            pool.node_mut(p).heap_slot = slot;
            slot = parent;
        }
        self.heap[slot] = idx;
        pool.node_mut(idx).heap_slot = slot;
    }

    fn sift_down(&mut self, pool: &mut NodePool, mut slot: usize) {
        let len = self.heap.len();
        let idx = self.heap[slot];
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && before(pool, self.heap[right], self.heap[left]) {
                right
            } else {
                left
            };
            let c = self.heap[child];
            if !before(pool, c, idx) {
                break;
            }
            self.heap[slot] = c;
            pool.node_mut(c).heap_slot = slot;
            slot = child;
        }
        self.heap[slot] = idx;
        pool.node_mut(idx).heap_slot = slot;
    }

    #[cfg(test)]
    fn check(&self, pool: &NodePool) {
        for (i, &idx) in self.heap.iter().enumerate() {
            assert_eq!(pool.node(idx).heap_slot, i);
            if i > 0 {
                assert!(!before(pool, idx, self.heap[(i - 1) / 2]));
            }
        }
    }
}
