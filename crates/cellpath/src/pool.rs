//! Index-addressed arena of search nodes with lazy, generation-stamped reset.

use crate::error::PathError;

/// Cost of a node not yet reached in the current search.
pub const UNREACHABLE: f32 = f32::MAX / 2.0;

/// Marker for "no parent" and "not in the open list".
pub(crate) const NONE: usize = usize::MAX;

/// Generation stamp of a node never touched since the last full reset.
const NEVER: u16 = 0;

#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) cost_from_start: f32,
    /// Ordering key of the open list. Equals `cost_from_start`: no estimate
    /// to the goal is added.
    pub(crate) total_cost: f32,
    pub(crate) parent: usize,
    pub(crate) heap_slot: usize,
    pub(crate) in_open: bool,
    pub(crate) in_closed: bool,
    pub(crate) is_end_node: bool,
    pub(crate) generation: u16,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            cost_from_start: UNREACHABLE,
            total_cost: UNREACHABLE,
            parent: NONE,
            heap_slot: NONE,
            in_open: false,
            in_closed: false,
            is_end_node: false,
            generation: NEVER,
        }
    }
}

impl SearchNode {
    fn reuse(&mut self, generation: u16) {
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}

/// Fixed-capacity node arena keyed by state handle.
///
/// Every slot carries the generation of the search that last wrote it. A
/// slot whose stamp differs from the pool's current generation holds stale
/// data and is reinitialized on first touch, so starting a new search costs
/// O(1) instead of O(capacity).
pub(crate) struct NodePool {
    nodes: Vec<SearchNode>,
    pub(crate) generation: u16,
}

impl NodePool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); capacity],
            generation: NEVER,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Start a new search generation, invalidating every node at once.
    ///
    /// When the 16-bit counter runs out, all slots are reset to the
    /// never-visited state and numbering restarts. That single pass over the
    /// arena happens once every 65535 searches and is the only O(capacity)
    /// operation of the solver.
    pub(crate) fn begin_generation(&mut self) {
        if self.generation == u16::MAX {
            log::debug!(
                "node pool generation overflow, resetting {} nodes",
                self.nodes.len()
            );
            for n in self.nodes.iter_mut() {
                n.generation = NEVER;
            }
            self.generation = NEVER;
        }
        self.generation += 1;
    }

    /// Node for `idx`, reinitialized first if it belongs to an older search.
    #[inline]
    pub(crate) fn get(&mut self, idx: usize) -> Result<&mut SearchNode, PathError> {
        let capacity = self.nodes.len();
        let generation = self.generation;
        let Some(n) = self.nodes.get_mut(idx) else {
            return Err(PathError::StateOutOfRange {
                state: idx,
                capacity,
            });
        };
        if n.generation != generation {
            n.reuse(generation);
        }
        Ok(n)
    }

    /// Node already touched in the current search.
    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        debug_assert_eq!(self.nodes[idx].generation, self.generation);
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        debug_assert_eq!(self.nodes[idx].generation, self.generation);
        &mut self.nodes[idx]
    }

    /// Whether `idx` has been touched in the current search.
    #[inline]
    pub(crate) fn is_fresh(&self, idx: usize) -> bool {
        self.nodes
            .get(idx)
            .is_some_and(|n| n.generation == self.generation)
    }
}
