/// Opaque handle of one graph vertex. For grids this is the row-major cell
/// index. Two states are equal iff their handles are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(pub usize);

impl StateId {
    /// The raw handle value.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    #[inline]
    fn from(i: usize) -> Self {
        Self(i)
    }
}

/// One transition out of a state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: StateId,
    /// Traversal cost. Must be finite and non-negative; a search that meets
    /// any other value fails with `PathError::InvalidCost`.
    pub cost: f32,
}

/// Adjacency and cost oracle searched by [`PathSolver`](crate::PathSolver).
pub trait CostModel {
    /// Number of states. Valid handles are `0..state_count()`.
    fn state_count(&self) -> usize;

    /// Append the transitions out of `state` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, state: StateId, buf: &mut Vec<Edge>);
}

impl<M: CostModel + ?Sized> CostModel for &M {
    #[inline]
    fn state_count(&self) -> usize {
        (**self).state_count()
    }

    #[inline]
    fn neighbors(&self, state: StateId, buf: &mut Vec<Edge>) {
        (**self).neighbors(state, buf)
    }
}
