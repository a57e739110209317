use crate::pool::{NONE, NodePool};
use crate::traits::StateId;

/// Walk parent links from `goal` back to the start and return the states in
/// start-to-goal order along with the goal's accumulated cost.
///
/// Parent links are only meaningful within the search that set them, so this
/// must run before the pool moves to a new generation.
pub(crate) fn build_path(pool: &NodePool, goal: usize) -> (Vec<StateId>, f32) {
    let mut path = Vec::new();
    let mut idx = goal;
    while idx != NONE {
        path.push(StateId(idx));
        idx = pool.node(idx).parent;
    }
    path.reverse();
    (path, pool.node(goal).cost_from_start)
}
