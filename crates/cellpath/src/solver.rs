use crate::checksum::path_checksum;
use crate::error::PathError;
use crate::open::OpenList;
use crate::path::build_path;
use crate::pool::{NodePool, UNREACHABLE};
use crate::traits::{CostModel, Edge, StateId};

/// Outcome of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A path was found.
    Solved,
    /// The goal cannot be reached (or not within the cutoff).
    NoSolution,
    /// The start already is the goal. The path is empty and the cost 0.
    StartEndSame,
}

/// Result of one `solve*` call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub status: Status,
    /// States from start to goal inclusive. Empty unless `status` is
    /// [`Status::Solved`].
    pub path: Vec<StateId>,
    /// Accumulated cost of `path`.
    pub cost: f32,
    /// Position in the caller's goal list of the goal that was reached.
    /// Only set by the multi-goal searches.
    pub goal_index: Option<usize>,
}

impl Solution {
    fn no_solution() -> Self {
        Self {
            status: Status::NoSolution,
            path: Vec::new(),
            cost: 0.0,
            goal_index: None,
        }
    }

    fn start_end_same(goal_index: Option<usize>) -> Self {
        Self {
            status: Status::StartEndSame,
            path: Vec::new(),
            cost: 0.0,
            goal_index,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }
}

/// Goal test applied to each node popped from the open list.
#[derive(Copy, Clone)]
enum Goal {
    State(usize),
    /// Any node flagged as an end node.
    Marked,
}

/// Reusable cheapest-path solver over a [`CostModel`].
///
/// `PathSolver` owns a node pool sized once at construction and an open list
/// reused by every search, so repeated queries allocate nothing but the
/// returned path. Starting a search only bumps a generation counter; nodes
/// left over from earlier searches are reinitialized lazily when touched.
///
/// Nodes are ordered by their exact cost from the start alone. No estimate
/// of the remaining distance is added, which makes every search a
/// uniform-cost (Dijkstra) search and keeps the returned paths optimal for
/// any non-negative costs.
///
/// A solver serves one search at a time; every `solve*` method takes
/// `&mut self`.
pub struct PathSolver {
    pool: NodePool,
    open: OpenList,
    nbuf: Vec<Edge>,
    checksum: u32,
    expanded: usize,
}

impl PathSolver {
    /// Create a solver able to search models of up to `capacity` states.
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: NodePool::new(capacity),
            open: OpenList::with_capacity(capacity),
            nbuf: Vec::with_capacity(8),
            checksum: 0,
            expanded: 0,
        }
    }

    /// Number of states the node pool holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Fingerprint of the path returned by the last search.
    ///
    /// Meaningful only after a [`Status::Solved`] result; it is 0 after any
    /// other outcome.
    #[inline]
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Number of nodes expanded by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Best cost to `state` known at the end of the last `solve*` call, or
    /// `None` if that call never reached it. Calls that return without
    /// searching (start equals goal, no goals, invalid input) reach nothing.
    pub fn cost_to(&self, state: StateId) -> Option<f32> {
        if !self.pool.is_fresh(state.0) {
            return None;
        }
        let c = self.pool.node(state.0).cost_from_start;
        (c < UNREACHABLE).then_some(c)
    }

    /// Find the cheapest path from `start` to `end`.
    pub fn solve<M: CostModel>(
        &mut self,
        model: &M,
        start: StateId,
        end: StateId,
    ) -> Result<Solution, PathError> {
        self.prepare(model)?;
        let start_idx = Self::check_state(model, start)?;
        let end_idx = Self::check_state(model, end)?;
        if start_idx == end_idx {
            return Ok(Solution::start_end_same(None));
        }

        let found = self.search(model, start_idx, Goal::State(end_idx), None)?;
        Ok(self.finish(found))
    }

    /// Find the cheapest path from `start` to any state in `goals`, ignoring
    /// everything that costs more than `cutoff` to reach.
    ///
    /// A `cutoff` of 0 or less disables the limit. The matched goal is
    /// reported through [`Solution::goal_index`].
    pub fn solve_with_cutoff<M: CostModel>(
        &mut self,
        model: &M,
        start: StateId,
        goals: &[StateId],
        cutoff: f32,
    ) -> Result<Solution, PathError> {
        let cutoff = (cutoff > 0.0).then_some(cutoff);
        self.solve_marked(model, start, goals, cutoff)
    }

    /// Find the cheapest path from `start` to the cheapest reachable member
    /// of `goals`.
    ///
    /// Every goal is an independent candidate terminal: the first one popped
    /// from the open list wins, and [`Solution::goal_index`] holds its first
    /// position in `goals`.
    pub fn solve_to_priority_set<M: CostModel>(
        &mut self,
        model: &M,
        start: StateId,
        goals: &[StateId],
    ) -> Result<Solution, PathError> {
        self.solve_marked(model, start, goals, None)
    }

    fn solve_marked<M: CostModel>(
        &mut self,
        model: &M,
        start: StateId,
        goals: &[StateId],
        cutoff: Option<f32>,
    ) -> Result<Solution, PathError> {
        self.prepare(model)?;
        let start_idx = Self::check_state(model, start)?;
        for &g in goals {
            Self::check_state(model, g)?;
        }
        if let Some(i) = goals.iter().position(|&g| g == start) {
            return Ok(Solution::start_end_same(Some(i)));
        }
        if goals.is_empty() {
            log::debug!("search from {} has no goals", start.0);
            return Ok(Solution::no_solution());
        }

        for &g in goals {
            self.pool.get(g.0)?.is_end_node = true;
        }
        let found = self.search(model, start_idx, Goal::Marked, cutoff);
        for &g in goals {
            self.pool.node_mut(g.0).is_end_node = false;
        }

        let found = found?;
        let mut solution = self.finish(found);
        if let Some(goal) = found {
            // Reverse lookup only once a goal has been reached.
            solution.goal_index = goals.iter().position(|g| g.0 == goal);
        }
        Ok(solution)
    }

    /// Start a new generation for every call, searching or not, so nothing
    /// from the previous call stays observable.
    fn prepare<M: CostModel>(&mut self, model: &M) -> Result<(), PathError> {
        self.checksum = 0;
        self.expanded = 0;
        self.pool.begin_generation();
        self.open.clear();
        let states = model.state_count();
        if states > self.pool.capacity() {
            return Err(PathError::CapacityExceeded {
                states,
                capacity: self.pool.capacity(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_state<M: CostModel>(model: &M, s: StateId) -> Result<usize, PathError> {
        let capacity = model.state_count();
        if s.0 >= capacity {
            return Err(PathError::StateOutOfRange {
                state: s.0,
                capacity,
            });
        }
        Ok(s.0)
    }

    /// Shared expansion loop. Returns the goal node reached, if any.
    fn search<M: CostModel>(
        &mut self,
        model: &M,
        start: usize,
        goal: Goal,
        cutoff: Option<f32>,
    ) -> Result<Option<usize>, PathError> {
        {
            let n = self.pool.get(start)?;
            n.cost_from_start = 0.0;
            n.total_cost = 0.0;
            n.in_open = true;
        }
        self.open.push(&mut self.pool, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.open.pop(&mut self.pool) else {
                break 'search Ok(None);
            };

            let current = self.pool.node_mut(ci);
            current.in_open = false;
            let reached = match goal {
                Goal::State(end) => ci == end,
                Goal::Marked => current.is_end_node,
            };
            if reached {
                break 'search Ok(Some(ci));
            }
            current.in_closed = true;
            let current_cost = current.cost_from_start;
            self.expanded += 1;

            nbuf.clear();
            model.neighbors(StateId(ci), &mut nbuf);

            for e in nbuf.iter() {
                if !e.cost.is_finite() || e.cost < 0.0 {
                    break 'search Err(PathError::InvalidCost {
                        state: e.to.0,
                        cost: e.cost,
                    });
                }
                let candidate = current_cost + e.cost;
                // Nothing above the cutoff ever enters the open list, so the
                // search runs dry once everything cheaper is expanded.
                if cutoff.is_some_and(|limit| candidate > limit) {
                    continue;
                }
                let ni = e.to.0;
                let n = match self.pool.get(ni) {
                    Ok(n) => n,
                    Err(err) => break 'search Err(err),
                };
                if candidate >= n.cost_from_start {
                    continue;
                }

                n.cost_from_start = candidate;
                n.total_cost = candidate;
                n.parent = ci;
                if n.in_open {
                    self.open.update(&mut self.pool, ni);
                } else {
                    // First visit. A closed node only lands here if its cost
                    // improved after expansion, which non-negative edge costs
                    // rule out; it is reopened all the same.
                    n.in_closed = false;
                    n.in_open = true;
                    self.open.push(&mut self.pool, ni);
                }
            }
        };

        self.nbuf = nbuf;
        found
    }

    fn finish(&mut self, found: Option<usize>) -> Solution {
        let Some(goal) = found else {
            log::debug!("no solution after expanding {} nodes", self.expanded);
            return Solution::no_solution();
        };
        let (path, cost) = build_path(&self.pool, goal);
        self.checksum = path_checksum(&path);
        log::trace!(
            "solved: {} states, cost {cost}, {} expanded, {} left open",
            path.len(),
            self.expanded,
            self.open.len()
        );
        Solution {
            status: Status::Solved,
            path,
            cost,
            goal_index: None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let sol = Solution {
            status: Status::Solved,
            path: vec![StateId(0), StateId(5), StateId(10)],
            cost: 2.5,
            goal_index: Some(1),
        };
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sol);
    }
}
