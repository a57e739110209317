use crate::error::PathError;
use crate::grid::{GridMap, Movement};
use crate::solver::{PathSolver, Solution};
use crate::traits::StateId;

/// A [`PathSolver`] bound to a configured [`GridMap`].
///
/// This is the configure-then-solve surface: size the solver once, point it
/// at the caller's cost and traversability arrays with
/// [`configure_grid`](Self::configure_grid), then issue any number of
/// searches. The arrays may be swapped between searches by configuring
/// again.
pub struct GridSolver<'a> {
    solver: PathSolver,
    map: Option<GridMap<'a>>,
}

impl<'a> GridSolver<'a> {
    /// Create a solver for grids of up to `capacity` cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            solver: PathSolver::new(capacity),
            map: None,
        }
    }

    /// Search `width * height` cells described by `costs` and `mask`.
    ///
    /// A cell is enterable iff `mask[cell] & required_bits == required_bits`.
    /// Movement is 8-directional; see [`set_movement`](Self::set_movement).
    pub fn configure_grid(
        &mut self,
        costs: &'a [f32],
        mask: &'a [u32],
        width: usize,
        height: usize,
        required_bits: u32,
    ) -> Result<(), PathError> {
        let map = GridMap::new(costs, mask, width, height, required_bits)?;
        if map.width() * map.height() > self.solver.capacity() {
            return Err(PathError::CapacityExceeded {
                states: map.width() * map.height(),
                capacity: self.solver.capacity(),
            });
        }
        let movement = self.map.as_ref().map(GridMap::movement).unwrap_or_default();
        self.map = Some(map.with_movement(movement));
        Ok(())
    }

    /// Change the movement model of the configured grid.
    pub fn set_movement(&mut self, movement: Movement) -> Result<(), PathError> {
        let map = self.map.take().ok_or(PathError::GridNotConfigured)?;
        self.map = Some(map.with_movement(movement));
        Ok(())
    }

    /// The configured grid, if any.
    #[inline]
    pub fn grid(&self) -> Option<&GridMap<'a>> {
        self.map.as_ref()
    }

    /// The solver and the configured grid, borrowed side by side.
    fn parts(&mut self) -> Result<(&mut PathSolver, &GridMap<'a>), PathError> {
        let map = self.map.as_ref().ok_or(PathError::GridNotConfigured)?;
        Ok((&mut self.solver, map))
    }

    /// See [`PathSolver::solve`].
    pub fn solve(&mut self, start: StateId, end: StateId) -> Result<Solution, PathError> {
        let (solver, map) = self.parts()?;
        solver.solve(map, start, end)
    }

    /// See [`PathSolver::solve_with_cutoff`].
    pub fn solve_with_cutoff(
        &mut self,
        start: StateId,
        goals: &[StateId],
        cutoff: f32,
    ) -> Result<Solution, PathError> {
        let (solver, map) = self.parts()?;
        solver.solve_with_cutoff(map, start, goals, cutoff)
    }

    /// See [`PathSolver::solve_to_priority_set`].
    pub fn solve_to_priority_set(
        &mut self,
        start: StateId,
        goals: &[StateId],
    ) -> Result<Solution, PathError> {
        let (solver, map) = self.parts()?;
        solver.solve_to_priority_set(map, start, goals)
    }

    /// Checksum of the last solved path.
    #[inline]
    pub fn checksum(&self) -> u32 {
        self.solver.checksum()
    }

    /// The underlying solver, for statistics and cost queries.
    #[inline]
    pub fn solver(&self) -> &PathSolver {
        &self.solver
    }

    /// Whether the cell `state` can currently be entered.
    pub fn is_passable(&self, state: StateId) -> Result<bool, PathError> {
        let map = self.grid().ok_or(PathError::GridNotConfigured)?;
        Ok(map.is_passable(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Status;

    #[test]
    fn requires_configuration() {
        let mut gs = GridSolver::new(16);
        assert_eq!(
            gs.solve(StateId(0), StateId(1)).unwrap_err(),
            PathError::GridNotConfigured
        );
        assert_eq!(
            gs.set_movement(Movement::Cardinal).unwrap_err(),
            PathError::GridNotConfigured
        );
        assert_eq!(
            gs.solve_with_cutoff(StateId(0), &[StateId(1)], 0.0)
                .unwrap_err(),
            PathError::GridNotConfigured
        );
        assert_eq!(
            gs.solve_to_priority_set(StateId(0), &[StateId(1)])
                .unwrap_err(),
            PathError::GridNotConfigured
        );
        assert_eq!(
            gs.is_passable(StateId(0)).unwrap_err(),
            PathError::GridNotConfigured
        );
    }

    #[test]
    fn configure_then_solve() {
        let costs = vec![1.0; 16];
        let mask = vec![1u32; 16];
        let mut gs = GridSolver::new(16);
        gs.configure_grid(&costs, &mask, 4, 4, 1).unwrap();

        let sol = gs.solve(StateId(0), StateId(15)).unwrap();
        assert_eq!(sol.status, Status::Solved);
        assert!((sol.cost - 3.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
        assert_ne!(gs.checksum(), 0);

        gs.set_movement(Movement::Cardinal).unwrap();
        let sol = gs.solve(StateId(0), StateId(15)).unwrap();
        assert!((sol.cost - 6.0).abs() < 1e-4);
    }

    #[test]
    fn reconfigure_keeps_movement_and_sees_new_data() {
        let costs = vec![1.0; 9];
        let open = vec![1u32; 9];
        // Middle column blocked.
        let walled = vec![1, 0, 1, 1, 0, 1, 1, 0, 1];
        let mut gs = GridSolver::new(9);
        gs.configure_grid(&costs, &open, 3, 3, 1).unwrap();
        gs.set_movement(Movement::Cardinal).unwrap();
        assert!(gs.solve(StateId(0), StateId(2)).unwrap().is_solved());

        gs.configure_grid(&costs, &walled, 3, 3, 1).unwrap();
        assert_eq!(gs.grid().map(GridMap::movement), Some(Movement::Cardinal));
        assert!(!gs.is_passable(StateId(4)).unwrap());
        let sol = gs.solve(StateId(0), StateId(2)).unwrap();
        assert_eq!(sol.status, Status::NoSolution);
    }

    #[test]
    fn grid_larger_than_capacity_is_rejected() {
        let costs = vec![1.0; 20];
        let mask = vec![1u32; 20];
        let mut gs = GridSolver::new(16);
        assert_eq!(
            gs.configure_grid(&costs, &mask, 5, 4, 1).unwrap_err(),
            PathError::CapacityExceeded {
                states: 20,
                capacity: 16
            }
        );
        assert!(gs.grid().is_none());
    }

    #[test]
    fn multi_goal_modes() {
        let costs = vec![1.0; 10];
        let mask = vec![1u32; 10];
        let mut gs = GridSolver::new(10);
        gs.configure_grid(&costs, &mask, 10, 1, 1).unwrap();

        let sol = gs
            .solve_with_cutoff(StateId(0), &[StateId(8), StateId(3)], 2.0)
            .unwrap();
        assert_eq!(sol.status, Status::NoSolution);

        let sol = gs
            .solve_to_priority_set(StateId(0), &[StateId(8), StateId(3)])
            .unwrap();
        assert_eq!(sol.goal_index, Some(1));
        assert_eq!(gs.solver().cost_to(StateId(3)), Some(3.0));
    }
}
