//! Reusable cheapest-path solver for weighted grids and other graphs.
//!
//! [`PathSolver`] searches any [`CostModel`] whose states are dense handles
//! `0..n`. Its node pool is sized once up front and reset per search by a
//! generation stamp, so a search costs O(visited nodes) no matter how large
//! the graph is, and repeated searches allocate nothing but the result path.
//!
//! Three searches share one expansion loop:
//!
//! - [`PathSolver::solve`]: point to point.
//! - [`PathSolver::solve_with_cutoff`]: to any of several goals, giving up
//!   beyond a maximum cost.
//! - [`PathSolver::solve_to_priority_set`]: to the cheapest of several goals,
//!   reporting which one was reached.
//!
//! [`GridMap`] is the grid cost model: a per-cell cost multiplier and a
//! per-cell traversability bitmask, with 8-directional movement.
//! [`GridSolver`] bundles the two behind a configure-then-solve interface.
//!
//! ```
//! use cellpath::{GridSolver, Status, StateId};
//!
//! let costs = vec![1.0; 16];
//! let mask = vec![1u32; 16];
//! let mut gs = GridSolver::new(16);
//! gs.configure_grid(&costs, &mask, 4, 4, 1).unwrap();
//! let sol = gs.solve(StateId(0), StateId(15)).unwrap();
//! assert_eq!(sol.status, Status::Solved);
//! assert_eq!(sol.path.len(), 4);
//! ```

mod checksum;
mod error;
mod grid;
mod grid_solver;
mod open;
mod path;
mod pool;
mod solver;
mod traits;

pub use checksum::path_checksum;
pub use error::PathError;
pub use grid::{GridMap, Movement};
pub use grid_solver::GridSolver;
pub use pool::UNREACHABLE;
pub use solver::{PathSolver, Solution, Status};
pub use traits::{CostModel, Edge, StateId};
