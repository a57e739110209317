//! **cellpath-core** — grid geometry shared by the *cellpath* solver.
//!
//! A grid is a [`Range`] of cells addressed by [`Point`]. Every cell also has
//! a row-major linear index, which is the form the solver works with.

pub mod geom;

pub use geom::{Point, Range};
