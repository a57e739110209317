//! Weighted grid cost model.

use cellpath_core::{Point, Range};

use crate::error::PathError;
use crate::traits::{CostModel, Edge, StateId};

/// Movement model of a [`GridMap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Four axis-aligned steps of base cost 1.
    Cardinal,
    /// Axis-aligned steps of base cost 1 plus diagonals of base cost √2.
    #[default]
    Octile,
}

/// A rectangular grid of cells searched as a [`CostModel`].
///
/// The grid borrows two caller-owned arrays, both in row-major order:
/// a per-cell cost multiplier and a per-cell bitmask. A cell can be entered
/// iff `mask[cell] & required_bits == required_bits`; entering it costs the
/// base step distance times `costs[cell]`. The solver never mutates either
/// array.
#[derive(Clone, Debug)]
pub struct GridMap<'a> {
    costs: &'a [f32],
    mask: &'a [u32],
    rng: Range,
    required_bits: u32,
    movement: Movement,
}

impl<'a> GridMap<'a> {
    /// Wrap `width * height` cells of cost and traversability data.
    pub fn new(
        costs: &'a [f32],
        mask: &'a [u32],
        width: usize,
        height: usize,
        required_bits: u32,
    ) -> Result<Self, PathError> {
        if width == 0 || height == 0 {
            return Err(PathError::EmptyGrid);
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(PathError::GridTooLarge { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(PathError::GridTooLarge { width, height })?;
        if costs.len() != expected || mask.len() != expected {
            return Err(PathError::GridSizeMismatch {
                expected,
                costs: costs.len(),
                mask: mask.len(),
            });
        }
        if let Some((state, &cost)) = costs
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(PathError::InvalidCost { state, cost });
        }
        Ok(Self {
            costs,
            mask,
            rng: Range::with_size(width as i32, height as i32),
            required_bits,
            movement: Movement::default(),
        })
    }

    /// Select the movement model (8-directional by default).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rng.width() as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rng.height() as usize
    }

    /// The cell rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Whether `state` is on the grid and passes the traversability test.
    #[inline]
    pub fn is_passable(&self, state: StateId) -> bool {
        self.mask
            .get(state.0)
            .is_some_and(|m| m & self.required_bits == self.required_bits)
    }

    /// Handle of the cell at `p`, or `None` off the grid.
    #[inline]
    pub fn state_at(&self, p: Point) -> Option<StateId> {
        self.rng.idx(p).map(StateId)
    }

    /// Coordinates of `state`. The handle is not bounds-checked.
    #[inline]
    pub fn point_of(&self, state: StateId) -> Point {
        self.rng.point(state.0)
    }

    /// Handle of the grid cell nearest to `p`.
    ///
    /// This is a convenience for callers whose coordinates may fall off the
    /// map; the solver itself rejects out-of-range handles instead of
    /// clamping them.
    #[inline]
    pub fn clamp_state(&self, p: Point) -> StateId {
        StateId(self.rng.idx(self.rng.clamp(p)).unwrap_or(0))
    }
}

impl CostModel for GridMap<'_> {
    #[inline]
    fn state_count(&self) -> usize {
        self.costs.len()
    }

    fn neighbors(&self, state: StateId, buf: &mut Vec<Edge>) {
        let p = self.point_of(state);
        let dirs: &[Point] = match self.movement {
            Movement::Cardinal => &Point::CARDINALS,
            Movement::Octile => &Point::OCTILES,
        };
        for &d in dirs {
            let Some(to) = self.state_at(p + d) else {
                continue;
            };
            if !self.is_passable(to) {
                continue;
            }
            let base = if d.is_diagonal() {
                std::f32::consts::SQRT_2
            } else {
                1.0
            };
            buf.push(Edge {
                to,
                cost: base * self.costs[to.0],
            });
        }
    }
}
