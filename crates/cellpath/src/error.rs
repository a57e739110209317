use std::fmt;

/// Misuse of the solver: bad handles, inconsistent grid data, or a grid that
/// does not fit the node pool.
///
/// A search that finds no path is not an error; it is reported through
/// [`Status::NoSolution`](crate::Status::NoSolution).
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A state handle outside `[0, capacity)`.
    StateOutOfRange { state: usize, capacity: usize },
    /// Grid arrays whose lengths differ from `width * height`.
    GridSizeMismatch {
        expected: usize,
        costs: usize,
        mask: usize,
    },
    /// A grid with zero width or height.
    EmptyGrid,
    /// Grid dimensions whose cell count or coordinates do not fit.
    GridTooLarge { width: usize, height: usize },
    /// A cost multiplier or edge cost that is negative, infinite or NaN.
    InvalidCost { state: usize, cost: f32 },
    /// A cost model with more states than the node pool holds.
    CapacityExceeded { states: usize, capacity: usize },
    /// A grid search requested before any grid was configured.
    GridNotConfigured,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateOutOfRange { state, capacity } => {
                write!(f, "state {state} is outside the node pool (capacity {capacity})")
            }
            Self::GridSizeMismatch {
                expected,
                costs,
                mask,
            } => write!(
                f,
                "grid arrays do not match width*height = {expected}: {costs} costs, {mask} mask entries"
            ),
            Self::EmptyGrid => write!(f, "grid has zero width or height"),
            Self::GridTooLarge { width, height } => {
                write!(f, "grid of {width}x{height} cells is too large")
            }
            Self::InvalidCost { state, cost } => {
                write!(f, "state {state} has invalid cost {cost}")
            }
            Self::CapacityExceeded { states, capacity } => write!(
                f,
                "cost model has {states} states but the node pool holds {capacity}"
            ),
            Self::GridNotConfigured => write!(f, "no grid configured"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = PathError::StateOutOfRange {
            state: 42,
            capacity: 16,
        };
        assert_eq!(
            e.to_string(),
            "state 42 is outside the node pool (capacity 16)"
        );

        let e = PathError::GridSizeMismatch {
            expected: 12,
            costs: 12,
            mask: 11,
        };
        assert!(e.to_string().contains("11 mask entries"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let e: Box<dyn std::error::Error> = Box::new(PathError::GridNotConfigured);
        assert_eq!(e.to_string(), "no grid configured");
    }
}
