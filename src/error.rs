//! Error types for grid construction and route search.

use crate::Position;

/// Reasons a grid could not be built or updated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row's length differs from that of the first row.
    #[error("row {row} has {found} cells, expected {expected} like the first row")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A write targeted a position outside the grid.
    #[error("position {0} lies outside the grid")]
    OutOfBounds(Position),
}

/// Why a search produced no route. Every variant means the same thing to a caller that only
/// cares whether a route exists; the variant is kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NotFound {
    #[error("no route: start position is outside the grid")]
    StartOutOfBounds,
    #[error("no route: goal position is outside the grid")]
    GoalOutOfBounds,
    #[error("no route: start position is blocked")]
    StartBlocked,
    #[error("no route: goal position is blocked")]
    GoalBlocked,
    /// Both endpoints are valid but the frontier ran dry before the goal was reached.
    #[error("no route: goal is not reachable from start")]
    Unreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let ragged = GridError::Ragged {
            row: 2,
            expected: 5,
            found: 3,
        };
        assert_eq!(
            ragged.to_string(),
            "row 2 has 3 cells, expected 5 like the first row"
        );
        assert_eq!(
            GridError::OutOfBounds(Position::new(-1, 4)).to_string(),
            "position (-1, 4) lies outside the grid"
        );
        assert_eq!(
            NotFound::GoalBlocked.to_string(),
            "no route: goal position is blocked"
        );
    }

    #[test]
    fn usable_as_boxed_errors() {
        let errors: Vec<Box<dyn std::error::Error>> =
            vec![Box::new(GridError::Empty), Box::new(NotFound::Unreachable)];
        assert!(errors.iter().all(|e| e.source().is_none()));
    }
}
