use core::fmt;
use grid_util::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Orthogonal moves in the order neighbours are expanded: up, down, left, right.
pub const MOVES: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell coordinate on a [Grid](crate::Grid), given as (row, column). Coordinates may be negative
/// or exceed the grid dimensions, in which case the position is simply out of bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if `other` is exactly one orthogonal unit step away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four orthogonal neighbours in [MOVES] order. No bounds checks are done here.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        MOVES
            .iter()
            .map(|&(d_row, d_col)| Position::new(self.row + d_row, self.col + d_col))
            .collect()
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> (i32, i32) {
        (pos.row, pos.col)
    }
}

// Grid storage is indexed by (x, y), so columns map to x and rows to y.
impl From<Position> for Point {
    fn from(pos: Position) -> Point {
        Point::new(pos.col, pos.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order() {
        let p = Position::new(2, 3);
        let neighbours = p.neumann_neighborhood();
        assert_eq!(
            neighbours.as_slice(),
            &[
                Position::new(1, 3),
                Position::new(3, 3),
                Position::new(2, 2),
                Position::new(2, 4)
            ]
        );
        assert!(neighbours.iter().all(|n| p.is_adjacent(n)));
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        let p = Position::new(0, 0);
        assert!(!p.is_adjacent(&Position::new(1, 1)));
        assert!(!p.is_adjacent(&p));
        assert_eq!(p.manhattan_distance(&Position::new(-2, 3)), 5);
    }

    #[test]
    fn point_conversion_swaps_axes() {
        let point: Point = Position::new(4, 7).into();
        assert_eq!((point.x, point.y), (7, 4));
    }
}
