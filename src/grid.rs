use crate::error::GridError;
use crate::Position;
use core::fmt;
use grid_util::{SimpleValueGrid, ValueGrid};
use itertools::iproduct;

/// A rectangular grid of cell values. A value of `0` marks an obstacle; any positive value is
/// walkable, and for weighted searches it is the cost of entering that cell.
///
/// The searches only ever read a [Grid]; changing cells is left to the owner.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleValueGrid<u32>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell set to `value`. Both dimensions must be
    /// non-zero.
    pub fn new(rows: usize, cols: usize, value: u32) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Grid {
            cells: SimpleValueGrid::new(cols, rows, value),
            rows,
            cols,
        })
    }

    /// Builds a grid from row-major values, rejecting empty and non-rectangular input.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Grid, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        let mut grid = Grid::new(rows.len(), cols, 0)?;
        for (r, values) in rows.into_iter().enumerate() {
            for (c, value) in values.into_iter().enumerate() {
                grid.cells.set(c as i32, r as i32, value);
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies within `[0, rows) x [0, cols)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// The raw cell value, or [None] when `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> Option<u32> {
        if self.in_bounds(pos) {
            Some(self.cells.get_point(pos.into()))
        } else {
            None
        }
    }

    /// Overwrites a cell. Searches never call this.
    pub fn set(&mut self, pos: Position, value: u32) -> Result<(), GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        self.cells.set_point(pos.into(), value);
        Ok(())
    }

    /// In bounds and not an obstacle.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|value| value != 0)
    }

    /// The cost of entering `pos`, i.e. its raw value, if the cell can be entered at all.
    pub fn entry_cost(&self, pos: Position) -> Option<u32> {
        self.get(pos).filter(|&value| value != 0)
    }

    /// Row-major linear index of an in-bounds position.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }

    pub fn passable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        iproduct!(0..self.rows as i32, 0..self.cols as i32)
            .map(|(row, col)| Position::new(row, col))
            .filter(move |&pos| self.is_passable(pos))
    }

    pub fn passable_count(&self) -> usize {
        self.passable_positions().count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let values = (0..self.cols as i32)
                .map(|col| self.cells.get(col, row))
                .collect::<Vec<u32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![1, 0, 3], vec![2, 1, 0]]).unwrap()
    }

    #[test]
    fn bounds_and_passability() {
        let grid = sample();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert!(grid.in_bounds(Position::new(1, 2)));
        assert!(!grid.in_bounds(Position::new(2, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        assert!(grid.is_passable(Position::new(0, 2)));
        assert!(!grid.is_passable(Position::new(0, 1)));
        assert!(!grid.is_passable(Position::new(5, 5)));
        assert_eq!(grid.entry_cost(Position::new(0, 2)), Some(3));
        assert_eq!(grid.entry_cost(Position::new(1, 2)), None);
        assert_eq!(grid.get(Position::new(1, 2)), Some(0));
        assert_eq!(grid.passable_count(), 4);
    }

    #[test]
    fn rejects_malformed_rows() {
        assert_eq!(Grid::from_rows(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::from_rows(vec![vec![]]).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::new(0, 3, 1).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::new(3, 0, 1).unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::from_rows(vec![vec![1, 1], vec![1], vec![1, 1]]).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn set_outside_grid_fails() {
        let mut grid = Grid::new(2, 2, 1).unwrap();
        let outside = Position::new(2, 0);
        assert_eq!(grid.set(outside, 0), Err(GridError::OutOfBounds(outside)));
        grid.set(Position::new(1, 1), 0).unwrap();
        assert!(!grid.is_passable(Position::new(1, 1)));
    }

    #[test]
    fn display_prints_rows() {
        assert_eq!(sample().to_string(), "[1, 0, 3]\n[2, 1, 0]\n");
    }
}
