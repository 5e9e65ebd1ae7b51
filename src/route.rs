use crate::{Grid, Position};
use itertools::Itertools;

/// An ordered sequence of positions from start to goal, both included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    positions: Vec<Position>,
}

impl Route {
    pub(crate) fn new(positions: Vec<Position>) -> Route {
        debug_assert!(!positions.is_empty());
        Route { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// Number of positions, start and goal included. Never zero.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn start(&self) -> Position {
        self.positions[0]
    }

    pub fn goal(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.positions.contains(pos)
    }

    /// True if every consecutive pair is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.positions
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }

    /// Sum of the entry costs of every position after the start. [None] if the route crosses a
    /// cell that cannot be entered on `grid`.
    pub fn entry_cost(&self, grid: &Grid) -> Option<u64> {
        self.positions
            .iter()
            .skip(1)
            .map(|&pos| grid.entry_cost(pos).map(u64::from))
            .sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl IntoIterator for Route {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl From<Route> for Vec<Position> {
    fn from(route: Route) -> Vec<Position> {
        route.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(cells: &[(i32, i32)]) -> Route {
        Route::new(cells.iter().map(|&c| c.into()).collect())
    }

    #[test]
    fn contiguity() {
        assert!(route(&[(0, 0), (0, 1), (1, 1)]).is_contiguous());
        assert!(!route(&[(0, 0), (1, 1)]).is_contiguous());
        assert!(!route(&[(0, 0), (0, 2)]).is_contiguous());
        assert!(route(&[(3, 3)]).is_contiguous());
    }

    #[test]
    fn entry_cost_skips_start() {
        let grid = Grid::from_rows(vec![vec![9, 2], vec![0, 4]]).unwrap();
        let r = route(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(r.entry_cost(&grid), Some(6));
        assert_eq!(r.steps(), 2);
        assert_eq!((r.start(), r.goal()), (Position::new(0, 0), Position::new(1, 1)));
        assert_eq!(route(&[(0, 0), (1, 0)]).entry_cost(&grid), None);
    }
}
