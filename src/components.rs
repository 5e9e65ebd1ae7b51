use log::info;
use petgraph::unionfind::UnionFind;

use crate::{Grid, Position};

/// Labels the 4-connected regions of passable cells of a [Grid]. Checking whether two positions
/// share a component answers "does a route exist" without running a search.
///
/// The labelling is a snapshot: it has to be regenerated after the grid changes.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    rows: usize,
    cols: usize,
    passable: Vec<bool>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components. Only the down and right neighbours need to be joined per cell.
    pub fn generate(grid: &Grid) -> Components {
        info!(
            "Generating connected components for a {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        let mut components = UnionFind::new(grid.rows() * grid.cols());
        let mut passable = vec![false; grid.rows() * grid.cols()];
        for pos in grid.passable_positions() {
            let parent_ix = grid.index(pos);
            passable[parent_ix] = true;
            [
                Position::new(pos.row + 1, pos.col),
                Position::new(pos.row, pos.col + 1),
            ]
            .into_iter()
            .filter(|p| grid.is_passable(*p))
            .for_each(|p| {
                components.union(parent_ix, grid.index(p));
            });
        }
        Components {
            components,
            rows: grid.rows(),
            cols: grid.cols(),
            passable,
        }
    }

    fn ix(&self, pos: &Position) -> Option<usize> {
        let in_bounds = pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols;
        in_bounds
            .then(|| pos.row as usize * self.cols + pos.col as usize)
            .filter(|&ix| self.passable[ix])
    }

    /// Retrieves the component id of a passable position.
    pub fn get_component(&self, pos: &Position) -> Option<usize> {
        self.ix(pos).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        match (self.ix(start), self.ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => self.components.equiv(start_ix, goal_ix),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        !self.reachable(start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let grid = Grid::from_rows(vec![vec![1, 0, 1], vec![1, 0, 1]]).unwrap();
        let components = Components::generate(&grid);
        let p1 = Position::new(0, 0);
        let p2 = Position::new(1, 0);
        let p3 = Position::new(0, 2);
        let wall = Position::new(0, 1);
        assert!(components.reachable(&p1, &p2));
        assert!(components.unreachable(&p1, &p3));
        assert!(components.unreachable(&p1, &wall));
        assert!(components.get_component(&wall).is_none());
        assert_eq!(components.get_component(&p1), components.get_component(&p2));
    }

    /// Diagonal contact does not connect two cells.
    #[test]
    fn diagonal_cells_are_separate() {
        //  __
        // | #|
        // |# |
        //  __
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let components = Components::generate(&grid);
        assert!(components.unreachable(&Position::new(0, 0), &Position::new(1, 1)));
    }

    /// Asserts that the two corners are connected around a central obstacle.
    #[test]
    fn reachable_around_obstacle() {
        let grid = Grid::from_rows(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
        let components = Components::generate(&grid);
        assert!(components.reachable(&Position::new(0, 0), &Position::new(2, 2)));
        assert!(components.unreachable(&Position::new(0, 0), &Position::new(3, 3)));
    }
}
