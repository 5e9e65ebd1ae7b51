use crate::solver::GridSolver;
use crate::Position;

/// A* search minimising the summed entry cost of the cells a route moves into, guided by the
/// Manhattan distance to the goal.
///
/// With the default `heuristic_factor` of 1.0 the heuristic never overestimates, since every
/// passable cell costs at least 1 to enter, and the returned route is a cheapest one. Larger
/// factors explore less but may return a more expensive route.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// Manhattan distance times the heuristic factor.
    fn heuristic(&self, p1: &Position, p2: &Position) -> u64 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u64
    }
}
