use crate::solver::GridSolver;
use crate::Position;

/// Uniform-cost search: [AstarSolver](super::astar::AstarSolver) with a heuristic of zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Position, _: &Position) -> u64 {
        0
    }
}
