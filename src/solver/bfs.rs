use std::collections::VecDeque;

use log::{info, trace, warn};
use smallvec::SmallVec;

use crate::search::{reconstruct_route, FxIndexMap, NO_PARENT};
use crate::solver::{check_endpoints, GridSolver};
use crate::{Grid, NotFound, Position, Route, N_SMALLVEC_SIZE};

/// Breadth-first search treating every passable cell as unit cost. Finds a route with the fewest
/// steps; among equally short routes the one returned follows from the up, down, left, right
/// expansion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver
    }
}

impl GridSolver for BfsSolver {
    /// Breadth-first order needs no guidance.
    fn heuristic(&self, _: &Position, _: &Position) -> u64 {
        0
    }

    /// Passable orthogonal neighbours, each one step away regardless of the cell value.
    fn successors(
        &self,
        grid: &Grid,
        node: &Position,
    ) -> SmallVec<[(Position, u64); N_SMALLVEC_SIZE]> {
        node.neumann_neighborhood()
            .into_iter()
            .filter(|p| grid.is_passable(*p))
            .map(|p| (p, 1))
            .collect()
    }

    fn find_route(&self, grid: &Grid, start: Position, goal: Position) -> Result<Route, NotFound> {
        check_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(Route::new(vec![start]));
        }

        // Doubles as the visited set: a position is inserted when first discovered, so it is
        // queued at most once.
        let mut parents: FxIndexMap<Position, usize> = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);

        while let Some(index) = queue.pop_front() {
            let Some((&current, _)) = parents.get_index(index) else {
                continue;
            };
            if current == goal {
                trace!("Goal dequeued after discovering {} positions", parents.len());
                return reconstruct_route(&parents, |&p| p, &goal).ok_or_else(|| {
                    warn!("Predecessor chain for {} is broken", goal);
                    NotFound::Unreachable
                });
            }
            for (neighbour, _) in self.successors(grid, &current) {
                if parents.contains_key(&neighbour) {
                    continue;
                }
                let (n, _) = parents.insert_full(neighbour, index);
                queue.push_back(n);
            }
        }
        info!(
            "{} is not reachable from {} ({} positions explored)",
            goal,
            start,
            parents.len()
        );
        Err(NotFound::Unreachable)
    }

    /// Step count of the route.
    fn route_cost(&self, _grid: &Grid, route: &Route) -> Option<u64> {
        Some(route.steps() as u64)
    }
}
