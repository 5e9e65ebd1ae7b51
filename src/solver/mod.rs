use crate::search::astar as astar_search;
use crate::{Grid, NotFound, Position, Route, N_SMALLVEC_SIZE};
use log::{debug, info};
use smallvec::SmallVec;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

/// A route search strategy over a [Grid]. Implementations are plain configuration values; all
/// search state lives inside a single [find_route](GridSolver::find_route) call.
pub trait GridSolver {
    /// Estimate of the cost of getting from `p1` to `p2`.
    fn heuristic(&self, p1: &Position, p2: &Position) -> u64;

    /// Positions reachable in one move from `node`, paired with the cost of that move.
    fn successors(
        &self,
        grid: &Grid,
        node: &Position,
    ) -> SmallVec<[(Position, u64); N_SMALLVEC_SIZE]> {
        neighborhood_points_and_cost(grid, node)
    }

    /// Finds a route from `start` to `goal`, both included. A route consisting of just `start` is
    /// returned when the two coincide. By default this is a best-first search over
    /// [successors](GridSolver::successors) guided by [heuristic](GridSolver::heuristic).
    fn find_route(&self, grid: &Grid, start: Position, goal: Position) -> Result<Route, NotFound> {
        check_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(Route::new(vec![start]));
        }
        astar_search(
            &start,
            |node| self.successors(grid, node),
            |node| self.heuristic(node, &goal),
            |node| *node == goal,
        )
        .map(|(positions, _cost)| Route::new(positions))
        .ok_or_else(|| {
            info!("{} is not reachable from {}", goal, start);
            NotFound::Unreachable
        })
    }

    /// The quantity this solver minimises, evaluated for `route`. Defaults to the sum of entry
    /// costs of every position after the start; [None] if the route enters a cell that cannot be
    /// entered on `grid`.
    fn route_cost(&self, grid: &Grid, route: &Route) -> Option<u64> {
        route.entry_cost(grid)
    }
}

/// Rejects endpoints that are outside the grid or blocked, in that order of precedence: start
/// bounds, goal bounds, start cell, goal cell.
pub fn check_endpoints(grid: &Grid, start: Position, goal: Position) -> Result<(), NotFound> {
    let outcome = if !grid.in_bounds(start) {
        Err(NotFound::StartOutOfBounds)
    } else if !grid.in_bounds(goal) {
        Err(NotFound::GoalOutOfBounds)
    } else if !grid.is_passable(start) {
        Err(NotFound::StartBlocked)
    } else if !grid.is_passable(goal) {
        Err(NotFound::GoalBlocked)
    } else {
        Ok(())
    };
    if let Err(reason) = outcome {
        debug!("Not searching from {} to {}: {}", start, goal, reason);
    }
    outcome
}

/// Orthogonal neighbours of `pos` that can be entered, paired with their entry cost.
pub(crate) fn neighborhood_points_and_cost(
    grid: &Grid,
    pos: &Position,
) -> SmallVec<[(Position, u64); N_SMALLVEC_SIZE]> {
    pos.neumann_neighborhood()
        .into_iter()
        .filter_map(|p| grid.entry_cost(p).map(|cost| (p, u64::from(cost))))
        .collect()
}
