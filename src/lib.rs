//! # grid_routing
//!
//! Route search on 2D grids. Cells holding `0` are obstacles; positive cells can be entered, and
//! for weighted searches their value is the cost of entering them. Movement is restricted to the
//! four orthogonal directions.
//!
//! Two interchangeable solvers implement [GridSolver]:
//! - [BfsSolver] finds a route with the fewest steps, ignoring cell weights;
//! - [AstarSolver] finds a route with the lowest total entry cost, using the
//!   [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//!
//! [DijkstraSolver] is the zero-heuristic variant of A*. [Components] pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) for cheap
//! reachability checks.
//!
//! ```
//! use grid_routing::{AstarSolver, BfsSolver, Grid, GridSolver, Position};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1, 1, 1],
//!     vec![1, 0, 9],
//!     vec![1, 1, 1],
//! ])
//! .unwrap();
//! let start = Position::new(0, 0);
//! let goal = Position::new(2, 2);
//! let fewest_steps = BfsSolver.find_route(&grid, start, goal).unwrap();
//! let cheapest = AstarSolver::new().find_route(&grid, start, goal).unwrap();
//! assert_eq!(fewest_steps.len(), 5);
//! assert_eq!(cheapest.entry_cost(&grid), Some(4));
//! ```
mod components;
mod error;
mod grid;
mod position;
mod route;
mod search;
pub mod solver;

pub use components::Components;
pub use error::{GridError, NotFound};
pub use grid::Grid;
pub use position::{Position, MOVES};
pub use route::Route;
pub use solver::{
    astar::AstarSolver, bfs::BfsSolver, check_endpoints, dijkstra::DijkstraSolver, GridSolver,
};

/// Inline capacity of neighbour lists; one slot per orthogonal direction.
pub const N_SMALLVEC_SIZE: usize = 4;
