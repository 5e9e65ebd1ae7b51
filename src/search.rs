//! Best-first search shared by the weighted solvers, along with the predecessor bookkeeping and
//! route reconstruction that breadth-first search uses as well.
//!
//! [astar] is a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Successors depend on the current node only, as in the original. It differs in two places: the
//! start entry is queued with its heuristic estimate rather than zero, and a popped index that is
//! missing from the map is skipped instead of unwrapped.
//!
//! Discovered nodes live in an insertion-ordered map so that predecessor links can be stored as
//! indices. The first inserted node is the start and carries the [NO_PARENT] sentinel. That map
//! doubles as the cost map in [astar] and as the visited set in breadth-first search.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::{Position, Route};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor index of the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse on estimated cost, then prefer the entry that has
        // already come further.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Follows predecessor indices from `last` back to the sentinel and returns the nodes in
/// start-to-`last` order.
pub(crate) fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, last: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = std::iter::successors(Some(last), |&i| {
        parents.get_index(i).map(|(_, value)| parent(value))
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Rebuilds the route ending at `goal`. Returns [None] if `goal` was never discovered.
pub(crate) fn reconstruct_route<V, F>(
    parents: &FxIndexMap<Position, V>,
    parent: F,
    goal: &Position,
) -> Option<Route>
where
    F: FnMut(&V) -> usize,
{
    parents
        .get_index_of(goal)
        .map(|ix| Route::new(reverse_path(parents, parent, ix)))
}

/// A* over an implicit graph. `successors` yields `(node, move_cost)` pairs, `heuristic`
/// estimates the remaining cost and `success` recognises the goal. Returns the node sequence and
/// its total cost, or [None] once the frontier is exhausted.
///
/// A node may be pushed several times as cheaper routes to it are found. Entries whose cost is
/// above the best known cost for their node are skipped when popped; there is no closed set.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                trace!("Goal popped after discovering {} nodes", parents.len());
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // Stale entry: a cheaper route to this node was recorded after it was pushed.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    trace!("Frontier exhausted after discovering {} nodes", parents.len());
    None
}
