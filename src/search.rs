//! The search loop shared by every solver.
//!
//! Nodes are never mutated once created. A cheaper route to a coordinate simply adds another
//! node, and only the first node popped for a coordinate is expanded. Predecessor links are
//! indices into the [NodeArena] owned by the run, so they always point at older nodes and form a
//! tree rooted at the start.
use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::{debug, warn};
use serde::Serialize;

/// Index of a [SearchNode] inside its [NodeArena].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub(crate) fn new(index: usize) -> NodeHandle {
        NodeHandle(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub point: Point,
    /// Steps taken from the start.
    pub g: i32,
    /// Heuristic estimate of the remaining steps, zero for uninformed solvers.
    pub h: i32,
    pub parent: Option<NodeHandle>,
}

impl SearchNode {
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Owns every node created during a single run.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn alloc(&mut self, node: SearchNode) -> NodeHandle {
        let handle = NodeHandle::new(self.nodes.len());
        self.nodes.push(node);
        handle
    }
    pub fn get(&self, handle: NodeHandle) -> &SearchNode {
        &self.nodes[handle.0]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks the predecessor links from `handle` back to the root and returns the points in
    /// root-to-`handle` order.
    pub fn path_to(&self, handle: NodeHandle) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(self.get(handle)), |node| {
                node.parent.map(|parent| self.get(parent))
            })
            .map(|node| node.point)
            .collect();
        path.reverse();
        path
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The goal was popped from the frontier.
    Success,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The pop budget ran out first. Reported like [Termination::Exhausted].
    IterationCapReached,
}

impl Termination {
    pub fn is_success(self) -> bool {
        self == Termination::Success
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Termination::Success => "success",
            Termination::Exhausted => "exhausted",
            Termination::IterationCapReached => "iteration cap reached",
        };
        f.pad(text)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes taken off the frontier.
    pub popped: usize,
    /// Coordinates finalized, the goal included.
    pub expanded: usize,
    /// Nodes created and pushed onto the frontier.
    pub pushed: usize,
    /// Pops discarded because their coordinate was already finalized.
    pub stale: usize,
}

/// Result of a single run: the start-to-goal path (empty unless the search succeeded), how the
/// run ended and what it cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub termination: Termination,
    pub path: Vec<Point>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn unsuccessful(termination: Termination, stats: SearchStats) -> SearchOutcome {
        SearchOutcome {
            termination,
            path: Vec::new(),
            stats,
        }
    }
    /// Number of cells on the path, both endpoints included.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
    pub fn found(&self) -> bool {
        self.termination.is_success()
    }
}

/// Runs the expand-frontier loop from `start` until `goal` is popped, the frontier is exhausted
/// or `iteration_cap` pops have been made. The visitation order is determined by the solver's
/// frontier and heuristic.
pub fn search<S>(
    solver: &S,
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    iteration_cap: Option<usize>,
) -> SearchOutcome
where
    S: GridSolver + ?Sized,
{
    let mut stats = SearchStats::default();
    if !grid.in_bounds(&start) || !grid.in_bounds(&goal) {
        debug!("{} or {} lies outside the grid", start, goal);
        return SearchOutcome::unsuccessful(Termination::Exhausted, stats);
    }
    let mut arena = NodeArena::default();
    let mut closed = BoolGrid::new(grid.width(), grid.height(), false);
    let mut frontier = solver.new_frontier();

    let h = solver.heuristic(&start, &goal);
    let root = arena.alloc(SearchNode {
        point: start,
        g: 0,
        h,
        parent: None,
    });
    frontier.push(root, 0, h);
    stats.pushed += 1;

    loop {
        if iteration_cap.is_some_and(|cap| stats.popped >= cap) && !frontier.is_empty() {
            warn!(
                "{} stopped after {} pops with {} nodes left on the frontier",
                solver.algorithm(),
                stats.popped,
                frontier.len()
            );
            return SearchOutcome::unsuccessful(Termination::IterationCapReached, stats);
        }
        let Some(handle) = frontier.pop() else {
            break;
        };
        stats.popped += 1;
        let current = *arena.get(handle);
        let p = current.point;
        if closed.get(p.x, p.y) {
            stats.stale += 1;
            continue;
        }
        closed.set(p.x, p.y, true);
        stats.expanded += 1;

        if p == goal {
            let path = arena.path_to(handle);
            debug!(
                "{} reached {} in {} steps, {:?}",
                solver.algorithm(),
                goal,
                current.g,
                stats
            );
            return SearchOutcome {
                termination: Termination::Success,
                path,
                stats,
            };
        }

        for n in grid.neighbours(&p) {
            if closed.get(n.x, n.y) {
                continue;
            }
            let g = current.g + 1;
            let h = solver.heuristic(&n, &goal);
            let child = arena.alloc(SearchNode {
                point: n,
                g,
                h,
                parent: Some(handle),
            });
            frontier.push(child, g, h);
            stats.pushed += 1;
        }
    }
    debug!(
        "{} exhausted the frontier without reaching {}, {:?}",
        solver.algorithm(),
        goal,
        stats
    );
    SearchOutcome::unsuccessful(Termination::Exhausted, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathing_grid::grid_point;

    fn node(point: Point, g: i32, parent: Option<NodeHandle>) -> SearchNode {
        SearchNode {
            point,
            g,
            h: 0,
            parent,
        }
    }

    #[test]
    fn path_is_reconstructed_from_root() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(node(grid_point(0, 0), 0, None));
        let b = arena.alloc(node(grid_point(1, 0), 1, Some(a)));
        // A sibling branch that must not appear on the path
        arena.alloc(node(grid_point(0, 1), 1, Some(a)));
        let c = arena.alloc(node(grid_point(1, 1), 2, Some(b)));
        assert_eq!(arena.len(), 4);
        assert_eq!(
            arena.path_to(c),
            vec![grid_point(0, 0), grid_point(1, 0), grid_point(1, 1)]
        );
        assert_eq!(arena.path_to(a), vec![grid_point(0, 0)]);
    }

    #[test]
    fn f_is_sum_of_costs() {
        let n = SearchNode {
            point: grid_point(0, 0),
            g: 3,
            h: 4,
            parent: None,
        };
        assert_eq!(n.f(), 7);
    }
}
