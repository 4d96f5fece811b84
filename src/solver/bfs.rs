use grid_util::point::Point;

use crate::frontier::FifoFrontier;
use crate::solver::{Algorithm, GridSolver};

/// Breadth-first search. With uniform step costs insertion order is depth order, so the first
/// time the goal is popped it was reached by a shortest path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }
    fn new_frontier(&self) -> Self::Frontier {
        FifoFrontier::new()
    }
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use grid_util::grid::{BoolGrid, ValueGrid};

    use super::*;
    use crate::pathing_grid::{grid_point, PathingGrid};
    use crate::search::Termination;

    #[test]
    fn follows_corridor() {
        // |S.#|
        // |#.#|
        // |#.G|
        let mut walls = BoolGrid::new(3, 3, false);
        for (x, y) in [(2, 0), (0, 1), (2, 1), (0, 2)] {
            walls.set(x, y, true);
        }
        let start = grid_point(0, 0);
        let goal = grid_point(2, 2);
        let pathing_grid = PathingGrid::from_walls(walls, start, goal).unwrap();
        let path = BfsSolver
            .get_path_single_goal(&pathing_grid, start, goal)
            .unwrap();
        let expected = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)].map(|(r, c)| grid_point(r, c));
        assert_eq!(path, expected);
    }

    #[test]
    fn walled_off_goal() {
        let mut walls = BoolGrid::new(3, 3, false);
        for x in 0..3 {
            walls.set(x, 1, true);
        }
        let start = grid_point(0, 0);
        let goal = grid_point(2, 2);
        let pathing_grid = PathingGrid::from_walls(walls, start, goal).unwrap();
        let outcome = BfsSolver.search(&pathing_grid, start, goal, None);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.path_length(), 0);
        assert_eq!(outcome.stats.expanded, 3);
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let start = grid_point(0, 0);
        let pathing_grid = PathingGrid::from_walls(BoolGrid::new(2, 2, false), start, start).unwrap();
        let outcome = BfsSolver.search(&pathing_grid, start, grid_point(5, 5), None);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.stats.popped, 0);
    }
}
