use grid_util::point::Point;

use crate::frontier::PriorityFrontier;
use crate::solver::{heuristic, Algorithm, GridSolver};

/// A* ordered by `g + h` with the Manhattan distance as `h`. Finds a shortest path while
/// expanding no more cells than [DijkstraSolver](super::dijkstra::DijkstraSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Astar
    }
    fn new_frontier(&self) -> Self::Frontier {
        PriorityFrontier::new()
    }
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        heuristic(p1, p2)
    }
}
