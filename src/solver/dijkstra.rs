use grid_util::point::Point;

use crate::frontier::PriorityFrontier;
use crate::solver::{Algorithm, GridSolver};

/// Uniform-cost search: the priority frontier with a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }
    fn new_frontier(&self) -> Self::Frontier {
        PriorityFrontier::new()
    }
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
