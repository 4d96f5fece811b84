use crate::error::ConfigurationError;
use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;
use crate::search::{search, SearchOutcome};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use serde::Serialize;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), the exact step count
/// on an empty 4-connected grid and therefore admissible whenever walls are present.
pub fn heuristic(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// A visitation policy for the shared search loop in [crate::search]: which frontier to use and
/// how to estimate the remaining distance.
pub trait GridSolver {
    type Frontier: Frontier;

    fn algorithm(&self) -> Algorithm;
    /// A fresh, empty frontier for a new run.
    fn new_frontier(&self) -> Self::Frontier;
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Runs a complete search with its own node arena and closed set.
    fn search(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        iteration_cap: Option<usize>,
    ) -> SearchOutcome {
        search(self, grid, start, goal, iteration_cap)
    }

    /// Computes a path from start to goal, both included, or [None] if the goal is unreachable.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        let outcome = self.search(grid, start, goal, None);
        outcome.found().then_some(outcome.path)
    }
}

/// Selects one of the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Astar,
    Dijkstra,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Astar, Algorithm::Dijkstra, Algorithm::Bfs];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Astar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
        }
    }

    /// Runs the matching solver.
    pub fn solve(
        self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        iteration_cap: Option<usize>,
    ) -> SearchOutcome {
        match self {
            Algorithm::Astar => AstarSolver.search(grid, start, goal, iteration_cap),
            Algorithm::Dijkstra => DijkstraSolver.search(grid, start, goal, iteration_cap),
            Algorithm::Bfs => BfsSolver.search(grid, start, goal, iteration_cap),
        }
    }

    /// Parses a selector such as `"all"`, `"astar"` or `"bfs,dijkstra"`. Names are
    /// case-insensitive, `"all"` expands to every algorithm and repeated entries are dropped while
    /// keeping the requested order.
    pub fn parse_selection(selector: &str) -> Result<Vec<Algorithm>, ConfigurationError> {
        let mut algorithms = Vec::new();
        for token in selector.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("all") {
                algorithms.extend(Algorithm::ALL);
            } else {
                algorithms.push(token.parse()?);
            }
        }
        if algorithms.is_empty() {
            return Err(ConfigurationError::NoAlgorithms);
        }
        Ok(algorithms.into_iter().unique().collect())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Algorithm::Astar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            _ => Err(ConfigurationError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
