//! # grid_search_bench
//!
//! Compares [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) on square grids
//! with uniform step costs and 4-directional movement. All three solvers share one search loop
//! and differ only in how their frontier is ordered, so they return paths of equal length and
//! differ in the number of cells they expand and the time this takes.
//!
//! ```
//! use grid_search_bench::{benchmark, Algorithm, Cell};
//!
//! let (f, w, s, g) = (Cell::Free, Cell::Wall, Cell::Start, Cell::Goal);
//! let cells = [
//!     s, f, f,
//!     w, w, f,
//!     g, f, f,
//! ];
//! let report = benchmark(3, &cells, "all").unwrap();
//! for result in &report.results {
//!     assert_eq!(result.path_length(), 7);
//! }
//! println!("{report}");
//! # assert!(report.get(Algorithm::Bfs).is_some());
//! ```
pub mod benchmark;
pub mod error;
pub mod frontier;
pub mod pathing_grid;
pub mod search;
pub mod solver;

pub use benchmark::{
    benchmark, run_benchmark, BenchmarkConfig, BenchmarkReport, BenchmarkResult, ResultRecord,
    Stopwatch,
};
pub use error::ConfigurationError;
pub use pathing_grid::{grid_point, Cell, PathingGrid};
pub use search::{SearchOutcome, SearchStats, Termination};
pub use solver::{Algorithm, GridSolver};
