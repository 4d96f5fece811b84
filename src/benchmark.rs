//! Runs a selection of solvers one after another against the same grid and times the search
//! phase of each run.
use crate::error::ConfigurationError;
use crate::pathing_grid::{Cell, PathingGrid};
use crate::search::{SearchOutcome, SearchStats, Termination};
use crate::solver::Algorithm;
use core::fmt;
use grid_util::point::Point;
use log::info;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Explicit timer handed to each run. Time accumulates across start/stop pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    pub fn new() -> Stopwatch {
        Stopwatch::default()
    }
    pub fn start(&mut self) {
        self.started.get_or_insert_with(Instant::now);
    }
    /// Stops the watch and returns the total time measured so far.
    pub fn stop(&mut self) -> Duration {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
        self.elapsed
    }
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
    /// Total measured time, including the current lap when running.
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.started.map_or(Duration::ZERO, |s| s.elapsed())
    }
    /// Times a closure.
    pub fn time<R, F: FnOnce() -> R>(&mut self, f: F) -> R {
        self.start();
        let result = f();
        self.stop();
        result
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Maximum number of frontier pops per run, unbounded when [None].
    pub iteration_cap: Option<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> BenchmarkConfig {
        BenchmarkConfig {
            algorithms: Algorithm::ALL.to_vec(),
            iteration_cap: None,
        }
    }
}

impl BenchmarkConfig {
    /// Selects the algorithms with a selector string, see [Algorithm::parse_selection].
    pub fn from_selector(selector: &str) -> Result<BenchmarkConfig, ConfigurationError> {
        Ok(BenchmarkConfig::default().with_algorithms(Algorithm::parse_selection(selector)?))
    }
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> BenchmarkConfig {
        self.algorithms = algorithms;
        self
    }
    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> BenchmarkConfig {
        self.iteration_cap = Some(iteration_cap);
        self
    }
}

/// Outcome of one timed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub termination: Termination,
    /// Start to goal inclusive, empty when the goal was not reached.
    pub path: Vec<Point>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Serializable form of a [BenchmarkResult] with the path as (row, column) pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub algorithm_name: Algorithm,
    pub path: Vec<(i32, i32)>,
    pub path_length: usize,
    pub elapsed_microseconds: u64,
    pub nodes_expanded: usize,
    pub termination: Termination,
}

impl BenchmarkResult {
    fn new(algorithm: Algorithm, outcome: SearchOutcome, elapsed: Duration) -> BenchmarkResult {
        BenchmarkResult {
            algorithm,
            termination: outcome.termination,
            path: outcome.path,
            stats: outcome.stats,
            elapsed,
        }
    }
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
    pub fn nodes_expanded(&self) -> usize {
        self.stats.expanded
    }
    pub fn found(&self) -> bool {
        self.termination.is_success()
    }
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
    /// The path as row-major indices `row * n + col`.
    pub fn linear_path(&self, n: usize) -> Vec<usize> {
        self.path
            .iter()
            .map(|p| p.y as usize * n + p.x as usize)
            .collect()
    }
    pub fn record(&self) -> ResultRecord {
        ResultRecord {
            algorithm_name: self.algorithm,
            path: self.path.iter().map(|p| (p.y, p.x)).collect(),
            path_length: self.path_length(),
            elapsed_microseconds: self.elapsed_micros(),
            nodes_expanded: self.nodes_expanded(),
            termination: self.termination,
        }
    }
}

/// Results of a benchmark call, one per algorithm in the requested order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    pub fn get(&self, algorithm: Algorithm) -> Option<&BenchmarkResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
    /// The successful run with the smallest elapsed time.
    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.found())
            .min_by_key(|r| r.elapsed)
    }
    pub fn records(&self) -> Vec<ResultRecord> {
        self.results.iter().map(BenchmarkResult::record).collect()
    }
    pub fn len(&self) -> usize {
        self.results.len()
    }
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>8} {:>9} {:>14}  outcome",
            "algorithm", "length", "expanded", "elapsed"
        )?;
        for r in &self.results {
            writeln!(
                f,
                "{:<10} {:>8} {:>9} {:>14}  {}",
                r.algorithm.name(),
                r.path_length(),
                r.nodes_expanded(),
                format_duration(r.elapsed),
                r.termination
            )?;
        }
        Ok(())
    }
}

/// Formats a duration with three decimals in µs, ms or s.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 1e-3 {
        format!("{:.3} µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.3} ms", seconds * 1e3)
    } else {
        format!("{:.3} s", seconds)
    }
}

/// Runs one algorithm with the given stopwatch around the search only. The result holds the time
/// of this run alone, so a stopwatch may be shared between runs to accumulate a total.
pub fn run_single(
    algorithm: Algorithm,
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    iteration_cap: Option<usize>,
    stopwatch: &mut Stopwatch,
) -> BenchmarkResult {
    let before = stopwatch.elapsed();
    let outcome = stopwatch.time(|| algorithm.solve(grid, start, goal, iteration_cap));
    let lap = stopwatch.elapsed().saturating_sub(before);
    let result = BenchmarkResult::new(algorithm, outcome, lap);
    info!(
        "{}: path length {}, {} cells expanded, {} ({})",
        algorithm,
        result.path_length(),
        result.nodes_expanded(),
        format_duration(result.elapsed),
        result.termination
    );
    result
}

/// Runs every configured algorithm against `grid`. The grid's start and goal are validated before
/// anything runs; each run gets its own stopwatch, node arena and closed set.
pub fn run_benchmark(
    grid: &PathingGrid,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, ConfigurationError> {
    let (start, goal) = grid.endpoints()?;
    if config.algorithms.is_empty() {
        return Err(ConfigurationError::NoAlgorithms);
    }
    let results = config
        .algorithms
        .iter()
        .map(|&algorithm| {
            let mut stopwatch = Stopwatch::new();
            run_single(
                algorithm,
                grid,
                start,
                goal,
                config.iteration_cap,
                &mut stopwatch,
            )
        })
        .collect();
    Ok(BenchmarkReport { results })
}

/// Benchmarks the algorithms named by `selector` on an `n` by `n` grid given as row-major cells.
/// Configuration problems are reported before any search runs.
pub fn benchmark(
    n: usize,
    cells: &[Cell],
    selector: &str,
) -> Result<BenchmarkReport, ConfigurationError> {
    let config = BenchmarkConfig::from_selector(selector)?;
    let grid = PathingGrid::from_cells(n, cells)?;
    run_benchmark(&grid, &config)
}
