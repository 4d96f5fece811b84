use grid_search_bench::{run_benchmark, BenchmarkConfig, PathingGrid};
use grid_search_scenarios::*;
use std::time::Duration;

fn main() {
    let selector = std::env::args().nth(1).unwrap_or_else(|| "all".to_owned());
    let config = match BenchmarkConfig::from_selector(&selector) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let mut totals = vec![Duration::ZERO; config.algorithms.len()];
    for name in get_benchmark_names() {
        println!("Benchmark name: {}", name);
        let (bool_grid, scenarios) = get_benchmark(name);
        let number_of_scenarios = scenarios.len() as u32;
        let mut elapsed = vec![Duration::ZERO; config.algorithms.len()];
        for (start, goal, _) in scenarios {
            let pathing_grid = match PathingGrid::from_walls(bool_grid.clone(), start, goal) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("\tSkipping scenario: {e}");
                    continue;
                }
            };
            let report = run_benchmark(&pathing_grid, &config).expect("endpoints are set");
            for (total, result) in elapsed.iter_mut().zip(&report.results) {
                *total += result.elapsed;
            }
        }
        for (algorithm, time) in config.algorithms.iter().zip(&elapsed) {
            println!(
                "\t{:<9} elapsed time: {:.2?}; per scenario: {:.2?}",
                algorithm,
                time,
                *time / number_of_scenarios.max(1)
            );
        }
        for (total, time) in totals.iter_mut().zip(elapsed) {
            *total += time;
        }
    }
    for (algorithm, total) in config.algorithms.iter().zip(totals) {
        println!("Total {} benchmark time: {:.2?}", algorithm, total);
    }
}
