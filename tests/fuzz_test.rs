/// Fuzzes the solvers by checking on many random grids that a path is found exactly when the goal
/// is on the same connected component as the start, that all solvers agree on its length and
/// that A* never expands more cells than Dijkstra.
use grid_search_bench::{grid_point, run_benchmark, Algorithm, BenchmarkConfig, Cell, PathingGrid};
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut cells = (0..n * n)
        .map(|_| if rng.gen_bool(0.4) { Cell::Wall } else { Cell::Free })
        .collect::<Vec<_>>();
    cells[0] = Cell::Start;
    cells[n * n - 1] = Cell::Goal;
    PathingGrid::from_cells(n, &cells).unwrap()
}

fn is_valid_path(grid: &PathingGrid, path: &[Point]) -> bool {
    path.iter().all(|p| grid.can_move_to(*p))
        && path
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = grid_point(0, 0);
    let end = grid_point(N as i32 - 1, N as i32 - 1);
    let config = BenchmarkConfig::default();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let reachable = grid.reachable(&start, &end);
        let report = run_benchmark(&grid, &config).unwrap();
        // Show the grid if the solvers disagree with the components
        if report.results.iter().any(|r| r.found() != reachable) {
            println!("{}", grid);
        }
        let lengths = report
            .results
            .iter()
            .map(|r| r.path_length())
            .collect::<Vec<_>>();
        for result in &report.results {
            assert_eq!(result.found(), reachable);
            assert_eq!(result.path_length(), lengths[0]);
            assert!(is_valid_path(&grid, &result.path));
            if reachable {
                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&end));
            }
        }
        let astar = report.get(Algorithm::Astar).unwrap();
        let dijkstra = report.get(Algorithm::Dijkstra).unwrap();
        assert!(astar.nodes_expanded() <= dijkstra.nodes_expanded());
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let grid = random_grid(N, &mut rng);
        let (start, goal) = grid.endpoints().unwrap();
        for algorithm in Algorithm::ALL {
            let first = algorithm.solve(&grid, start, goal, None);
            let second = algorithm.solve(&grid, start, goal, None);
            assert_eq!(first, second);
        }
    }
}
