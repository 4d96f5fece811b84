use criterion::{criterion_group, criterion_main, Criterion};
use grid_search_bench::{
    solver::{astar::AstarSolver, bfs::BfsSolver, dijkstra::DijkstraSolver, GridSolver},
    PathingGrid,
};
use grid_search_scenarios::*;
use grid_util::point::Point;
use std::hint::black_box;

fn load_grids(name: &str) -> Vec<(PathingGrid, Point, Point)> {
    let (bool_grid, scenarios) = get_benchmark(name.to_owned());
    scenarios
        .into_iter()
        .map(|(start, end, _)| {
            let pathing_grid = PathingGrid::from_walls(bool_grid.clone(), start, end)
                .expect("Scenario does not fit its map");
            (pathing_grid, start, end)
        })
        .collect()
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let bench_set = ["demo/open16", "demo/rooms16", "demo/maze15"];
    for name in bench_set {
        let grids = load_grids(name);
        c.bench_function(format!("{name}, {solver_name}").as_str(), |b| {
            b.iter(|| {
                for (pathing_grid, start, end) in &grids {
                    black_box(solver.search(pathing_grid, *start, *end, None));
                }
            })
        });
    }
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "A*", AstarSolver);
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", DijkstraSolver);
}

fn bench_bfs(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
}

// Exhausting a split map is the worst case for every solver
fn bench_unreachable(c: &mut Criterion) {
    let grids = load_grids("demo/split12");
    let (pathing_grid, start, end) = &grids[0];
    c.bench_function("demo/split12, unreachable A*", |b| {
        b.iter(|| black_box(AstarSolver.search(pathing_grid, *start, *end, None)))
    });
    c.bench_function("demo/split12, unreachable BFS", |b| {
        b.iter(|| black_box(BfsSolver.search(pathing_grid, *start, *end, None)))
    });
}

criterion_group!(
    benches,
    bench_astar,
    bench_dijkstra,
    bench_bfs,
    bench_unreachable
);
criterion_main!(benches);
