use grid_search_bench::{benchmark, Cell, PathingGrid};

// In this example all three solvers are run on a 5x5 grid with shape
//  _____
// |S#   |
// | # # |
// | # # |
// |   #G|
// |#### |
//  _____
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// There is exactly one path, so every solver returns the same one.

fn main() {
    let rows = ["S#...", ".#.#.", ".#.#.", "...#G", "####."];
    let cells = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            '#' => Cell::Wall,
            'S' => Cell::Start,
            'G' => Cell::Goal,
            _ => Cell::Free,
        })
        .collect::<Vec<_>>();
    let report = match benchmark(rows.len(), &cells, "all") {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let grid = PathingGrid::from_cells(rows.len(), &cells).expect("grid was already validated");
    println!("{}", grid);
    println!("{}", report);
    if let Some(result) = report.results.first() {
        println!("{}", grid.render_path(&result.path));
    }
}
