use csv::ReaderBuilder;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use grid_util::BoolGrid;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;
use walkdir::WalkDir;

/// One line of a `.map.scen` file. Path lengths count cells including both endpoints and are
/// zero when the goal cannot be reached.
#[allow(unused)]
#[derive(Debug, Deserialize)]
pub struct Scenario {
    id: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    path_length: usize,
}

/// Parses the text map format: a four line header (`type`, `height`, `width`, `map`) followed by
/// one line per row in which `.` is free and every other symbol is a wall.
pub fn parse_map(map_str: &str) -> BoolGrid {
    let lines: Vec<&str> = map_str.lines().collect();
    let parse_line = |line: &str| -> usize {
        line.split_once(' ')
            .expect("Malformed map header")
            .1
            .trim()
            .parse::<usize>()
            .expect("Could not parse value")
    };

    let h = parse_line(lines[1]);
    let w = parse_line(lines[2]);

    let offset = 4;
    let mut bool_grid: BoolGrid = BoolGrid::new(w, h, false);
    for y in 0..h {
        let row = lines[offset + y].as_bytes();
        for x in 0..w {
            bool_grid.set(x as i32, y as i32, row[x] != b'.');
        }
    }
    bool_grid
}

/// Parses the body of a scenario file into (start, goal, path length) triples.
pub fn parse_scenarios(scen_str: &str) -> Vec<(Point, Point, usize)> {
    // Skip the version line
    let remaining_data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    csv_reader
        .deserialize()
        .map(|result| {
            let record: Scenario = result.expect("Could not parse scenario record");
            let start = Point::new(record.x1 as i32, record.y1 as i32);
            let goal = Point::new(record.x2 as i32, record.y2 as i32);
            (start, goal, record.path_length)
        })
        .collect()
}

fn load_benchmark(name: &str) -> (BoolGrid, Vec<(Point, Point, usize)>) {
    let map_str = fs::read_to_string(Path::new(&format!("./maps/{}.map", name)))
        .expect("Could not read map file");

    let file = File::open(Path::new(&format!("./scenarios/{}.map.scen", name)))
        .expect("Could not open scenario file");
    let scen_str = io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .expect("Could not read scenario file")
        .join("\n");

    (parse_map(&map_str), parse_scenarios(&scen_str))
}

/// Names of all maps below `maps/`, such as `demo/maze15`.
pub fn get_benchmark_names() -> Vec<String> {
    let root = Path::new("maps/")
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of map root");
        if entry.file_type().is_file() && rel_path.components().count() >= 2 {
            let rel_str = rel_path.to_str().expect("Map path is not valid UTF-8");
            if let Some((name, _)) = rel_str.split_once('.') {
                names.push(name.replace('\\', "/"));
            }
        }
    }
    names
}

pub fn get_benchmark(name: String) -> (BoolGrid, Vec<(Point, Point, usize)>) {
    let benchmark_names = get_benchmark_names();
    if benchmark_names.contains(&name) {
        load_benchmark(name.as_str())
    } else {
        panic!("Could not load benchmark {name}!");
    }
}
