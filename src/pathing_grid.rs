use crate::error::ConfigurationError;
use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use serde::Serialize;
use smallvec::SmallVec;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Row and column offsets in expansion order: down, up, right, left.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Builds the [Point] for a (row, column) coordinate. Columns run along `x` and rows along `y`,
/// matching the layout of [BoolGrid].
pub fn grid_point(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Free,
    Wall,
    Start,
    Goal,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }
    pub fn symbol(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Cell::Free => "free",
            Cell::Wall => "wall",
            Cell::Start => "start",
            Cell::Goal => "goal",
        };
        f.pad(name)
    }
}

/// [PathingGrid] stores walls as a [BoolGrid] in which blocked cells are [true], together with
/// the cells marked as start and goal. Connected components of passable cells are kept in a
/// [UnionFind] so reachability can be checked without searching.
///
/// The grid is only read during a search, so a single instance can be shared by any number of
/// runs.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    grid: BoolGrid,
    starts: FxIndexSet<Point>,
    goals: FxIndexSet<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates an `n` by `n` grid of free cells without start or goal. `n` must have passed
    /// [cell_count].
    fn new(n: usize) -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::new(n, n, false),
            starts: FxIndexSet::default(),
            goals: FxIndexSet::default(),
            components: UnionFind::new(n * n),
            components_dirty: true,
        }
    }

    /// Builds a grid from a row-major cell array of length `n * n` and checks that exactly one
    /// start and one goal are present.
    pub fn from_cells(n: usize, cells: &[Cell]) -> Result<PathingGrid, ConfigurationError> {
        let expected = cell_count(n)?;
        if cells.len() != expected {
            return Err(ConfigurationError::CellCountMismatch {
                n,
                expected,
                got: cells.len(),
            });
        }
        let mut pathing_grid = PathingGrid::new(n);
        for (ix, &cell) in cells.iter().enumerate() {
            pathing_grid.set_cell(grid_point((ix / n) as i32, (ix % n) as i32), cell)?;
        }
        pathing_grid.endpoints()?;
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    /// Builds a grid from a square wall layout and explicit endpoints. Unlike
    /// [from_cells](Self::from_cells) this allows start and goal to coincide. Walls under the
    /// start or goal are removed, so both endpoints are always passable.
    pub fn from_walls(
        walls: BoolGrid,
        start: Point,
        goal: Point,
    ) -> Result<PathingGrid, ConfigurationError> {
        let (width, height) = (walls.width(), walls.height());
        if width != height {
            return Err(ConfigurationError::NotSquare { width, height });
        }
        let count = cell_count(width)?;
        let mut pathing_grid = PathingGrid {
            grid: walls,
            starts: FxIndexSet::default(),
            goals: FxIndexSet::default(),
            components: UnionFind::new(count),
            components_dirty: true,
        };
        for p in [start, goal] {
            pathing_grid.check_bounds(&p)?;
            pathing_grid.grid.set(p.x, p.y, false);
        }
        pathing_grid.starts.insert(start);
        pathing_grid.goals.insert(goal);
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    fn check_bounds(&self, point: &Point) -> Result<(), ConfigurationError> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(ConfigurationError::OutOfBounds {
                row: point.y,
                col: point.x,
            })
        }
    }

    /// Classifies a cell, returning [None] outside the grid. A cell that is both start and goal
    /// classifies as [Cell::Start].
    pub fn classify(&self, point: &Point) -> Option<Cell> {
        if !self.in_bounds(point) {
            None
        } else if self.grid.get(point.x, point.y) {
            Some(Cell::Wall)
        } else if self.starts.contains(point) {
            Some(Cell::Start)
        } else if self.goals.contains(point) {
            Some(Cell::Goal)
        } else {
            Some(Cell::Free)
        }
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// placing a wall (potentially) breaks a component apart.
    pub fn set_cell(&mut self, point: Point, cell: Cell) -> Result<(), ConfigurationError> {
        self.check_bounds(&point)?;
        let was_wall = self.grid.get(point.x, point.y);
        self.starts.shift_remove(&point);
        self.goals.shift_remove(&point);
        match cell {
            Cell::Start => {
                self.starts.insert(point);
            }
            Cell::Goal => {
                self.goals.insert(point);
            }
            Cell::Free | Cell::Wall => {}
        }
        let blocked = !cell.is_passable();
        self.grid.set(point.x, point.y, blocked);
        if blocked && !was_wall {
            self.components_dirty = true;
        } else if !blocked && was_wall && !self.components_dirty {
            let p_ix = self.get_ix_point(&point);
            for n in self.neighbours(&point) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        }
        Ok(())
    }

    /// Whether a search may step onto `pos`.
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(&pos) && !self.grid.get(pos.x, pos.y)
    }

    /// The passable 4-neighbours of `point` in the fixed order down, up, right, left.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| Point::new(point.x + d_col, point.y + d_row))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// The unique start cell.
    pub fn find_start(&self) -> Result<Point, ConfigurationError> {
        single_marker(&self.starts, Cell::Start)
    }

    /// The unique goal cell.
    pub fn find_goal(&self) -> Result<Point, ConfigurationError> {
        single_marker(&self.goals, Cell::Goal)
    }

    pub fn endpoints(&self) -> Result<(Point, Point), ConfigurationError> {
        Ok((self.find_start()?, self.find_goal()?))
    }

    /// Row-major linear index of an in-bounds point.
    pub fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are passable and on the same component. Components must be up to
    /// date, see [update](Self::update).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        debug_assert!(!self.components_dirty, "components are out of date");
        self.can_move_to(*start)
            && self.can_move_to(*goal)
            && self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours into components.
    pub fn generate_components(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..h as i32, 0..w as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            // Linking downwards and to the right covers every edge once
            for n in [Point::new(x, y + 1), Point::new(x + 1, y)] {
                if self.can_move_to(n) {
                    let n_ix = self.get_ix_point(&n);
                    self.components.union(parent_ix, n_ix);
                }
            }
        }
    }

    /// Renders the grid with the intermediate cells of `path` marked by `*`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let inner = path.get(1..path.len().saturating_sub(1)).unwrap_or(&[]);
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let p = Point::new(x, y);
                match self.classify(&p) {
                    Some(Cell::Free) if inner.contains(&p) => out.push('*'),
                    Some(cell) => out.push(cell.symbol()),
                    None => {}
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Number of cells in an `n` by `n` grid. Coordinates are stored as [i32], so larger sides are
/// rejected along with an empty grid.
fn cell_count(n: usize) -> Result<usize, ConfigurationError> {
    if n == 0 {
        return Err(ConfigurationError::EmptyGrid);
    }
    if n > i32::MAX as usize {
        return Err(ConfigurationError::TooLarge { n });
    }
    n.checked_mul(n).ok_or(ConfigurationError::TooLarge { n })
}

fn single_marker(markers: &FxIndexSet<Point>, cell: Cell) -> Result<Point, ConfigurationError> {
    match markers.len() {
        0 => Err(ConfigurationError::Missing(cell)),
        1 => Ok(markers[0]),
        count => Err(ConfigurationError::Duplicate { cell, count }),
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}
