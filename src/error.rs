use thiserror::Error;

use crate::pathing_grid::Cell;

/// Reasons a grid or benchmark request is rejected before any search runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("grid dimension must be positive")]
    EmptyGrid,
    #[error("a {n}x{n} grid needs {expected} cells, got {got}")]
    CellCountMismatch {
        n: usize,
        expected: usize,
        got: usize,
    },
    #[error("a {n}x{n} grid is too large to index")]
    TooLarge { n: usize },
    #[error("grid must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },
    #[error("no {0} cell is set")]
    Missing(Cell),
    #[error("{count} {cell} cells are set, expected exactly one")]
    Duplicate { cell: Cell, count: usize },
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i32, col: i32 },
    #[error("unknown algorithm selector '{0}'")]
    UnknownAlgorithm(String),
    #[error("no algorithms selected")]
    NoAlgorithms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_cell() {
        let err = ConfigurationError::Duplicate {
            cell: Cell::Start,
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "2 start cells are set, expected exactly one"
        );
        assert_eq!(
            ConfigurationError::Missing(Cell::Goal).to_string(),
            "no goal cell is set"
        );
    }
}
