use std::fmt;

use crate::geom::Coord;
use crate::state::CellState;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, rows) x [0, cols)`.
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
    /// Grid dimensions must both be positive.
    InvalidDimensions { rows: i32, cols: i32 },
    /// The cell already carries a meaning that the request would erase
    /// (e.g. turning the start cell into an obstacle).
    Occupied { coord: Coord, state: CellState },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "cell {coord} is outside the {rows}x{cols} grid")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::Occupied { coord, state } => {
                write!(f, "cell {coord} is occupied ({state})")
            }
        }
    }
}

impl std::error::Error for GridError {}
