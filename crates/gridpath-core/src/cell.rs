//! The [`Cell`] type and its [`CellId`] handle.

use crate::geom::Coord;
use crate::state::CellState;

/// Stable handle to a cell inside one [`Grid`](crate::Grid).
///
/// Handles are plain row-major indices; they are only meaningful for the
/// grid that produced them and are invalidated when that grid is replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// The row-major index of this cell, usable to key per-cell side tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One addressable grid unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    pub(crate) state: CellState,
    pub(crate) neighbours: Vec<CellId>,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: CellState::Empty,
            neighbours: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coord.col
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Adjacent traversable cells as of the last
    /// [`compute_neighbours`](crate::Grid::compute_neighbours) call.
    #[inline]
    pub fn neighbours(&self) -> &[CellId] {
        &self.neighbours
    }
}
