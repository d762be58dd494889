//! Abstract controller input and the result of handling it.

use gridpath_core::{CellState, Coord};
use gridpath_search::PathResult;

/// An editing or control request, already resolved to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Primary click: the first free click places the start, the next the
    /// end, and every later one an obstacle. Clicks on the start or end do
    /// nothing.
    Paint(Coord),
    /// Secondary click: back to empty, forgetting start/end.
    Erase(Coord),
    ToggleObstacle(Coord),
    SetStart(Coord),
    SetEnd(Coord),
    /// Search from start to end.
    Run,
    /// Clear search marks, keep obstacles, start and end.
    Reset,
    /// Replace the grid with an empty one.
    Clear,
}

/// What handling an [`Event`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// One cell changed to `state`.
    Edited { coord: Coord, state: CellState },
    /// The event had no effect.
    Ignored,
    Searched(PathResult),
    /// Search marks were cleared from this many cells.
    Reset { cleared: usize },
    Cleared,
}
