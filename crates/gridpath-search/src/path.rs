use gridpath_core::{CellId, CellState, Coord, Grid};

/// Walk `came_from` back from `end` to `start`, painting every cell in
/// between as [`CellState::Path`] and reporting each one through
/// `on_step`, in end-to-start order. Returns the path in start-to-end order,
/// both endpoints included.
///
/// `came_from` is a tree rooted at `start` (the start cell never gets a
/// predecessor), so the walk terminates.
pub(crate) fn draw_path<F>(
    grid: &mut Grid,
    came_from: &[Option<CellId>],
    start: CellId,
    end: CellId,
    on_step: &mut F,
) -> Vec<Coord>
where
    F: FnMut(Coord, CellState),
{
    let mut path = vec![grid[end].coord()];
    let mut current = end;
    while let Some(prev) = came_from[current.index()] {
        current = prev;
        let coord = grid[current].coord();
        path.push(coord);
        if current != start && grid.mark(current, CellState::Path) {
            on_step(coord, CellState::Path);
        }
    }
    debug_assert_eq!(current, start, "predecessor chain must end at start");
    path.reverse();
    path
}
