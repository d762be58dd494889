//! The [`Grid`] type: a dense, fixed-size 2D container of [`Cell`]s.
//!
//! The grid owns every cell and tracks which one (if any) is the start and
//! which is the end. All user-facing state changes go through the grid so
//! that a cell never carries two meanings at once.

use std::ops::Index;

use crate::cell::{Cell, CellId};
use crate::error::GridError;
use crate::geom::Coord;
use crate::state::CellState;

/// A `rows x cols` grid of cells, stored row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Option<CellId>,
    end: Option<CellId>,
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self::build(rows, cols))
    }

    fn build(rows: i32, cols: i32) -> Self {
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(Coord::new(r, c))))
            .collect();
        Self {
            rows,
            cols,
            cells,
            start: None,
            end: None,
        }
    }

    /// Replace every cell with a fresh `Empty` one, keeping the dimensions.
    pub fn clear(&mut self) {
        *self = Self::build(self.rows, self.cols);
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.cols + c.col) as usize)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Resolve a coordinate to its cell handle.
    pub fn id(&self, c: Coord) -> Result<CellId, GridError> {
        self.index(c)
            .map(CellId)
            .ok_or_else(|| self.out_of_bounds(c))
    }

    /// The cell behind a handle.
    ///
    /// # Panics
    ///
    /// If `id` came from a grid with different dimensions.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Bounds-checked lookup by row and column.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell, GridError> {
        let id = self.id(Coord::new(row, col))?;
        Ok(&self.cells[id.0])
    }

    /// State of the cell at `c`.
    pub fn state(&self, c: Coord) -> Result<CellState, GridError> {
        let id = self.id(c)?;
        Ok(self.cells[id.0].state)
    }

    #[inline]
    pub fn start_id(&self) -> Option<CellId> {
        self.start
    }

    #[inline]
    pub fn end_id(&self) -> Option<CellId> {
        self.end
    }

    /// Coordinate of the start cell, if set.
    pub fn start(&self) -> Option<Coord> {
        self.start.map(|id| self.cells[id.0].coord())
    }

    /// Coordinate of the end cell, if set.
    pub fn end(&self) -> Option<Coord> {
        self.end.map(|id| self.cells[id.0].coord())
    }

    // -----------------------------------------------------------------------
    // User edits
    // -----------------------------------------------------------------------

    /// Make `c` the start cell, demoting any previous start to `Empty`.
    ///
    /// Fails with [`GridError::Occupied`] if `c` is the end cell.
    pub fn set_start(&mut self, c: Coord) -> Result<(), GridError> {
        let id = self.id(c)?;
        let current = self.cells[id.0].state;
        if current.is_end() {
            return Err(GridError::Occupied {
                coord: c,
                state: current,
            });
        }
        if let Some(old) = self.start.replace(id) {
            if old != id {
                self.cells[old.0].state = CellState::Empty;
            }
        }
        self.cells[id.0].state = CellState::Start;
        Ok(())
    }

    /// Make `c` the end cell, demoting any previous end to `Empty`.
    ///
    /// Fails with [`GridError::Occupied`] if `c` is the start cell.
    pub fn set_end(&mut self, c: Coord) -> Result<(), GridError> {
        let id = self.id(c)?;
        let current = self.cells[id.0].state;
        if current.is_start() {
            return Err(GridError::Occupied {
                coord: c,
                state: current,
            });
        }
        if let Some(old) = self.end.replace(id) {
            if old != id {
                self.cells[old.0].state = CellState::Empty;
            }
        }
        self.cells[id.0].state = CellState::End;
        Ok(())
    }

    /// Flip `c` between `Obstacle` and `Empty`; search marks become
    /// `Obstacle`. Returns the new state.
    ///
    /// The start and end cells cannot be turned into obstacles; erase them
    /// first.
    pub fn toggle_obstacle(&mut self, c: Coord) -> Result<CellState, GridError> {
        let id = self.id(c)?;
        let cell = &mut self.cells[id.0];
        cell.state = match cell.state {
            s @ (CellState::Start | CellState::End) => {
                return Err(GridError::Occupied { coord: c, state: s });
            }
            CellState::Obstacle => CellState::Empty,
            _ => CellState::Obstacle,
        };
        Ok(cell.state)
    }

    /// Reset `c` to `Empty`, forgetting it as start or end. Returns the
    /// previous state.
    pub fn erase(&mut self, c: Coord) -> Result<CellState, GridError> {
        let id = self.id(c)?;
        if self.start == Some(id) {
            self.start = None;
        }
        if self.end == Some(id) {
            self.end = None;
        }
        let prev = self.cells[id.0].state;
        self.cells[id.0].state = CellState::Empty;
        Ok(prev)
    }

    /// Set the state of `c`, upholding the start/end exclusivity rules.
    ///
    /// Search marks cannot be written over obstacles, the start or the end.
    pub fn set_state(&mut self, c: Coord, state: CellState) -> Result<(), GridError> {
        match state {
            CellState::Start => self.set_start(c),
            CellState::End => self.set_end(c),
            CellState::Empty => self.erase(c).map(|_| ()),
            CellState::Obstacle | CellState::Frontier | CellState::Visited | CellState::Path => {
                let id = self.id(c)?;
                let current = self.cells[id.0].state;
                let blocked = if state.is_obstacle() {
                    current.is_start() || current.is_end()
                } else {
                    current.is_pinned()
                };
                if blocked {
                    return Err(GridError::Occupied {
                        coord: c,
                        state: current,
                    });
                }
                self.cells[id.0].state = state;
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search support
    // -----------------------------------------------------------------------

    /// Write a search mark (or clear one back to `Empty`).
    ///
    /// Pinned cells (obstacle, start, end) are left alone, as are requests
    /// for pinned states. Returns `true` if the state actually changed.
    pub fn mark(&mut self, id: CellId, state: CellState) -> bool {
        if state.is_pinned() {
            return false;
        }
        let cell = &mut self.cells[id.0];
        if cell.state.is_pinned() || cell.state == state {
            return false;
        }
        cell.state = state;
        true
    }

    /// Rebuild the adjacency list of one cell: in-bounds, non-obstacle
    /// orthogonal neighbours in the order down, up, right, left.
    ///
    /// Adjacency is a snapshot; it does not follow later obstacle edits.
    pub fn compute_neighbours(&mut self, id: CellId) {
        let mut buf = std::mem::take(&mut self.cells[id.0].neighbours);
        buf.clear();
        let here = self.cells[id.0].coord();
        for n in here.neighbors_4() {
            if let Some(ni) = self.index(n) {
                if self.cells[ni].state.is_traversable() {
                    buf.push(CellId(ni));
                }
            }
        }
        self.cells[id.0].neighbours = buf;
    }

    /// Rebuild adjacency for every cell. Call before each search run.
    pub fn recompute_all_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            self.compute_neighbours(CellId(i));
        }
    }

    /// Clear `Frontier`, `Visited` and `Path` back to `Empty`. Returns the
    /// number of cells reset.
    pub fn reset_search_states(&mut self) -> usize {
        let mut n = 0;
        for cell in &mut self.cells {
            if cell.state.is_search_mark() {
                cell.state = CellState::Empty;
                n += 1;
            }
        }
        n
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(grid: &Grid, ids: &[CellId]) -> Vec<Coord> {
        ids.iter().map(|&id| grid[id].coord()).collect()
    }

    #[test]
    fn new_grid_is_empty_and_coords_match_positions() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.cell_count(), 12);
        for (i, cell) in g.iter().enumerate() {
            assert_eq!(cell.state(), CellState::Empty);
            assert_eq!(cell.row(), i as i32 / 4);
            assert_eq!(cell.col(), i as i32 % 4);
        }
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn cell_at_is_bounds_checked() {
        let g = Grid::new(2, 3).unwrap();
        assert_eq!(g.cell_at(1, 2).unwrap().coord(), Coord::new(1, 2));
        assert_eq!(
            g.cell_at(2, 0).unwrap_err(),
            GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 3
            }
        );
        assert!(g.cell_at(0, -1).is_err());
        assert!(g.cell_at(0, 3).is_err());
    }

    #[test]
    fn handles_resolve_to_the_same_cell() {
        let g = Grid::new(2, 3).unwrap();
        let id = g.id(Coord::new(1, 1)).unwrap();
        assert_eq!(id.index(), 4);
        assert_eq!(g.cell(id).coord(), Coord::new(1, 1));
        assert_eq!(g.cell(id).coord(), g[id].coord());
    }

    #[test]
    fn start_moves_and_stays_unique() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_start(Coord::new(2, 2)).unwrap();
        assert_eq!(g.start(), Some(Coord::new(2, 2)));
        assert_eq!(g.count(CellState::Start), 1);
        assert_eq!(g.state(Coord::new(0, 0)).unwrap(), CellState::Empty);
    }

    #[test]
    fn start_and_end_are_exclusive() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Coord::new(1, 1)).unwrap();
        let err = g.set_end(Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GridError::Occupied {
                coord: Coord::new(1, 1),
                state: CellState::Start
            }
        );
        g.set_end(Coord::new(0, 1)).unwrap();
        assert!(g.set_start(Coord::new(0, 1)).is_err());
        assert_eq!(g.start(), Some(Coord::new(1, 1)));
        assert_eq!(g.end(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn start_cannot_become_obstacle() {
        let mut g = Grid::new(3, 3).unwrap();
        let c = Coord::new(0, 2);
        g.set_start(c).unwrap();
        assert!(g.toggle_obstacle(c).is_err());
        assert!(g.set_state(c, CellState::Obstacle).is_err());
        assert_eq!(g.state(c).unwrap(), CellState::Start);
        assert_eq!(g.start(), Some(c));

        g.erase(c).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.toggle_obstacle(c).unwrap(), CellState::Obstacle);
        assert_eq!(g.toggle_obstacle(c).unwrap(), CellState::Empty);
    }

    #[test]
    fn start_may_replace_obstacle() {
        let mut g = Grid::new(2, 2).unwrap();
        let c = Coord::new(1, 0);
        g.toggle_obstacle(c).unwrap();
        g.set_state(c, CellState::Start).unwrap();
        assert_eq!(g.state(c).unwrap(), CellState::Start);
        assert_eq!(g.count(CellState::Obstacle), 0);
    }

    #[test]
    fn adjacency_order_and_filtering() {
        let mut g = Grid::new(3, 3).unwrap();
        g.recompute_all_adjacency();
        let centre = g.id(Coord::new(1, 1)).unwrap();
        assert_eq!(
            coords(&g, g[centre].neighbours()),
            vec![
                Coord::new(2, 1),
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 0),
            ]
        );
        let corner = g.id(Coord::new(0, 0)).unwrap();
        assert_eq!(
            coords(&g, g[corner].neighbours()),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );

        g.toggle_obstacle(Coord::new(2, 1)).unwrap();
        // Stale until recomputed.
        assert_eq!(g[centre].neighbours().len(), 4);
        g.recompute_all_adjacency();
        assert_eq!(
            coords(&g, g[centre].neighbours()),
            vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(1, 0)]
        );
        for cell in &g {
            for &n in cell.neighbours() {
                assert!(!g[n].state().is_obstacle());
            }
        }
    }

    #[test]
    fn mark_never_touches_pinned_cells() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.toggle_obstacle(Coord::new(1, 1)).unwrap();
        let start = g.id(Coord::new(0, 0)).unwrap();
        let wall = g.id(Coord::new(1, 1)).unwrap();
        let free = g.id(Coord::new(0, 1)).unwrap();

        assert!(!g.mark(start, CellState::Visited));
        assert!(!g.mark(wall, CellState::Frontier));
        assert!(!g.mark(free, CellState::End));
        assert!(g.mark(free, CellState::Frontier));
        assert!(!g.mark(free, CellState::Frontier));
        assert_eq!(g[free].state(), CellState::Frontier);
    }

    #[test]
    fn reset_clears_only_search_marks() {
        let mut g = Grid::new(2, 3).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(1, 2)).unwrap();
        g.toggle_obstacle(Coord::new(0, 1)).unwrap();
        g.set_state(Coord::new(0, 2), CellState::Visited).unwrap();
        g.set_state(Coord::new(1, 0), CellState::Path).unwrap();
        g.set_state(Coord::new(1, 1), CellState::Frontier).unwrap();

        assert_eq!(g.reset_search_states(), 3);
        assert_eq!(g.count(CellState::Empty), 3);
        assert_eq!(g.count(CellState::Obstacle), 1);
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(1, 2)));
    }

    #[test]
    fn clear_replaces_everything() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.toggle_obstacle(Coord::new(1, 1)).unwrap();
        g.clear();
        assert_eq!(g.count(CellState::Empty), 4);
        assert_eq!(g.start(), None);
        assert_eq!((g.rows(), g.cols()), (2, 2));
    }
}
