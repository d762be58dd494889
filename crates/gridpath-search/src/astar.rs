use gridpath_core::{CellId, CellState, Coord, Grid};

use crate::cancel::CancelCheck;
use crate::error::{ConfigIssue, SearchError};
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, Manhattan};
use crate::path::draw_path;

/// Sentinel score meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

/// Outcome of a search run. None of these is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// Shortest path from start to end, both included.
    Found(Vec<Coord>),
    /// The end cannot be reached from the start.
    NotFound,
    /// The cancel check fired before the search finished.
    Cancelled,
}

impl PathResult {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Bookkeeping for one run, indexed by [`CellId::index`]. Dropped when the
/// run ends.
#[derive(Debug)]
pub(crate) struct SearchState {
    g_score: Vec<u32>,
    f_score: Vec<u32>,
    came_from: Vec<Option<CellId>>,
    frontier: Frontier,
    in_frontier: Vec<bool>,
    expanded: usize,
}

impl SearchState {
    /// Every score starts at [`UNREACHABLE`].
    fn new(cells: usize) -> Self {
        Self {
            g_score: vec![UNREACHABLE; cells],
            f_score: vec![UNREACHABLE; cells],
            came_from: vec![None; cells],
            frontier: Frontier::new(),
            in_frontier: vec![false; cells],
            expanded: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// A* over a [`Grid`] with unit step cost.
///
/// The engine holds no state between runs; each [`run`](Self::run) gets its
/// grid, endpoints, step callback and cancel check as parameters.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine<H = Manhattan> {
    heuristic: H,
}

impl SearchEngine<Manhattan> {
    /// An engine using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> SearchEngine<H> {
    /// An engine using a custom heuristic. It must be admissible for the
    /// returned paths to be shortest.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Search between the grid's own start and end cells.
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] if either is unset.
    pub fn run_configured<F, C>(
        &self,
        grid: &mut Grid,
        on_step: F,
        cancel: &C,
    ) -> Result<PathResult, SearchError>
    where
        F: FnMut(Coord, CellState),
        C: CancelCheck + ?Sized,
    {
        let start = grid.start().ok_or(ConfigIssue::MissingStart)?;
        let end = grid.end().ok_or(ConfigIssue::MissingEnd)?;
        self.run(grid, start, end, on_step, cancel)
    }

    /// Find a shortest path from `start` to `end`.
    ///
    /// Uses the adjacency lists as they are; call
    /// [`Grid::recompute_all_adjacency`] after editing obstacles. Cells
    /// discovered are painted `Frontier`, expanded cells `Visited`, and the
    /// final path's interior `Path`; every change is reported to `on_step`
    /// as it happens. `cancel` is polled once per expansion.
    pub fn run<F, C>(
        &self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        mut on_step: F,
        cancel: &C,
    ) -> Result<PathResult, SearchError>
    where
        F: FnMut(Coord, CellState),
        C: CancelCheck + ?Sized,
    {
        let start_id = grid.id(start)?;
        let end_id = grid.id(end)?;
        for (c, id) in [(start, start_id), (end, end_id)] {
            if grid[id].state().is_obstacle() {
                return Err(ConfigIssue::BlockedEndpoint(c).into());
            }
        }

        let mut state = SearchState::new(grid.cell_count());
        let result = self.search(grid, &mut state, start_id, end_id, &mut on_step, cancel);

        match &result {
            PathResult::Found(path) => log::debug!(
                "astar {start} -> {end}: path of {} cells, {} expanded",
                path.len(),
                state.expanded
            ),
            PathResult::NotFound => log::debug!(
                "astar {start} -> {end}: no path, {} expanded",
                state.expanded
            ),
            PathResult::Cancelled => log::debug!(
                "astar {start} -> {end}: cancelled after {} expansions",
                state.expanded
            ),
        }
        Ok(result)
    }

    fn search<F, C>(
        &self,
        grid: &mut Grid,
        state: &mut SearchState,
        start: CellId,
        end: CellId,
        on_step: &mut F,
        cancel: &C,
    ) -> PathResult
    where
        F: FnMut(Coord, CellState),
        C: CancelCheck + ?Sized,
    {
        let goal = grid[end].coord();

        let si = start.index();
        state.g_score[si] = 0;
        state.f_score[si] = self.heuristic.estimate(grid[start].coord(), goal);
        state.frontier.push(start, state.f_score[si]);
        state.in_frontier[si] = true;

        let mut nbuf: Vec<CellId> = Vec::with_capacity(4);

        while !state.frontier.is_empty() {
            if cancel.is_cancelled() {
                return PathResult::Cancelled;
            }
            let Some(entry) = state.frontier.pop() else {
                break;
            };

            let current = entry.id;
            let ci = current.index();
            state.in_frontier[ci] = false;

            if current == end {
                let path = draw_path(grid, &state.came_from, start, end, on_step);
                return PathResult::Found(path);
            }

            state.expanded += 1;
            let current_g = state.g_score[ci];
            log::trace!(
                "expand {} g={} f={} seq={}",
                grid[current].coord(),
                current_g,
                entry.f,
                entry.seq
            );

            nbuf.clear();
            nbuf.extend_from_slice(grid[current].neighbours());

            for &n in nbuf.iter() {
                let ni = n.index();
                let tentative_g = current_g + 1;
                if tentative_g >= state.g_score[ni] {
                    continue;
                }

                let np = grid[n].coord();
                state.came_from[ni] = Some(current);
                state.g_score[ni] = tentative_g;
                state.f_score[ni] = tentative_g + self.heuristic.estimate(np, goal);

                // A member keeps its queued priority; only newcomers are
                // pushed, so each cell has at most one live entry.
                if !state.in_frontier[ni] {
                    state.frontier.push(n, state.f_score[ni]);
                    state.in_frontier[ni] = true;
                    if grid.mark(n, CellState::Frontier) {
                        on_step(np, CellState::Frontier);
                    }
                }
            }

            if current != start && grid.mark(current, CellState::Visited) {
                on_step(grid[current].coord(), CellState::Visited);
            }
        }
        PathResult::NotFound
    }
}
