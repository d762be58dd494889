//! The [`Session`] application context.

use std::fmt;

use gridpath_core::{CellState, Coord, Grid, GridError};
use gridpath_search::{CancelCheck, PathResult, SearchEngine, SearchError};

use crate::config::SessionConfig;
use crate::event::{Event, Outcome};
use crate::sink::Sink;

/// Errors surfaced to the front-end. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Grid(GridError),
    Search(SearchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Where the session is between events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// The user is editing; any marks on the grid are from an older run.
    #[default]
    Editing,
    /// The grid shows the result of the last run.
    Showing(PathResult),
}

/// Owns the grid and reacts to editing and control events.
///
/// Replaces the loose "current start / current end / running" globals of a
/// typical visualizer loop with one value the front-end passes around.
/// Runs borrow the session mutably, so two searches can never overlap.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    engine: SearchEngine,
    phase: Phase,
}

impl Session {
    /// Create a session with an empty grid of the configured size.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Self {
            config,
            grid,
            engine: SearchEngine::new(),
            phase: Phase::Editing,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for bulk set-up (e.g. scattering obstacles).
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.phase = Phase::Editing;
        &mut self.grid
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Apply one event. Single-cell edits are reported to `sink.mark`;
    /// runs stream every search step to `sink.mark` and finish with
    /// `sink.redraw`. `cancel` is only consulted during [`Event::Run`].
    pub fn handle<S, C>(
        &mut self,
        event: Event,
        sink: &mut S,
        cancel: &C,
    ) -> Result<Outcome, SessionError>
    where
        S: Sink + ?Sized,
        C: CancelCheck + ?Sized,
    {
        let outcome = self.apply(event, sink, cancel).inspect_err(|e| {
            log::warn!("{event:?} rejected: {e}");
        })?;
        if let Outcome::Edited { coord, state } = outcome {
            self.phase = Phase::Editing;
            sink.mark(coord, state);
        }
        Ok(outcome)
    }

    fn apply<S, C>(
        &mut self,
        event: Event,
        sink: &mut S,
        cancel: &C,
    ) -> Result<Outcome, SessionError>
    where
        S: Sink + ?Sized,
        C: CancelCheck + ?Sized,
    {
        match event {
            Event::Paint(c) => self.paint(c, sink),
            Event::Erase(c) => {
                let prev = self.grid.erase(c)?;
                if prev.is_empty() {
                    return Ok(Outcome::Ignored);
                }
                log::info!("removed {prev} at {c}");
                Ok(edited(c, CellState::Empty))
            }
            Event::ToggleObstacle(c) => {
                let state = self.grid.toggle_obstacle(c)?;
                log::info!("obstacle toggled at {c}: now {state}");
                Ok(edited(c, state))
            }
            Event::SetStart(c) => self.place(c, CellState::Start, sink),
            Event::SetEnd(c) => self.place(c, CellState::End, sink),
            Event::Run => self.run(sink, cancel),
            Event::Reset => {
                let cleared = self.grid.reset_search_states();
                self.phase = Phase::Editing;
                sink.redraw(&self.grid);
                Ok(Outcome::Reset { cleared })
            }
            Event::Clear => {
                self.grid.clear();
                self.phase = Phase::Editing;
                log::info!("grid cleared");
                sink.redraw(&self.grid);
                Ok(Outcome::Cleared)
            }
        }
    }

    fn paint<S: Sink + ?Sized>(
        &mut self,
        c: Coord,
        sink: &mut S,
    ) -> Result<Outcome, SessionError> {
        let current = self.grid.state(c)?;
        if current.is_start() || current.is_end() {
            return Ok(Outcome::Ignored);
        }
        if self.grid.start().is_none() {
            return self.place(c, CellState::Start, sink);
        }
        if self.grid.end().is_none() {
            return self.place(c, CellState::End, sink);
        }
        if current.is_obstacle() {
            return Ok(Outcome::Ignored);
        }
        self.grid.set_state(c, CellState::Obstacle)?;
        log::info!("obstacle at {c}");
        Ok(edited(c, CellState::Obstacle))
    }

    /// Move the start or end marker to `c`. The cell it leaves becomes
    /// empty and is reported to the sink here.
    fn place<S: Sink + ?Sized>(
        &mut self,
        c: Coord,
        state: CellState,
        sink: &mut S,
    ) -> Result<Outcome, SessionError> {
        let previous = if state.is_start() {
            self.grid.start()
        } else {
            self.grid.end()
        };
        self.grid.set_state(c, state)?;
        log::info!("{state} position {c}");
        if let Some(old) = previous.filter(|&old| old != c) {
            sink.mark(old, CellState::Empty);
        }
        Ok(edited(c, state))
    }

    fn run<S, C>(&mut self, sink: &mut S, cancel: &C) -> Result<Outcome, SessionError>
    where
        S: Sink + ?Sized,
        C: CancelCheck + ?Sized,
    {
        self.grid.reset_search_states();
        self.grid.recompute_all_adjacency();
        sink.redraw(&self.grid);

        let result = self
            .engine
            .run_configured(&mut self.grid, |c, s| sink.mark(c, s), cancel)?;

        match &result {
            PathResult::Found(path) => log::info!("path found: {} cells", path.len()),
            PathResult::NotFound => log::info!("no path"),
            PathResult::Cancelled => log::info!("search cancelled"),
        }
        sink.redraw(&self.grid);
        self.phase = Phase::Showing(result.clone());
        Ok(Outcome::Searched(result))
    }
}

fn edited(coord: Coord, state: CellState) -> Outcome {
    Outcome::Edited { coord, state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, Recorder};
    use gridpath_search::{CancelToken, ConfigIssue, Never};

    fn session(rows: i32, cols: i32) -> Session {
        Session::new(SessionConfig::default().with_size(rows, cols)).unwrap()
    }

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = Session::new(SessionConfig::default().with_size(0, 3)).unwrap_err();
        assert_eq!(
            err,
            SessionError::Grid(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn grid_follows_config() {
        let s = session(3, 7);
        assert_eq!(*s.config(), SessionConfig::default().with_size(3, 7));
        assert_eq!((s.grid().rows(), s.grid().cols()), (3, 7));
        assert_eq!(*s.phase(), Phase::Editing);
    }

    #[test]
    fn paint_places_start_then_end_then_obstacles() {
        let mut s = session(4, 4);
        let mut rec = Recorder::new();
        let out = s.handle(Event::Paint(c(0, 0)), &mut rec, &Never).unwrap();
        assert_eq!(out, edited(c(0, 0), CellState::Start));
        s.handle(Event::Paint(c(3, 3)), &mut rec, &Never).unwrap();
        s.handle(Event::Paint(c(1, 1)), &mut rec, &Never).unwrap();

        assert_eq!(s.grid().start(), Some(c(0, 0)));
        assert_eq!(s.grid().end(), Some(c(3, 3)));
        assert_eq!(s.grid().state(c(1, 1)).unwrap(), CellState::Obstacle);
        assert_eq!(
            rec.marks,
            vec![
                (c(0, 0), CellState::Start),
                (c(3, 3), CellState::End),
                (c(1, 1), CellState::Obstacle),
            ]
        );

        // Painting over the start or an existing obstacle does nothing.
        assert_eq!(
            s.handle(Event::Paint(c(0, 0)), &mut rec, &Never).unwrap(),
            Outcome::Ignored
        );
        assert_eq!(
            s.handle(Event::Paint(c(1, 1)), &mut rec, &Never).unwrap(),
            Outcome::Ignored
        );
        assert_eq!(rec.marks.len(), 3);
    }

    #[test]
    fn erasing_start_frees_the_next_paint() {
        let mut s = session(3, 3);
        let mut sink = NullSink;
        s.handle(Event::Paint(c(0, 0)), &mut sink, &Never).unwrap();
        s.handle(Event::Paint(c(2, 2)), &mut sink, &Never).unwrap();
        s.handle(Event::Erase(c(0, 0)), &mut sink, &Never).unwrap();
        assert_eq!(s.grid().start(), None);

        s.handle(Event::Paint(c(1, 0)), &mut sink, &Never).unwrap();
        assert_eq!(s.grid().start(), Some(c(1, 0)));
        assert_eq!(
            s.handle(Event::Erase(c(0, 1)), &mut sink, &Never).unwrap(),
            Outcome::Ignored
        );
    }

    #[test]
    fn start_cannot_be_turned_into_obstacle() {
        let mut s = session(3, 3);
        let mut rec = Recorder::new();
        s.handle(Event::SetStart(c(1, 1)), &mut rec, &Never).unwrap();
        let err = s
            .handle(Event::ToggleObstacle(c(1, 1)), &mut rec, &Never)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Grid(GridError::Occupied {
                coord: c(1, 1),
                state: CellState::Start
            })
        );
        assert_eq!(s.grid().state(c(1, 1)).unwrap(), CellState::Start);
        assert_eq!(rec.marks.len(), 1);
    }

    #[test]
    fn moving_start_reports_vacated_cell() {
        let mut s = session(3, 3);
        let mut rec = Recorder::new();
        s.handle(Event::SetStart(c(0, 0)), &mut rec, &Never).unwrap();
        s.handle(Event::SetStart(c(0, 2)), &mut rec, &Never).unwrap();
        assert_eq!(
            rec.marks,
            vec![
                (c(0, 0), CellState::Start),
                (c(0, 0), CellState::Empty),
                (c(0, 2), CellState::Start),
            ]
        );
    }

    #[test]
    fn run_requires_start_and_end() {
        let mut s = session(3, 3);
        let mut sink = NullSink;
        s.handle(Event::SetStart(c(0, 0)), &mut sink, &Never).unwrap();
        let err = s.handle(Event::Run, &mut sink, &Never).unwrap_err();
        assert_eq!(
            err,
            SessionError::Search(SearchError::InvalidConfiguration(ConfigIssue::MissingEnd))
        );
    }

    #[test]
    fn run_streams_steps_and_shows_result() {
        let mut s = session(5, 5);
        let mut rec = Recorder::new();
        s.handle(Event::SetStart(c(0, 0)), &mut rec, &Never).unwrap();
        s.handle(Event::SetEnd(c(4, 4)), &mut rec, &Never).unwrap();
        rec.marks.clear();

        let out = s.handle(Event::Run, &mut rec, &Never).unwrap();
        let Outcome::Searched(PathResult::Found(path)) = out else {
            panic!("expected a path, got {out:?}");
        };
        assert_eq!(path.len(), 9);
        assert_eq!(rec.redraws, 2);
        assert_eq!(rec.marked(CellState::Path).len(), 7);
        assert!(!rec.marked(CellState::Frontier).is_empty());
        assert!(matches!(s.phase(), Phase::Showing(PathResult::Found(_))));

        // Editing afterwards returns to the editing phase.
        s.handle(Event::ToggleObstacle(c(2, 0)), &mut rec, &Never).unwrap();
        assert_eq!(*s.phase(), Phase::Editing);
    }

    #[test]
    fn rerun_sees_new_obstacles() {
        let mut s = session(3, 3);
        let mut sink = NullSink;
        s.handle(Event::SetStart(c(0, 0)), &mut sink, &Never).unwrap();
        s.handle(Event::SetEnd(c(0, 2)), &mut sink, &Never).unwrap();
        let first = s.handle(Event::Run, &mut sink, &Never).unwrap();
        assert_eq!(
            first,
            Outcome::Searched(PathResult::Found(vec![c(0, 0), c(0, 1), c(0, 2)]))
        );

        s.handle(Event::ToggleObstacle(c(0, 1)), &mut sink, &Never).unwrap();
        let second = s.handle(Event::Run, &mut sink, &Never).unwrap();
        let Outcome::Searched(PathResult::Found(path)) = second else {
            panic!("expected a detour");
        };
        assert_eq!(path.len(), 5);
        assert!(!path.contains(&c(0, 1)));
        // Marks from the first run never survive into the second.
        assert_eq!(s.grid().count(CellState::Path), 3);
    }

    #[test]
    fn reset_and_clear() {
        let mut s = session(4, 4);
        let mut rec = Recorder::new();
        s.handle(Event::SetStart(c(0, 0)), &mut rec, &Never).unwrap();
        s.handle(Event::SetEnd(c(3, 3)), &mut rec, &Never).unwrap();
        s.handle(Event::ToggleObstacle(c(1, 1)), &mut rec, &Never).unwrap();
        s.handle(Event::Run, &mut rec, &Never).unwrap();

        let Outcome::Reset { cleared } = s.handle(Event::Reset, &mut rec, &Never).unwrap() else {
            panic!("expected reset");
        };
        assert!(cleared > 0);
        assert_eq!(s.grid().count(CellState::Obstacle), 1);
        assert_eq!(s.grid().start(), Some(c(0, 0)));

        assert_eq!(
            s.handle(Event::Clear, &mut rec, &Never).unwrap(),
            Outcome::Cleared
        );
        assert_eq!(s.grid().count(CellState::Empty), 16);
        assert_eq!(s.grid().start(), None);
        assert_eq!(*s.phase(), Phase::Editing);
    }

    #[test]
    fn cancelled_run_is_not_an_error() {
        let mut s = session(6, 6);
        let mut sink = NullSink;
        s.handle(Event::SetStart(c(0, 0)), &mut sink, &Never).unwrap();
        s.handle(Event::SetEnd(c(5, 5)), &mut sink, &Never).unwrap();
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            s.handle(Event::Run, &mut sink, &token).unwrap(),
            Outcome::Searched(PathResult::Cancelled)
        );
    }
}
