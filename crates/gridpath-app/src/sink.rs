use gridpath_core::{CellState, Coord, Grid};

/// Receiver of rendering requests.
///
/// `mark` is called synchronously for every single-cell change, including
/// each step of a running search, so an implementation can animate
/// incrementally. `redraw` asks for a full repaint from the grid.
pub trait Sink {
    fn mark(&mut self, coord: Coord, state: CellState);
    fn redraw(&mut self, grid: &Grid);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn mark(&mut self, coord: Coord, state: CellState) {
        (**self).mark(coord, state);
    }

    fn redraw(&mut self, grid: &Grid) {
        (**self).redraw(grid);
    }
}

/// A sink that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn mark(&mut self, _coord: Coord, _state: CellState) {}
    fn redraw(&mut self, _grid: &Grid) {}
}

/// A sink that remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub marks: Vec<(Coord, CellState)>,
    pub redraws: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks of one state, in call order.
    pub fn marked(&self, state: CellState) -> Vec<Coord> {
        self.marks
            .iter()
            .filter(|(_, s)| *s == state)
            .map(|(c, _)| *c)
            .collect()
    }
}

impl Sink for Recorder {
    fn mark(&mut self, coord: Coord, state: CellState) {
        self.marks.push((coord, state));
    }

    fn redraw(&mut self, _grid: &Grid) {
        self.redraws += 1;
    }
}
