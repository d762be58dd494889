//! Crossterm terminal front-end for gridpath.
//!
//! [`Terminal`] implements [`gridpath_app::Sink`], drawing every grid cell as
//! two terminal columns so cells come out roughly square. Keyboard and mouse
//! events are translated into [`Input`]s; while a search is animating, the
//! sink itself watches for `q`/`Esc` and trips its [`CancelToken`].

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_app::{Color, Event, Palette, Sink};
use gridpath_core::{CellState, Coord, Grid};
use gridpath_search::CancelToken;

/// Key help printed under the status line.
pub const HELP: &str = "click: start/end/wall  right-click: erase  arrows/hjkl: move  \
                        s/e: start/end  w: wall  del: erase  enter: run  r: reset  c: clear  q: quit";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Terminal front-end settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Pause after each search step is drawn, so the run is watchable.
    pub step_delay: Duration,
    /// Whether mouse events are captured.
    pub mouse: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(5),
            mouse: true,
        }
    }
}

impl TerminalConfig {
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }
}

// ---------------------------------------------------------------------------
// Input mapping
// ---------------------------------------------------------------------------

/// A decoded terminal event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Forward to the session.
    Event(Event),
    /// Move the keyboard cursor by one step.
    Move { drow: i32, dcol: i32 },
    /// Repaint everything (terminal resized, or Ctrl-L).
    Redraw,
    Quit,
}

/// Maps a crossterm [`Color`](CtColor) from a palette [`Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Maps a key press to an [`Input`]. Cell edits apply at `cursor`.
pub fn map_key(key: KeyEvent, cursor: Coord) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            KeyCode::Char('l') => Some(Input::Redraw),
            _ => None,
        };
    }
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Input::Move { drow: -1, dcol: 0 },
        KeyCode::Down | KeyCode::Char('j') => Input::Move { drow: 1, dcol: 0 },
        KeyCode::Left | KeyCode::Char('h') => Input::Move { drow: 0, dcol: -1 },
        KeyCode::Right | KeyCode::Char('l') => Input::Move { drow: 0, dcol: 1 },
        KeyCode::Char('s') => Input::Event(Event::SetStart(cursor)),
        KeyCode::Char('e') => Input::Event(Event::SetEnd(cursor)),
        KeyCode::Char('w') | KeyCode::Char('x') => Input::Event(Event::ToggleObstacle(cursor)),
        KeyCode::Backspace | KeyCode::Delete => Input::Event(Event::Erase(cursor)),
        KeyCode::Enter | KeyCode::Char(' ') => Input::Event(Event::Run),
        KeyCode::Char('r') => Input::Event(Event::Reset),
        KeyCode::Char('c') => Input::Event(Event::Clear),
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

/// Maps a mouse press or drag inside a `rows` x `cols` grid to a paint or
/// erase of the cell under the pointer. Each cell spans two columns.
pub fn map_mouse(ev: MouseEvent, rows: i32, cols: i32) -> Option<Input> {
    let coord = Coord::new(i32::from(ev.row), i32::from(ev.column) / 2);
    if coord.row >= rows || coord.col >= cols {
        return None;
    }
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Input::Event(Event::Paint(coord)))
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(Input::Event(Event::Erase(coord)))
        }
        _ => None,
    }
}

/// Whether a key press asks a running search to stop.
fn is_stop_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// A terminal screen showing one grid, a keyboard cursor and a status line.
///
/// Call [`init`](Self::init) before drawing and [`close`](Self::close) before
/// exiting; `close` is also run on drop. Drawing goes to `W`, normally
/// stdout; input is always read from the process terminal.
pub struct Terminal<W: Write = Stdout> {
    config: TerminalConfig,
    palette: Palette,
    rows: i32,
    cols: i32,
    cursor: Coord,
    cancel: CancelToken,
    out: W,
    active: bool,
    error: Option<io::Error>,
}

impl Terminal {
    /// A terminal front-end for a `rows` x `cols` grid, drawing to stdout.
    pub fn new(config: TerminalConfig, rows: i32, cols: i32) -> Self {
        Self::with_writer(config, rows, cols, io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_writer(config: TerminalConfig, rows: i32, cols: i32, out: W) -> Self {
        Self {
            config,
            palette: Palette::default(),
            rows,
            cols,
            cursor: Coord::ZERO,
            cancel: CancelToken::new(),
            out,
            active: false,
            error: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Everything drawn so far, for writers that keep it.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// The token tripped by `q`/`Esc` during a run. Pass it to
    /// [`Session::handle`](gridpath_app::Session::handle) and reset it
    /// before each event.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Switch to raw mode on the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.config.mouse {
            execute!(self.out, event::EnableMouseCapture)?;
        }
        let (width, height) = terminal::size()?;
        if i32::from(width) < self.cols * 2 || i32::from(height) < self.rows + 2 {
            log::warn!(
                "terminal is {width}x{height}, grid needs {}x{}",
                self.cols * 2,
                self.rows + 2
            );
        }
        Ok(())
    }

    /// Restore the terminal. Errors are ignored: there is nowhere left to
    /// report them.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if self.config.mouse {
            let _ = execute!(self.out, event::DisableMouseCapture);
        }
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Wait up to `timeout` for the next meaningful input.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = match event::read()? {
            CtEvent::Key(key) => map_key(key, self.cursor),
            CtEvent::Mouse(me) if self.config.mouse => map_mouse(me, self.rows, self.cols),
            CtEvent::Resize(..) => Some(Input::Redraw),
            _ => None,
        };
        Ok(input)
    }

    /// Move the cursor, clamped to the grid, and repaint the two cells
    /// involved.
    pub fn move_cursor(&mut self, grid: &Grid, drow: i32, dcol: i32) -> io::Result<()> {
        let old = self.cursor;
        let moved = old.shift(drow, dcol);
        self.cursor = Coord::new(
            moved.row.clamp(0, self.rows - 1),
            moved.col.clamp(0, self.cols - 1),
        );
        if old == self.cursor {
            return Ok(());
        }
        if let Ok(state) = grid.state(old) {
            self.queue_cell(old, state)?;
        }
        if let Ok(state) = grid.state(self.cursor) {
            self.queue_cell(self.cursor, state)?;
        }
        self.out.flush()
    }

    /// Clear the screen, then repaint every cell plus the help line. The
    /// clear wipes whatever a resize left outside the grid.
    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, ResetColor, terminal::Clear(ClearType::All))?;
        for cell in grid {
            self.queue_cell(cell.coord(), cell.state())?;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, to_u16(self.rows + 1)),
            terminal::Clear(ClearType::UntilNewLine),
            Print(HELP)
        )?;
        self.out.flush()
    }

    /// Replace the status line under the grid.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, to_u16(self.rows)),
            ResetColor,
            terminal::Clear(ClearType::UntilNewLine),
            Print(text)
        )?;
        self.out.flush()
    }

    /// The first terminal error hit inside a [`Sink`] callback, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn queue_cell(&mut self, c: Coord, state: CellState) -> io::Result<()> {
        let glyph = if c == self.cursor { "[]" } else { "  " };
        queue!(
            self.out,
            cursor::MoveTo(to_u16(c.col * 2), to_u16(c.row)),
            SetBackgroundColor(to_ct_color(self.palette.color(state))),
            SetForegroundColor(to_ct_color(self.palette.cursor)),
            Print(glyph),
            ResetColor
        )
    }

    /// Drain pending input while a search runs; stop keys trip the cancel
    /// token and everything else is dropped.
    fn watch_for_stop(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let CtEvent::Key(key) = event::read()? {
                if is_stop_key(&key) {
                    log::debug!("stop requested");
                    self.cancel.cancel();
                }
            }
        }
        Ok(())
    }

    fn stash(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("terminal write failed: {e}");
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> Sink for Terminal<W> {
    fn mark(&mut self, coord: Coord, state: CellState) {
        let drawn = self
            .queue_cell(coord, state)
            .and_then(|()| self.out.flush());
        self.stash(drawn);
        if !state.is_search_mark() {
            return;
        }
        if !self.config.step_delay.is_zero() {
            thread::sleep(self.config.step_delay);
        }
        let watched = self.watch_for_stop();
        self.stash(watched);
    }

    fn redraw(&mut self, grid: &Grid) {
        let drawn = self.draw_grid(grid);
        self.stash(drawn);
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        self.close();
    }
}

fn to_u16(v: i32) -> u16 {
    v.clamp(0, i32::from(u16::MAX)) as u16
}
