//! Terminal front-end wiring for the `gridpath` binary: command-line
//! arguments, obstacle seeding and the input loop.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gridpath_app::{Outcome, Session, SessionConfig, scatter_obstacles};
use gridpath_crossterm::{Input, Terminal, TerminalConfig};
use gridpath_search::PathResult;

const POLL: Duration = Duration::from_millis(50);

/// Interactive A* pathfinder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 20)]
    pub rows: i32,

    /// Grid columns (each takes two terminal columns)
    #[arg(long, default_value_t = 40)]
    pub cols: i32,

    /// Fraction of cells to fill with obstacles at start (0.0 to 1.0)
    #[arg(short, long, default_value_t = 0.0)]
    pub walls: f64,

    /// Seed for obstacle placement; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each search step, in milliseconds
    #[arg(long, default_value_t = 5)]
    pub delay_ms: u64,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

/// Run the interactive session until the user quits.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(SessionConfig::default().with_size(args.rows, args.cols))?;
    if args.walls > 0.0 {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let placed = scatter_obstacles(session.grid_mut(), &mut rng, args.walls);
        log::info!("placed {placed} obstacles (seed {seed})");
    }

    let config = TerminalConfig::default()
        .with_step_delay(Duration::from_millis(args.delay_ms))
        .with_mouse(!args.no_mouse);
    let mut term = Terminal::new(config, args.rows, args.cols);
    term.init()?;
    let result = event_loop(&mut session, &mut term);
    term.close();
    result
}

fn event_loop(session: &mut Session, term: &mut Terminal) -> Result<(), Box<dyn Error>> {
    let cancel = term.cancel_token();
    term.draw_grid(session.grid())?;
    term.status(&format!(
        "{}x{} grid, place a start and an end",
        session.grid().rows(),
        session.grid().cols()
    ))?;

    loop {
        let Some(input) = term.poll_input(POLL)? else {
            continue;
        };
        match input {
            Input::Quit => return Ok(()),
            Input::Redraw => term.draw_grid(session.grid())?,
            Input::Move { drow, dcol } => term.move_cursor(session.grid(), drow, dcol)?,
            Input::Event(event) => {
                cancel.reset();
                let status = match session.handle(event, &mut *term, &cancel) {
                    Ok(outcome) => describe(&outcome),
                    Err(e) => Some(e.to_string()),
                };
                if let Some(e) = term.take_error() {
                    return Err(e.into());
                }
                if let Some(text) = status {
                    term.status(&text)?;
                }
            }
        }
    }
}

/// Status line text for an outcome; `None` leaves the line as it is.
pub fn describe(outcome: &Outcome) -> Option<String> {
    let text = match outcome {
        Outcome::Edited { coord, state } => format!("{coord}: {state}"),
        Outcome::Ignored => return None,
        Outcome::Searched(PathResult::Found(path)) => {
            format!("path found: {} cells", path.len())
        }
        Outcome::Searched(PathResult::NotFound) => "no path".to_string(),
        Outcome::Searched(PathResult::Cancelled) => "search cancelled".to_string(),
        Outcome::Reset { cleared } => format!("cleared {cleared} search marks"),
        Outcome::Cleared => "grid cleared".to_string(),
    };
    Some(text)
}
