//! Controller layer for the gridpath pathfinder.
//!
//! A [`Session`] is the application context: it owns the [`Grid`], turns
//! abstract editing [`Event`]s into grid edits, and drives the
//! [`SearchEngine`] when asked to run, forwarding every step to a [`Sink`].
//! Mapping screen positions to cells and drawing pixels are left to the
//! front-end; [`Palette`] is where cell states become colours.
//!
//! [`Grid`]: gridpath_core::Grid
//! [`SearchEngine`]: gridpath_search::SearchEngine

mod config;
mod event;
mod palette;
mod scatter;
mod session;
mod sink;

pub use config::SessionConfig;
pub use event::{Event, Outcome};
pub use palette::{Color, Palette};
pub use scatter::scatter_obstacles;
pub use session::{Phase, Session, SessionError};
pub use sink::{NullSink, Recorder, Sink};
