//! **gridpath-core**: grid and cell model for the gridpath pathfinder.
//!
//! This crate provides the data the search operates on: cell coordinates,
//! the explicit per-cell [`CellState`] tag, and a dense [`Grid`] of
//! [`Cell`]s addressed by stable [`CellId`] handles. Rendering and input live
//! elsewhere; this crate never knows about colours or pixels.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod state;

pub use cell::{Cell, CellId};
pub use error::GridError;
pub use geom::Coord;
pub use grid::Grid;
pub use state::CellState;
