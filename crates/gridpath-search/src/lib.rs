//! A* shortest-path search over a [`gridpath_core::Grid`].
//!
//! The search runs synchronously inside one call to [`SearchEngine::run`].
//! It reports every visible state change through a step callback so a
//! renderer can animate the expansion, and it checks a [`CancelCheck`] once
//! per expansion so the host can abort a long run.
//!
//! | Item | Role |
//! |---|---|
//! | [`Heuristic`] / [`Manhattan`] | admissible remaining-cost estimate |
//! | [`Frontier`] | open set ordered by `(f_score, insertion sequence)` |
//! | [`SearchEngine`] | the A* loop and path reconstruction |
//! | [`CancelToken`] | shareable cancellation flag |

mod astar;
mod cancel;
mod error;
mod frontier;
mod heuristic;
mod path;

pub use astar::{PathResult, SearchEngine, UNREACHABLE};
pub use cancel::{CancelCheck, CancelToken, Never};
pub use error::{ConfigIssue, SearchError};
pub use frontier::{Frontier, FrontierEntry};
pub use heuristic::{Heuristic, Manhattan, manhattan};
