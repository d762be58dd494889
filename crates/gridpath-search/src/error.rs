use std::fmt;

use gridpath_core::{Coord, GridError};

/// Why a search request is not runnable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingStart,
    MissingEnd,
    /// An endpoint sits on an obstacle.
    BlockedEndpoint(Coord),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell set"),
            Self::MissingEnd => f.write_str("no end cell set"),
            Self::BlockedEndpoint(c) => write!(f, "endpoint {c} is an obstacle"),
        }
    }
}

/// Errors returned by [`SearchEngine`](crate::SearchEngine).
///
/// A search that finds no path, or is cancelled, is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Grid(GridError),
    InvalidConfiguration(ConfigIssue),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::InvalidConfiguration(issue) => write!(f, "cannot search: {issue}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigIssue> for SearchError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}
