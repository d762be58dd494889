//! The per-cell state tag: [`CellState`].

use std::fmt;

/// What a cell currently means. Exactly one variant holds at a time.
///
/// `Obstacle`, `Start` and `End` are set by the user and survive a search
/// reset. `Frontier`, `Visited` and `Path` are written by a search run and
/// are cleared before the next one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    Start,
    End,
    /// Discovered, waiting in the open set.
    Frontier,
    /// Expanded; shortest cost from start is final.
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl CellState {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Self::Obstacle)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    #[inline]
    pub const fn is_frontier(self) -> bool {
        matches!(self, Self::Frontier)
    }

    #[inline]
    pub const fn is_visited(self) -> bool {
        matches!(self, Self::Visited)
    }

    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !self.is_obstacle()
    }

    /// User-placed states that a search never overwrites.
    #[inline]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::Obstacle | Self::Start | Self::End)
    }

    /// States written by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::End => "end",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}
