//! State-to-colour mapping: [`Color`] and [`Palette`].
//!
//! Colours are derived from cell states at the rendering boundary and never
//! read back.

use gridpath_core::CellState;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const PURPLE: Self = Self::from_rgb(128, 0, 128);
    pub const ORANGE: Self = Self::from_rgb(255, 165, 0);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);
    pub const TURQUOISE: Self = Self::from_rgb(64, 224, 208);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One colour per [`CellState`], plus the cursor highlight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub empty: Color,
    pub obstacle: Color,
    pub start: Color,
    pub end: Color,
    pub frontier: Color,
    pub visited: Color,
    pub path: Color,
    pub cursor: Color,
}

impl Palette {
    /// Colour used to paint a cell in `state`.
    pub fn color(&self, state: CellState) -> Color {
        match state {
            CellState::Empty => self.empty,
            CellState::Obstacle => self.obstacle,
            CellState::Start => self.start,
            CellState::End => self.end,
            CellState::Frontier => self.frontier,
            CellState::Visited => self.visited,
            CellState::Path => self.path,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Color::WHITE,
            obstacle: Color::BLACK,
            start: Color::ORANGE,
            end: Color::PURPLE,
            frontier: Color::GREEN,
            visited: Color::RED,
            path: Color::TURQUOISE,
            cursor: Color::GREY,
        }
    }
}
