use crate::core::colour::palette::native::NativeColour;

/// Foreground coverage drawn over a cell's background.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Blank,
    /// Roughly one third foreground.
    Partial,
    /// Roughly two thirds foreground.
    Full,
}

impl Glyph {
    /// The two non-blank levels, in blend-palette order.
    pub const BLENDS: [Self; 2] = [Self::Partial, Self::Full];

    #[must_use]
    pub const fn from_level(level: usize) -> Self {
        match level {
            0 => Self::Blank,
            1 => Self::Partial,
            _ => Self::Full,
        }
    }

    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            Self::Blank => 0,
            Self::Partial => 1,
            Self::Full => 2,
        }
    }

    /// Fraction of the cell covered by the foreground colour.
    #[must_use]
    pub fn coverage(self) -> f64 {
        self.level() as f64 / 3.0
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Partial => '░',
            Self::Full => '▓',
        }
    }
}

/// One quantized terminal cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub background: NativeColour,
    pub foreground: NativeColour,
    pub glyph: Glyph,
}

impl Cell {
    /// A blank cell showing only `background`.
    #[must_use]
    pub const fn blank(background: NativeColour) -> Self {
        Self {
            background,
            foreground: background,
            glyph: Glyph::Blank,
        }
    }

    #[must_use]
    pub const fn overlay(background: NativeColour, foreground: NativeColour, glyph: Glyph) -> Self {
        Self {
            background,
            foreground,
            glyph,
        }
    }
}
