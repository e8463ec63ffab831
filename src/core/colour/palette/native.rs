use crate::core::data::cell::{Cell, Glyph};
use crate::core::data::rgb::{CHANNEL_MAX, Rgb};
use std::fmt;

/// Number of colours every terminal supports.
pub const NATIVE_COLOURS: usize = 8;

/// Width of one background block in the blended palette: the pure colour
/// plus every foreground at every blend level.
pub const BLEND_BLOCK: usize = 1 + NATIVE_COLOURS * Glyph::BLENDS.len();

/// Size of the blended palette.
pub const BLENDED_COLOURS: usize = NATIVE_COLOURS * BLEND_BLOCK;

/// Colours cycled through outside the set in direct mode, in hue order.
/// Black is excluded; it is reserved for cells inside the set.
pub const DIRECT_CYCLE: [NativeColour; 6] = [
    NativeColour::Yellow,
    NativeColour::Red,
    NativeColour::Magenta,
    NativeColour::Blue,
    NativeColour::Cyan,
    NativeColour::Green,
];

/// The eight base terminal colours, in ANSI order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub enum NativeColour {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NativeColour {
    pub const ALL: [Self; NATIVE_COLOURS] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Direct-mode colour for any integer index, wrapping with a euclidean
    /// modulo so negative indices cycle backwards.
    #[must_use]
    pub fn cycled(index: i64) -> Self {
        DIRECT_CYCLE[index.rem_euclid(DIRECT_CYCLE.len() as i64) as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Full-intensity RGB: each ANSI bit switches one channel on.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        let bits = self as i32;
        Rgb::new(
            (bits & 1) * CHANNEL_MAX,
            ((bits >> 1) & 1) * CHANNEL_MAX,
            ((bits >> 2) & 1) * CHANNEL_MAX,
        )
    }
}

impl fmt::Display for NativeColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// The discrete colours a cell can show, as RGB targets for nearest-colour
/// search.
///
/// The 136 entries are laid out so that block `i` (entries `i*17 .. i*17+17`) starts with pure colour `i` and
/// continues with foreground `j` at blend level `k` over background `i` at
/// offset `1 + 2*j + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct NativePalette {
    entries: Vec<Rgb>,
}

impl NativePalette {
    #[must_use]
    pub fn blended() -> Self {
        let mut entries = Vec::with_capacity(BLENDED_COLOURS);

        for background in NativeColour::ALL {
            entries.push(background.rgb());
            for foreground in NativeColour::ALL {
                for glyph in Glyph::BLENDS {
                    entries.push(background.rgb().lerp(foreground.rgb(), glyph.coverage()));
                }
            }
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry closest to `target` by squared RGB distance.
    ///
    /// With `include_blends` false only the pure base colours are
    /// candidates. Ties go to the lowest index.
    #[must_use]
    pub fn nearest(&self, target: Rgb, include_blends: bool) -> usize {
        let stride = if include_blends { 1 } else { BLEND_BLOCK };
        let mut best = 0;
        let mut best_distance = i64::MAX;

        for index in (0..self.entries.len()).step_by(stride) {
            let distance = self.entries[index].distance_squared(target);
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }

        best
    }

    /// Decodes an entry index into the cell that displays it.
    ///
    /// Indices past the end wrap around.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        let index = index % self.entries.len().max(1);
        let background = NativeColour::ALL[index / BLEND_BLOCK];
        let offset = index % BLEND_BLOCK;

        if offset == 0 {
            return Cell::blank(background);
        }

        let blend = offset - 1;
        let foreground = NativeColour::ALL[blend / Glyph::BLENDS.len()];
        let glyph = Glyph::BLENDS[blend % Glyph::BLENDS.len()];

        Cell::overlay(background, foreground, glyph)
    }
}
