use crate::core::colour::palette::native::NativePalette;
use crate::core::colour::palette::ramp::ColourRamp;
use crate::core::data::cell::Cell;
use crate::core::data::rgb::Rgb;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChromaQuantized {
    pub cell: Cell,
    pub residual: Rgb,
}

/// Picks the palette entry nearest to the ramp colour at `index` plus the
/// carried `error`.
///
/// `palette` should be the blended palette; with `overlay_glyphs` off only
/// its pure colours are considered.
#[must_use]
pub fn quantize_chroma(
    index: f64,
    error: Rgb,
    ramp: &ColourRamp,
    palette: &NativePalette,
    overlay_glyphs: bool,
) -> ChromaQuantized {
    let target = ramp.sample(index) + error;
    let chosen = palette.nearest(target, overlay_glyphs);

    ChromaQuantized {
        cell: palette.cell(chosen),
        residual: target - palette.entries()[chosen],
    }
}
