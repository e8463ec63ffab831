//! Discrete colour targets for the quantizer.

pub mod native;
pub mod ramp;

use native::DIRECT_CYCLE;
use ramp::ColourRamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Native colours cycled directly by index.
    #[default]
    Direct,
    /// A continuous RGB ramp matched against the blended native palette.
    Ramp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    Direct,
    Ramp(ColourRamp),
}

impl Palette {
    /// How many colours one full cycle of the colour index spans.
    #[must_use]
    pub fn colour_count(&self) -> usize {
        match self {
            Self::Direct => DIRECT_CYCLE.len(),
            Self::Ramp(ramp) => ramp.len(),
        }
    }
}

/// Builds the palette for `mode`. Ramp mode uses `ramp` when given and the
/// built-in four-stop ramp otherwise; direct mode ignores it.
#[must_use]
pub fn build_palette(mode: PaletteMode, ramp: Option<ColourRamp>) -> Palette {
    match mode {
        PaletteMode::Direct => Palette::Direct,
        PaletteMode::Ramp => Palette::Ramp(ramp.unwrap_or_default()),
    }
}
