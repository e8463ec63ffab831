use crate::core::data::viewport::PanDirection;
use crate::core::fractals::variant::FractalVariant;

/// A user request to the interactive renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    Pan(PanDirection),
    IncreaseIterations,
    DecreaseIterations,
    IncreaseExponent,
    DecreaseExponent,
    IncreaseLinearScale,
    DecreaseLinearScale,
    IncreaseOffset,
    DecreaseOffset,
    SelectVariant(FractalVariant),
    ToggleDither,
    ToggleOverlayGlyphs,
    ToggleRamp,
    Reset,
    ToggleHelp,
    Quit,
}
