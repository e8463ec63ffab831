use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::quantize::error_buffer::ErrorBuffer;
use crate::core::actions::quantize::{QuantizeOptions, Quantizer, quantize_frame};
use crate::core::colour::colour_map::{ColourMapParams, map_to_index};
use crate::core::colour::palette::Palette;
use crate::core::colour::palette::native::NativePalette;
use crate::core::data::cell::Cell;
use crate::core::data::grid::{Grid, GridError};
use crate::core::data::sample::Sample;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::fractals::iteration_budget::IterationBudget;
use crate::core::fractals::variant::FractalVariant;
use std::error::Error;
use std::fmt;

/// One screen of quantized cells, row-major.
pub type Frame = Grid<Cell>;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Viewport(ViewportError),
    Grid(GridError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<GridError> for RenderError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct FrameRequest<'a> {
    pub viewport: Viewport,
    pub variant: FractalVariant,
    pub budget: IterationBudget,
    pub colour_map: ColourMapParams,
    pub palette: &'a Palette,
    /// Nearest-colour targets for ramp mode.
    pub blend_targets: &'a NativePalette,
    pub options: QuantizeOptions,
    pub parallel: bool,
}

/// Evaluates, colour-maps and quantizes every cell of the viewport.
///
/// The escape-time pass may run in parallel; the dither pass is always
/// sequential since each cell consumes error left by earlier cells.
pub fn render_frame(request: &FrameRequest<'_>, errors: &mut ErrorBuffer) -> Result<Frame, RenderError> {
    let algorithm = EscapeTimeAlgorithm::new(request.viewport, request.variant, request.budget);
    let samples = if request.parallel {
        generate_fractal_parallel_rayon(&algorithm)?
    } else {
        generate_fractal_serial(&algorithm)?
    };

    let ncolors = request.palette.colour_count();
    let indices: Vec<Sample> = samples
        .into_iter()
        .map(|sample| map_to_index(sample, &request.colour_map, ncolors))
        .collect();
    let indices = Grid::from_data(
        request.viewport.cols() as usize,
        request.viewport.rows() as usize,
        indices,
    )?;

    let quantizer = match request.palette {
        Palette::Direct => Quantizer::Direct,
        Palette::Ramp(ramp) => Quantizer::Chroma {
            ramp,
            targets: request.blend_targets,
        },
    };

    Ok(quantize_frame(&indices, quantizer, request.options, errors))
}
