mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub mod config;
pub mod error;
pub mod logging;

pub use crate::config::{AppConfig, Cli};
pub use crate::controllers::interactive::{ControllerError, ControllerOptions, InteractiveController};
pub use crate::core::actions::render_frame::{Frame, FrameRequest, RenderError, render_frame};
pub use crate::core::actions::quantize::QuantizeOptions;
pub use crate::core::actions::quantize::error_buffer::ErrorBuffer;
pub use crate::core::colour::colour_map::ColourMapParams;
pub use crate::core::colour::palette::native::NativePalette;
pub use crate::core::colour::palette::ramp::ColourRamp;
pub use crate::core::colour::palette::{Palette, PaletteMode, build_palette};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::iteration_budget::IterationBudget;
pub use crate::core::fractals::variant::FractalVariant;
pub use crate::error::AppError;
pub use crate::presenters::terminal::crossterm_terminal::CrosstermTerminal;
pub use crate::storage::ramp_file::{RampFileError, load_ramp};
