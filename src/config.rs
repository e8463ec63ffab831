//! Command-line configuration.

use crate::controllers::interactive::{ControllerOptions, RenderModeFlags, ViewDefaults};
use crate::core::colour::palette::ramp::ColourRamp;
use crate::core::fractals::iteration_budget::{DEFAULT_MAX_ITERATIONS, IterationBudget};
use crate::core::fractals::variant::{FractalVariant, MAX_SELECTOR};
use clap::Parser;
use std::path::PathBuf;

/// Interactive escape-time fractal explorer for character terminals.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fracterm", version, about, long_about = None)]
pub struct Cli {
    /// Colour ramp file; enables ramp mode when given
    pub ramp_file: Option<PathBuf>,

    /// Initial iteration limit
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Initial variant: 1=Burning Ship, 2=Mandelbrot, 3-9=Multibrot of that power
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=MAX_SELECTOR as i64))]
    pub variant: u8,

    /// Start with error diffusion off
    #[arg(long, default_value_t = false)]
    pub no_dither: bool,

    /// Start with shade-glyph overlays on
    #[arg(long, default_value_t = false)]
    pub overlays: bool,

    /// Evaluate the escape-time pass on all cores
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub defaults: ViewDefaults,
    pub parallel: bool,
    pub ramp_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let flags = RenderModeFlags {
            dither: !cli.no_dither,
            overlay_glyphs: cli.overlays,
            use_ramp: cli.ramp_file.is_some(),
        };
        let defaults = ViewDefaults {
            budget: IterationBudget::new(cli.iterations),
            variant: FractalVariant::from_selector(cli.variant).unwrap_or_default(),
            flags,
            ..ViewDefaults::default()
        };

        Self {
            defaults,
            parallel: cli.parallel,
            ramp_file: cli.ramp_file,
            log_file: cli.log_file,
        }
    }
}

impl AppConfig {
    /// Controller options for this configuration, with `ramp` as the
    /// loaded contents of the ramp file if one was given.
    #[must_use]
    pub fn controller_options(&self, ramp: Option<ColourRamp>) -> ControllerOptions {
        ControllerOptions {
            defaults: self.defaults,
            ramp,
            parallel: self.parallel,
        }
    }
}
