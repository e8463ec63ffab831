use crate::controllers::interactive::command::Command;
use crate::core::colour::colour_map::{
    ColourMapParams, EXPONENT_STEP, LINEAR_SCALE_STEP, OFFSET_STEP,
};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::iteration_budget::IterationBudget;
use crate::core::fractals::variant::FractalVariant;
use tracing::{debug, info, warn};

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_HALF_EXTENT: f64 = 1.8;
pub const ZOOM_IN_FACTOR: f64 = 0.8;
pub const ZOOM_OUT_FACTOR: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Rendering,
    HelpOverlay,
}

/// Independent rendering toggles; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderModeFlags {
    pub dither: bool,
    pub overlay_glyphs: bool,
    pub use_ramp: bool,
}

impl Default for RenderModeFlags {
    fn default() -> Self {
        Self {
            dither: true,
            overlay_glyphs: false,
            use_ramp: false,
        }
    }
}

/// Starting point of a session, and what `Reset` returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewDefaults {
    pub center: Complex,
    pub half_extent: f64,
    pub budget: IterationBudget,
    pub colour_map: ColourMapParams,
    pub variant: FractalVariant,
    pub flags: RenderModeFlags,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            half_extent: DEFAULT_HALF_EXTENT,
            budget: IterationBudget::default(),
            colour_map: ColourMapParams::default(),
            variant: FractalVariant::default(),
            flags: RenderModeFlags::default(),
        }
    }
}

/// What the controller must do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Redraw,
    ShowHelp,
    Idle,
    Quit,
}

/// The single live set of parameters every frame is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    viewport: Viewport,
    variant: FractalVariant,
    budget: IterationBudget,
    colour_map: ColourMapParams,
    flags: RenderModeFlags,
    ui_mode: UiMode,
    defaults: ViewDefaults,
}

impl RenderState {
    pub fn new(cols: u32, rows: u32, defaults: ViewDefaults) -> Result<Self, ViewportError> {
        let viewport = Viewport::new(cols, rows, defaults.center, defaults.half_extent)?;

        Ok(Self {
            viewport,
            variant: defaults.variant,
            budget: defaults.budget,
            colour_map: defaults.colour_map,
            flags: defaults.flags,
            ui_mode: UiMode::Rendering,
            defaults,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapParams {
        self.colour_map
    }

    #[must_use]
    pub fn flags(&self) -> RenderModeFlags {
        self.flags
    }

    #[must_use]
    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }

    /// Applies `command`. Parameter changes made while help is showing
    /// take effect on the redraw that follows closing it.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Quit => return Transition::Quit,
            Command::ToggleHelp => {
                return match self.ui_mode {
                    UiMode::Rendering => {
                        self.ui_mode = UiMode::HelpOverlay;
                        Transition::ShowHelp
                    }
                    UiMode::HelpOverlay => {
                        self.ui_mode = UiMode::Rendering;
                        Transition::Redraw
                    }
                };
            }
            _ => {}
        }

        if !self.mutate(command) {
            return Transition::Idle;
        }
        debug!(?command, "state changed");

        match self.ui_mode {
            UiMode::Rendering => Transition::Redraw,
            UiMode::HelpOverlay => Transition::Idle,
        }
    }

    /// Adopts a new grid size, keeping center and horizontal extent.
    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), ViewportError> {
        self.viewport = self.viewport.resized(cols, rows)?;
        Ok(())
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        let (sa, sb) = self.viewport.half_extent();
        let center = self.viewport.center();
        let on_off = |flag: bool| if flag { "on" } else { "off" };

        format!(
            "Iters: {}  Size: ({:.6}, {:.6})  Center: ({:.6}, {:.6})  {}  dither:{} glyphs:{} ramp:{}",
            self.budget,
            sa,
            sb,
            center.real,
            center.imag,
            self.variant,
            on_off(self.flags.dither),
            on_off(self.flags.overlay_glyphs),
            on_off(self.flags.use_ramp),
        )
    }

    fn mutate(&mut self, command: Command) -> bool {
        match command {
            Command::ZoomIn => return self.zoom(ZOOM_IN_FACTOR),
            Command::ZoomOut => return self.zoom(ZOOM_OUT_FACTOR),
            Command::Pan(direction) => self.viewport = self.viewport.panned(direction),
            Command::IncreaseIterations => self.budget = self.budget.increased(),
            Command::DecreaseIterations => self.budget = self.budget.decreased(),
            Command::IncreaseExponent => {
                self.colour_map = self.colour_map.with_exponent_delta(EXPONENT_STEP);
            }
            Command::DecreaseExponent => {
                self.colour_map = self.colour_map.with_exponent_delta(-EXPONENT_STEP);
            }
            Command::IncreaseLinearScale => {
                self.colour_map = self.colour_map.with_linear_factor(LINEAR_SCALE_STEP);
            }
            Command::DecreaseLinearScale => {
                self.colour_map = self.colour_map.with_linear_factor(1.0 / LINEAR_SCALE_STEP);
            }
            Command::IncreaseOffset => {
                self.colour_map = self.colour_map.with_offset_delta(OFFSET_STEP);
            }
            Command::DecreaseOffset => {
                self.colour_map = self.colour_map.with_offset_delta(-OFFSET_STEP);
            }
            Command::SelectVariant(variant) => {
                self.variant = variant;
                info!(%variant, "variant selected");
            }
            Command::ToggleDither => {
                self.flags.dither = !self.flags.dither;
                info!(dither = self.flags.dither, "dither toggled");
            }
            Command::ToggleOverlayGlyphs => {
                self.flags.overlay_glyphs = !self.flags.overlay_glyphs;
                info!(overlay_glyphs = self.flags.overlay_glyphs, "overlay glyphs toggled");
            }
            Command::ToggleRamp => {
                self.flags.use_ramp = !self.flags.use_ramp;
                info!(use_ramp = self.flags.use_ramp, "ramp mode toggled");
            }
            Command::Reset => return self.reset(),
            Command::ToggleHelp | Command::Quit => return false,
        }

        true
    }

    fn zoom(&mut self, factor: f64) -> bool {
        match self.viewport.zoomed(factor) {
            Ok(viewport) => {
                self.viewport = viewport;
                true
            }
            Err(err) => {
                warn!(%err, factor, "zoom ignored");
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        let viewport = self
            .viewport
            .recentered(self.defaults.center)
            .rescaled(self.defaults.half_extent);

        match viewport {
            Ok(viewport) => self.viewport = viewport,
            Err(err) => {
                warn!(%err, "reset ignored");
                return false;
            }
        }
        self.budget = self.defaults.budget;
        self.colour_map = self.defaults.colour_map;

        true
    }
}
