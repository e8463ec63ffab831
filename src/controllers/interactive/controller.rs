use crate::controllers::interactive::state::{RenderState, Transition, UiMode, ViewDefaults};
use crate::controllers::ports::terminal::{TerminalInput, TerminalPort};
use crate::core::actions::quantize::QuantizeOptions;
use crate::core::actions::quantize::error_buffer::ErrorBuffer;
use crate::core::actions::render_frame::{FrameRequest, RenderError, render_frame};
use crate::core::colour::palette::native::NativePalette;
use crate::core::colour::palette::ramp::ColourRamp;
use crate::core::colour::palette::{Palette, PaletteMode, build_palette};
use crate::core::data::viewport::ViewportError;
use crate::input::keymap::{KEY_HELP, command_for_key};
use crate::presenters::terminal::frame_writer::{write_frame, write_help, write_status};
use std::error::Error;
use std::fmt;
use std::io;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long a key poll waits before looping.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// The last terminal row holds the status line.
const STATUS_ROWS: u16 = 1;

#[derive(Debug)]
pub enum ControllerError {
    Terminal(io::Error),
    Viewport(ViewportError),
    Render(RenderError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(err) => write!(f, "terminal error: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Terminal(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<io::Error> for ControllerError {
    fn from(err: io::Error) -> Self {
        Self::Terminal(err)
    }
}

impl From<ViewportError> for ControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderError> for ControllerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ControllerOptions {
    pub defaults: ViewDefaults,
    pub ramp: Option<ColourRamp>,
    pub parallel: bool,
}

/// Restores the terminal when dropped, so every exit path out of the
/// event loop leaves the terminal usable.
struct RawModeGuard<'a, T: TerminalPort> {
    terminal: &'a mut T,
    active: bool,
}

impl<'a, T: TerminalPort> RawModeGuard<'a, T> {
    fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enter_raw_mode()?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        self.terminal.restore_mode()
    }
}

impl<T: TerminalPort> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: TerminalPort> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: TerminalPort> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.terminal.restore_mode();
        }
    }
}

struct PaletteSet {
    direct: Palette,
    ramp: Palette,
    blend_targets: NativePalette,
}

impl PaletteSet {
    fn new(ramp: Option<ColourRamp>) -> Self {
        Self {
            direct: build_palette(PaletteMode::Direct, None),
            ramp: build_palette(PaletteMode::Ramp, ramp),
            blend_targets: NativePalette::blended(),
        }
    }

    fn active(&self, use_ramp: bool) -> &Palette {
        if use_ramp { &self.ramp } else { &self.direct }
    }
}

struct Session {
    state: RenderState,
    palettes: PaletteSet,
    errors: ErrorBuffer,
    parallel: bool,
    frames: u64,
}

pub struct InteractiveController<T: TerminalPort> {
    terminal: T,
    session: Session,
}

impl<T: TerminalPort> InteractiveController<T> {
    /// Sizes the initial view to the terminal.
    pub fn new(terminal: T, options: ControllerOptions) -> Result<Self, ControllerError> {
        let (cols, rows) = grid_size(terminal.size()?);
        let state = RenderState::new(cols, rows, options.defaults)?;
        let errors = ErrorBuffer::for_mode(state.flags().use_ramp, cols as usize, rows as usize);

        Ok(Self {
            terminal,
            session: Session {
                state,
                palettes: PaletteSet::new(options.ramp),
                errors,
                parallel: options.parallel,
                frames: 0,
            },
        })
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.session.state
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.session.frames
    }

    /// Runs until the user quits. The terminal is restored on return,
    /// whether or not the loop failed.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        let mut terminal = RawModeGuard::enter(&mut self.terminal)?;
        info!(parallel = self.session.parallel, "session started");

        let result = self.session.event_loop(&mut *terminal);
        let restored = terminal.restore();

        if let Err(err) = &result {
            warn!(%err, "session ended with error");
        }
        result?;
        restored?;

        info!(frames = self.session.frames, "session ended");
        Ok(())
    }
}

impl Session {
    fn event_loop<T: TerminalPort>(&mut self, terminal: &mut T) -> Result<(), ControllerError> {
        terminal.clear_screen()?;
        self.redraw(terminal)?;

        loop {
            let Some(input) = terminal.poll_input(POLL_TIMEOUT)? else {
                continue;
            };

            let transition = match input {
                TerminalInput::Key(key) => match command_for_key(key) {
                    Some(command) => self.state.apply(command),
                    None => Transition::Idle,
                },
                TerminalInput::Resize { cols, rows } => self.on_resize(cols, rows),
            };

            match transition {
                Transition::Redraw => self.redraw(terminal)?,
                Transition::ShowHelp => self.show_help(terminal)?,
                Transition::Idle => {}
                Transition::Quit => {
                    terminal.clear_screen()?;
                    terminal.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) -> Transition {
        if !self.adopt_size(cols, rows) {
            return Transition::Idle;
        }

        match self.state.ui_mode() {
            UiMode::Rendering => Transition::Redraw,
            UiMode::HelpOverlay => Transition::ShowHelp,
        }
    }

    /// Resizes the view and error buffer to a terminal of `cols x rows`.
    /// Returns false if the terminal is too small to draw in.
    fn adopt_size(&mut self, cols: u16, rows: u16) -> bool {
        let (grid_cols, grid_rows) = grid_size((cols, rows));
        let viewport = self.state.viewport();
        if (grid_cols, grid_rows) == (viewport.cols(), viewport.rows()) {
            return true;
        }

        if let Err(err) = self.state.resize(grid_cols, grid_rows) {
            warn!(%err, cols, rows, "terminal too small, not drawing");
            return false;
        }

        self.errors = ErrorBuffer::for_mode(
            self.state.flags().use_ramp,
            grid_cols as usize,
            grid_rows as usize,
        );
        info!(cols = grid_cols, rows = grid_rows, "resized");
        true
    }

    fn redraw<T: TerminalPort>(&mut self, terminal: &mut T) -> Result<(), ControllerError> {
        let (cols, rows) = terminal.size()?;
        if !self.adopt_size(cols, rows) {
            return Ok(());
        }

        let started = Instant::now();
        let flags = self.state.flags();
        let request = FrameRequest {
            viewport: self.state.viewport(),
            variant: self.state.variant(),
            budget: self.state.budget(),
            colour_map: self.state.colour_map(),
            palette: self.palettes.active(flags.use_ramp),
            blend_targets: &self.palettes.blend_targets,
            options: QuantizeOptions {
                dither: flags.dither,
                overlay_glyphs: flags.overlay_glyphs,
            },
            parallel: self.parallel,
        };
        let frame = render_frame(&request, &mut self.errors)?;

        write_frame(terminal, &frame)?;
        let status_row = rows.saturating_sub(STATUS_ROWS);
        write_status(terminal, status_row, cols, &self.state.status_line())?;
        terminal.flush()?;

        self.frames += 1;
        debug!(
            cells = frame.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "frame rendered"
        );
        Ok(())
    }

    fn show_help<T: TerminalPort>(&self, terminal: &mut T) -> Result<(), ControllerError> {
        let (cols, rows) = terminal.size()?;
        write_help(terminal, cols, rows, &KEY_HELP)?;
        terminal.flush()?;
        Ok(())
    }
}

/// Grid dimensions for a terminal of `(cols, rows)`, leaving room for the
/// status line.
fn grid_size((cols, rows): (u16, u16)) -> (u32, u32) {
    (u32::from(cols), u32::from(rows.saturating_sub(STATUS_ROWS)))
}
