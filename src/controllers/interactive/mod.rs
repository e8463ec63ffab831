//! Interactive terminal session.
//!
//! The controller owns the single live [`RenderState`], turns key presses
//! into [`Command`]s, and redraws through a
//! [`TerminalPort`](crate::controllers::ports::terminal::TerminalPort).

pub mod command;
mod controller;
pub mod state;

pub use command::Command;
pub use controller::{ControllerError, ControllerOptions, InteractiveController, POLL_TIMEOUT};
pub use state::{RenderModeFlags, RenderState, Transition, UiMode, ViewDefaults};
