use crate::core::colour::palette::native::NativeColour;
use std::io;
use std::time::Duration;

/// Which half of a cell a colour applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalInput {
    Key(char),
    Resize { cols: u16, rows: u16 },
}

/// The character terminal the controller draws on and reads keys from.
///
/// Rows and columns are zero-based.
pub trait TerminalPort {
    /// Current size as `(cols, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Undoes [`enter_raw_mode`](Self::enter_raw_mode). Must be safe to
    /// call more than once.
    fn restore_mode(&mut self) -> io::Result<()>;

    fn clear_screen(&mut self) -> io::Result<()>;

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()>;

    fn set_colour(&mut self, layer: Layer, colour: NativeColour) -> io::Result<()>;

    fn write_char(&mut self, ch: char) -> io::Result<()>;

    fn write_str(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Waits up to `timeout` for a key press or resize.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<TerminalInput>>;
}
