use crate::controllers::ports::terminal::{Layer, TerminalInput, TerminalPort};
use crate::core::colour::palette::native::NativeColour;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;
use tracing::debug;

/// [`TerminalPort`] over stdout using crossterm.
///
/// Output is buffered until [`flush`](TerminalPort::flush). Dropping the
/// terminal restores the original mode.
pub struct CrosstermTerminal {
    out: BufWriter<Stdout>,
    raw: bool,
}

impl CrosstermTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
            raw: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.restore_mode();
    }
}

fn native_to_crossterm(colour: NativeColour) -> Color {
    match colour {
        NativeColour::Black => Color::Black,
        NativeColour::Red => Color::DarkRed,
        NativeColour::Green => Color::DarkGreen,
        NativeColour::Yellow => Color::DarkYellow,
        NativeColour::Blue => Color::DarkBlue,
        NativeColour::Magenta => Color::DarkMagenta,
        NativeColour::Cyan => Color::DarkCyan,
        NativeColour::White => Color::Grey,
    }
}

fn key_input(key: KeyEvent) -> Option<TerminalInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TerminalInput::Key('q'))
        }
        KeyCode::Char(ch) => Some(TerminalInput::Key(ch)),
        KeyCode::Esc => Some(TerminalInput::Key('q')),
        _ => None,
    }
}

impl TerminalPort for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)?;
        debug!("entered raw mode");
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;

        execute!(
            self.out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        debug!("restored terminal mode");
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn set_colour(&mut self, layer: Layer, colour: NativeColour) -> io::Result<()> {
        let colour = native_to_crossterm(colour);
        match layer {
            Layer::Foreground => queue!(self.out, SetForegroundColor(colour)),
            Layer::Background => queue!(self.out, SetBackgroundColor(colour)),
        }
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        queue!(self.out, Print(ch))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<TerminalInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let input = match event::read()? {
            Event::Key(key) => key_input(key),
            Event::Resize(cols, rows) => Some(TerminalInput::Resize { cols, rows }),
            _ => None,
        };

        Ok(input)
    }
}
