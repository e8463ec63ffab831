use crate::controllers::ports::terminal::{Layer, TerminalInput, TerminalPort};
use crate::core::colour::palette::native::NativeColour;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCell {
    pub ch: char,
    pub foreground: NativeColour,
    pub background: NativeColour,
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            foreground: NativeColour::White,
            background: NativeColour::Black,
        }
    }
}

/// In-memory terminal for driving the controller in tests.
///
/// Input is scripted up front; once the script runs out every poll
/// reports a `q` so loops always terminate.
#[derive(Debug)]
pub struct MemoryTerminal {
    pub cols: u16,
    pub rows: u16,
    pub screen: Vec<ScreenCell>,
    pub raw_mode: bool,
    pub restore_calls: usize,
    pub clears: usize,
    pub flushes: usize,
    pub fail_flush: bool,
    pub inputs: VecDeque<TerminalInput>,
    cursor: (u16, u16),
    foreground: NativeColour,
    background: NativeColour,
}

impl MemoryTerminal {
    pub fn new(cols: u16, rows: u16, inputs: impl IntoIterator<Item = TerminalInput>) -> Self {
        Self {
            cols,
            rows,
            screen: vec![ScreenCell::default(); cols as usize * rows as usize],
            raw_mode: false,
            restore_calls: 0,
            clears: 0,
            flushes: 0,
            fail_flush: false,
            inputs: inputs.into_iter().collect(),
            cursor: (0, 0),
            foreground: NativeColour::White,
            background: NativeColour::Black,
        }
    }

    pub fn keys(cols: u16, rows: u16, keys: &str) -> Self {
        Self::new(cols, rows, keys.chars().map(TerminalInput::Key))
    }

    pub fn cell(&self, row: u16, col: u16) -> ScreenCell {
        self.screen[row as usize * self.cols as usize + col as usize]
    }

    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols).map(|col| self.cell(row, col).ch).collect()
    }
}

impl TerminalPort for MemoryTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.raw_mode = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        self.raw_mode = false;
        self.restore_calls += 1;
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.screen.fill(ScreenCell {
            background: self.background,
            ..ScreenCell::default()
        });
        self.clears += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.cursor = (row, col);
        Ok(())
    }

    fn set_colour(&mut self, layer: Layer, colour: NativeColour) -> io::Result<()> {
        match layer {
            Layer::Foreground => self.foreground = colour,
            Layer::Background => self.background = colour,
        }
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let (row, col) = self.cursor;
        if row < self.rows && col < self.cols {
            self.screen[row as usize * self.cols as usize + col as usize] = ScreenCell {
                ch,
                foreground: self.foreground,
                background: self.background,
            };
        }
        self.cursor = (row, col.saturating_add(1));
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            return Err(io::Error::other("flush failed"));
        }
        self.flushes += 1;
        Ok(())
    }

    fn poll_input(&mut self, _timeout: Duration) -> io::Result<Option<TerminalInput>> {
        let input = self.inputs.pop_front().unwrap_or(TerminalInput::Key('q'));
        if let TerminalInput::Resize { cols, rows } = input {
            self.cols = cols;
            self.rows = rows;
            self.screen = vec![ScreenCell::default(); cols as usize * rows as usize];
        }
        Ok(Some(input))
    }
}
