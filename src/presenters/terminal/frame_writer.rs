use crate::controllers::ports::terminal::{Layer, TerminalPort};
use crate::core::actions::render_frame::Frame;
use crate::core::colour::palette::native::NativeColour;
use std::io;

const HELP_MARGIN_COLS: u16 = 10;
const HELP_MARGIN_ROWS: u16 = 5;
const HELP_KEY_WIDTH: usize = 10;
const HELP_TITLE: &str = "FRACTERM HELP";

/// Draws `frame` from the top-left corner, one terminal row per grid row.
///
/// Colour changes are only emitted when a cell differs from the one
/// before it.
pub fn write_frame<T: TerminalPort + ?Sized>(terminal: &mut T, frame: &Frame) -> io::Result<()> {
    let mut current: Option<(NativeColour, NativeColour)> = None;

    for (row, cells) in frame.rows_iter().enumerate() {
        if cells.is_empty() {
            continue;
        }
        terminal.move_cursor(clamp_u16(row), 0)?;

        for cell in cells {
            let colours = (cell.background, cell.foreground);
            if current != Some(colours) {
                terminal.set_colour(Layer::Background, cell.background)?;
                terminal.set_colour(Layer::Foreground, cell.foreground)?;
                current = Some(colours);
            }
            terminal.write_char(cell.glyph.as_char())?;
        }
    }

    Ok(())
}

/// Writes `text` on `row`, padded or cut to exactly `cols` characters.
pub fn write_status<T: TerminalPort + ?Sized>(
    terminal: &mut T,
    row: u16,
    cols: u16,
    text: &str,
) -> io::Result<()> {
    terminal.move_cursor(row, 0)?;
    terminal.set_colour(Layer::Background, NativeColour::Black)?;
    terminal.set_colour(Layer::Foreground, NativeColour::White)?;
    terminal.write_str(&fit(text, cols as usize))
}

/// Draws the key reference as an inset panel over whatever is on screen.
pub fn write_help<T: TerminalPort + ?Sized>(
    terminal: &mut T,
    cols: u16,
    rows: u16,
    bindings: &[(&str, &str)],
) -> io::Result<()> {
    let (left, top, width, height) = help_panel(cols, rows);
    if width == 0 || height == 0 {
        return Ok(());
    }

    terminal.set_colour(Layer::Background, NativeColour::Black)?;
    terminal.set_colour(Layer::Foreground, NativeColour::White)?;

    let blank = " ".repeat(width as usize);
    for row in top..top + height {
        terminal.move_cursor(row, left)?;
        terminal.write_str(&blank)?;
    }

    let text_width = (width as usize).saturating_sub(2);
    let mut lines = vec![HELP_TITLE.to_string(), String::new()];
    for (keys, description) in bindings {
        lines.push(format!("{keys:<HELP_KEY_WIDTH$} {description}"));
        lines.push(String::new());
    }

    for (offset, line) in lines.iter().enumerate() {
        let row = top as usize + 1 + offset;
        if row >= (top + height) as usize {
            break;
        }
        if line.is_empty() {
            continue;
        }
        terminal.move_cursor(clamp_u16(row), left + 1)?;
        terminal.write_str(&truncate(line, text_width))?;
    }

    Ok(())
}

/// Panel bounds as `(left, top, width, height)`, using the whole screen
/// when it is too small for margins.
fn help_panel(cols: u16, rows: u16) -> (u16, u16, u16, u16) {
    let width = cols.saturating_sub(2 * HELP_MARGIN_COLS);
    let height = rows.saturating_sub(2 * HELP_MARGIN_ROWS);

    if width < 2 || height < 2 {
        return (0, 0, cols, rows);
    }

    (HELP_MARGIN_COLS, HELP_MARGIN_ROWS, width, height)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn fit(text: &str, width: usize) -> String {
    let mut line = truncate(text, width);
    let len = line.chars().count();
    line.extend(std::iter::repeat_n(' ', width - len));
    line
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
