pub mod crossterm_terminal;
pub mod frame_writer;
