pub mod cell;
pub mod complex;
pub mod grid;
pub mod point;
pub mod rgb;
pub mod sample;
pub mod viewport;
