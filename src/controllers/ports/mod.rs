//! Interfaces between the controller and the outside world.

#[cfg(test)]
pub mod memory_terminal;
pub mod terminal;
