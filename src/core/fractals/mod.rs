pub mod escape_time;
pub mod iteration_budget;
pub mod variant;
