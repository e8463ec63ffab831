pub mod generate_fractal;
pub mod quantize;
pub mod render_frame;
