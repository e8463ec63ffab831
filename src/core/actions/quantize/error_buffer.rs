use crate::core::data::grid::Grid;
use crate::core::data::rgb::Rgb;

/// Per-cell diffusion error for the current palette mode.
///
/// Scalar errors hold weighted colour-index residuals (read back divided
/// by the kernel divisor); chroma errors hold exact RGB residuals.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBuffer {
    Scalar(Grid<f64>),
    Chroma(Grid<Rgb>),
}

impl ErrorBuffer {
    #[must_use]
    pub fn scalar(cols: usize, rows: usize) -> Self {
        Self::Scalar(Grid::new(cols, rows))
    }

    #[must_use]
    pub fn chroma(cols: usize, rows: usize) -> Self {
        Self::Chroma(Grid::new(cols, rows))
    }

    #[must_use]
    pub fn for_mode(use_ramp: bool, cols: usize, rows: usize) -> Self {
        if use_ramp {
            Self::chroma(cols, rows)
        } else {
            Self::scalar(cols, rows)
        }
    }

    #[must_use]
    pub fn is_chroma(&self) -> bool {
        matches!(self, Self::Chroma(_))
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Scalar(grid) => (grid.cols(), grid.rows()),
            Self::Chroma(grid) => (grid.cols(), grid.rows()),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Scalar(grid) => grid.clear(),
            Self::Chroma(grid) => grid.clear(),
        }
    }

    /// Makes the buffer match the mode and size, reallocating if either
    /// changed and zeroing it otherwise.
    pub fn prepare(&mut self, use_ramp: bool, cols: usize, rows: usize) {
        if self.is_chroma() != use_ramp || self.dimensions() != (cols, rows) {
            *self = Self::for_mode(use_ramp, cols, rows);
        } else {
            self.clear();
        }
    }
}
