use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Fraction of the half-extent moved by one pan step.
pub const PAN_FRACTION: f64 = 0.35;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    EmptyGrid { cols: u32, rows: u32 },
    InvalidHalfExtent { half_extent: f64 },
    CellOutside { row: u32, col: u32, rows: u32, cols: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { cols, rows } => {
                write!(f, "viewport grid must be at least 1x1 cells: {}x{}", cols, rows)
            }
            Self::InvalidHalfExtent { half_extent } => {
                write!(f, "viewport half-extent must be positive and finite: {}", half_extent)
            }
            Self::CellOutside {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of {}x{} viewport",
                    row, col, cols, rows
                )
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Maps a region of the complex plane onto a grid of terminal cells.
///
/// The vertical half-extent is always derived from the horizontal one as
/// `2 * sa / aspect`, with `aspect = cols / rows`, to compensate for
/// character cells being roughly twice as tall as they are wide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    half_extent_a: f64,
    half_extent_b: f64,
    cols: u32,
    rows: u32,
}

impl Viewport {
    pub fn new(cols: u32, rows: u32, center: Complex, half_extent_a: f64) -> Result<Self, ViewportError> {
        validate_grid(cols, rows)?;
        validate_half_extent(half_extent_a)?;

        let mut viewport = Self {
            center,
            half_extent_a,
            half_extent_b: 0.0,
            cols,
            rows,
        };
        viewport.derive_half_extent_b();

        Ok(viewport)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    /// `(sa, sb)`.
    #[must_use]
    pub fn half_extent(&self) -> (f64, f64) {
        (self.half_extent_a, self.half_extent_b)
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.cols) / f64::from(self.rows)
    }

    #[must_use]
    pub fn step_a(&self) -> f64 {
        2.0 * self.half_extent_a / f64::from(self.cols)
    }

    #[must_use]
    pub fn step_b(&self) -> f64 {
        2.0 * self.half_extent_b / f64::from(self.rows)
    }

    /// Complex coordinate at the centre of cell `(row, col)`.
    pub fn point_at(&self, row: u32, col: u32) -> Result<Complex, ViewportError> {
        if row >= self.rows || col >= self.cols {
            return Err(ViewportError::CellOutside {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(Complex {
            real: self.center.real - self.half_extent_a + (f64::from(col) + 0.5) * self.step_a(),
            imag: self.center.imag - self.half_extent_b + (f64::from(row) + 0.5) * self.step_b(),
        })
    }

    #[must_use]
    pub fn recentered(self, center: Complex) -> Self {
        Self { center, ..self }
    }

    /// Sets the horizontal half-extent; the vertical one follows.
    pub fn rescaled(self, half_extent_a: f64) -> Result<Self, ViewportError> {
        validate_half_extent(half_extent_a)?;

        let mut viewport = Self {
            half_extent_a,
            ..self
        };
        viewport.derive_half_extent_b();

        Ok(viewport)
    }

    /// Scales the half-extent by `factor` around the current center.
    pub fn zoomed(self, factor: f64) -> Result<Self, ViewportError> {
        self.rescaled(self.half_extent_a * factor)
    }

    /// Moves the center by [`PAN_FRACTION`] of the half-extent.
    ///
    /// Row 0 is the smallest imaginary value, so `Up` decreases `b`.
    #[must_use]
    pub fn panned(self, direction: PanDirection) -> Self {
        let Complex { real, imag } = self.center;
        let center = match direction {
            PanDirection::Up => Complex::new(real, imag - PAN_FRACTION * self.half_extent_b),
            PanDirection::Down => Complex::new(real, imag + PAN_FRACTION * self.half_extent_b),
            PanDirection::Left => Complex::new(real - PAN_FRACTION * self.half_extent_a, imag),
            PanDirection::Right => Complex::new(real + PAN_FRACTION * self.half_extent_a, imag),
        };

        self.recentered(center)
    }

    /// Adopts new terminal dimensions, keeping center and `sa`.
    pub fn resized(self, cols: u32, rows: u32) -> Result<Self, ViewportError> {
        validate_grid(cols, rows)?;

        let mut viewport = Self { cols, rows, ..self };
        viewport.derive_half_extent_b();

        Ok(viewport)
    }

    fn derive_half_extent_b(&mut self) {
        self.half_extent_b = 2.0 * self.half_extent_a / self.aspect_ratio();
    }
}

fn validate_grid(cols: u32, rows: u32) -> Result<(), ViewportError> {
    if cols == 0 || rows == 0 {
        return Err(ViewportError::EmptyGrid { cols, rows });
    }

    Ok(())
}

fn validate_half_extent(half_extent: f64) -> Result<(), ViewportError> {
    if !half_extent.is_finite() || half_extent <= 0.0 {
        return Err(ViewportError::InvalidHalfExtent { half_extent });
    }

    Ok(())
}
