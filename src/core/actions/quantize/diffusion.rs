use crate::core::data::grid::Grid;
use crate::core::data::rgb::Rgb;

/// Sum of the kernel weights.
pub const KERNEL_DIVISOR: i32 = 16;

/// Floyd–Steinberg neighbours as `(row offset, col offset, weight)`. The
/// first entry (right) absorbs the integer remainder in RGB diffusion.
pub const KERNEL: [(usize, isize, i32); 4] = [(0, 1, 7), (1, -1, 3), (1, 0, 5), (1, 1, 1)];

/// Whether every kernel neighbour of `(row, col)` lies inside the grid.
/// Residuals from edge cells are dropped rather than partially spread.
#[must_use]
pub fn is_interior(cols: usize, rows: usize, row: usize, col: usize) -> bool {
    row + 1 < rows && col > 0 && col + 1 < cols
}

/// Adds `residual * weight` to each neighbour. Readers divide by
/// [`KERNEL_DIVISOR`].
pub fn diffuse_scalar(errors: &mut Grid<f64>, row: usize, col: usize, residual: f64) {
    if !is_interior(errors.cols(), errors.rows(), row, col) {
        return;
    }

    for (d_row, d_col, weight) in KERNEL {
        if let Ok(cell) = errors.get_mut(row + d_row, col.wrapping_add_signed(d_col)) {
            *cell += residual * f64::from(weight);
        }
    }
}

/// Spreads `residual` in integer shares of `weight / 16`, so the neighbours
/// receive exactly `residual` in total.
pub fn diffuse_rgb(errors: &mut Grid<Rgb>, row: usize, col: usize, residual: Rgb) {
    if !is_interior(errors.cols(), errors.rows(), row, col) {
        return;
    }

    let mut remainder = residual;
    for (d_row, d_col, weight) in KERNEL.iter().skip(1).copied() {
        let share = residual.map(|v| v * weight / KERNEL_DIVISOR);
        remainder = remainder - share;
        if let Ok(cell) = errors.get_mut(row + d_row, col.wrapping_add_signed(d_col)) {
            *cell += share;
        }
    }

    let (d_row, d_col, _) = KERNEL[0];
    if let Ok(cell) = errors.get_mut(row + d_row, col.wrapping_add_signed(d_col)) {
        *cell += remainder;
    }
}
