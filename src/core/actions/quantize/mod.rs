//! Continuous colour indices to displayable cells, with Floyd–Steinberg
//! error diffusion in a single row-major pass.

pub mod chroma;
pub mod diffusion;
pub mod direct;
pub mod error_buffer;

use crate::core::colour::palette::native::{NativeColour, NativePalette};
use crate::core::colour::palette::ramp::ColourRamp;
use crate::core::data::cell::Cell;
use crate::core::data::grid::Grid;
use crate::core::data::rgb::Rgb;
use crate::core::data::sample::Sample;
use chroma::quantize_chroma;
use diffusion::{KERNEL_DIVISOR, diffuse_rgb, diffuse_scalar};
use direct::quantize_direct;
use error_buffer::ErrorBuffer;

/// Cell drawn for points inside the set.
pub const INSIDE_CELL: Cell = Cell::blank(NativeColour::Black);

/// How colour indices turn into cells.
#[derive(Debug, Clone, Copy)]
pub enum Quantizer<'a> {
    /// Index selects a native colour directly; scalar error.
    Direct,
    /// Index samples `ramp`; the result snaps to the nearest of `targets`
    /// with RGB error.
    Chroma {
        ramp: &'a ColourRamp,
        targets: &'a NativePalette,
    },
}

impl Quantizer<'_> {
    #[must_use]
    pub fn uses_chroma_error(&self) -> bool {
        matches!(self, Self::Chroma { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantizeOptions {
    pub dither: bool,
    pub overlay_glyphs: bool,
}

/// Quantizes every cell of `indices`. `errors` is reset to match the
/// quantizer and grid size before the pass.
pub fn quantize_frame(
    indices: &Grid<Sample>,
    quantizer: Quantizer<'_>,
    options: QuantizeOptions,
    errors: &mut ErrorBuffer,
) -> Grid<Cell> {
    let (cols, rows) = (indices.cols(), indices.rows());
    errors.prepare(quantizer.uses_chroma_error(), cols, rows);

    match quantizer {
        Quantizer::Direct => {
            let carried = match errors {
                ErrorBuffer::Scalar(grid) if options.dither => Some(grid),
                _ => None,
            };
            direct_pass(indices, options.overlay_glyphs, carried)
        }
        Quantizer::Chroma { ramp, targets } => {
            let carried = match errors {
                ErrorBuffer::Chroma(grid) if options.dither => Some(grid),
                _ => None,
            };
            chroma_pass(indices, ramp, targets, options.overlay_glyphs, carried)
        }
    }
}

fn direct_pass(
    indices: &Grid<Sample>,
    overlay_glyphs: bool,
    mut errors: Option<&mut Grid<f64>>,
) -> Grid<Cell> {
    let mut cells = Grid::new(indices.cols(), indices.rows());

    for (row, values) in indices.rows_iter().enumerate() {
        for (col, sample) in values.iter().enumerate() {
            let Sample::Value(index) = *sample else {
                continue;
            };

            let carried = errors
                .as_deref()
                .and_then(|grid| grid.get(row, col))
                .map_or(0.0, |e| e / f64::from(KERNEL_DIVISOR));
            let quantized = quantize_direct(index + carried, overlay_glyphs);

            if let Some(grid) = errors.as_deref_mut() {
                diffuse_scalar(grid, row, col, quantized.residual);
            }
            store(&mut cells, row, col, quantized.cell);
        }
    }

    cells
}

fn chroma_pass(
    indices: &Grid<Sample>,
    ramp: &ColourRamp,
    targets: &NativePalette,
    overlay_glyphs: bool,
    mut errors: Option<&mut Grid<Rgb>>,
) -> Grid<Cell> {
    let mut cells = Grid::new(indices.cols(), indices.rows());

    for (row, values) in indices.rows_iter().enumerate() {
        for (col, sample) in values.iter().enumerate() {
            let Sample::Value(index) = *sample else {
                continue;
            };

            let carried = errors
                .as_deref()
                .and_then(|grid| grid.get(row, col))
                .unwrap_or_default();
            let quantized = quantize_chroma(index, carried, ramp, targets, overlay_glyphs);

            if let Some(grid) = errors.as_deref_mut() {
                diffuse_rgb(grid, row, col, quantized.residual);
            }
            store(&mut cells, row, col, quantized.cell);
        }
    }

    cells
}

fn store(cells: &mut Grid<Cell>, row: usize, col: usize, cell: Cell) {
    // both grids share dimensions, so the cell is always in bounds
    if cells.set(row, col, cell).is_err() {
        tracing::warn!(row, col, "quantized cell outside frame");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::cell::Glyph;

    fn values(cols: usize, rows: usize, data: &[f64]) -> Grid<Sample> {
        Grid::from_data(cols, rows, data.iter().map(|v| Sample::Value(*v)).collect()).unwrap()
    }

    #[test]
    fn test_inside_cells_are_black_blank() {
        let indices = Grid::new(2, 2);
        let mut errors = ErrorBuffer::scalar(2, 2);
        let options = QuantizeOptions {
            dither: true,
            overlay_glyphs: true,
        };

        let cells = quantize_frame(&indices, Quantizer::Direct, options, &mut errors);

        assert!(cells.cells().iter().all(|c| *c == INSIDE_CELL));
        assert_eq!(errors, ErrorBuffer::scalar(2, 2));
    }

    #[test]
    fn test_dither_off_rounds_each_cell_independently() {
        let indices = values(3, 3, &[0.4; 9]);
        let mut errors = ErrorBuffer::scalar(3, 3);

        let cells = quantize_frame(&indices, Quantizer::Direct, QuantizeOptions::default(), &mut errors);

        assert!(cells.cells().iter().all(|c| *c == Cell::blank(NativeColour::Yellow)));
        assert_eq!(errors, ErrorBuffer::scalar(3, 3));
    }

    #[test]
    fn test_direct_dither_carries_error_to_the_right() {
        // interior cell (0, 1) leaves 0.4 * 7 / 16 = 0.175 for (0, 2)
        let indices = values(3, 2, &[0.0, 0.4, 0.4, 0.0, 0.0, 0.0]);
        let mut errors = ErrorBuffer::scalar(3, 2);
        let options = QuantizeOptions {
            dither: true,
            overlay_glyphs: false,
        };

        let cells = quantize_frame(&indices, Quantizer::Direct, options, &mut errors);

        assert_eq!(cells.get(0, 1), Some(Cell::blank(NativeColour::Yellow)));
        assert_eq!(cells.get(0, 2), Some(Cell::blank(NativeColour::Red)));
    }

    #[test]
    fn test_direct_dither_mean_tracks_input() {
        let (cols, rows) = (40, 30);
        let indices = values(cols, rows, &vec![0.3; cols * rows]);
        let mut errors = ErrorBuffer::scalar(cols, rows);
        let options = QuantizeOptions {
            dither: true,
            overlay_glyphs: false,
        };

        let cells = quantize_frame(&indices, Quantizer::Direct, options, &mut errors);

        let red = cells
            .cells()
            .iter()
            .filter(|c| c.background == NativeColour::Red)
            .count();
        let fraction = red as f64 / (cols * rows) as f64;
        assert!(fraction > 0.2 && fraction < 0.4, "fraction {fraction}");
    }

    #[test]
    fn test_overlay_glyph_cells_in_direct_mode() {
        let indices = values(1, 1, &[1.4]);
        let mut errors = ErrorBuffer::scalar(1, 1);
        let options = QuantizeOptions {
            dither: false,
            overlay_glyphs: true,
        };

        let cells = quantize_frame(&indices, Quantizer::Direct, options, &mut errors);

        assert_eq!(
            cells.get(0, 0),
            Some(Cell::overlay(NativeColour::Red, NativeColour::Magenta, Glyph::Partial))
        );
    }

    #[test]
    fn test_chroma_pass_switches_error_buffer() {
        let ramp = ColourRamp::default();
        let targets = NativePalette::blended();
        let indices = values(4, 3, &[0.5; 12]);
        let mut errors = ErrorBuffer::scalar(4, 3);
        let options = QuantizeOptions {
            dither: true,
            overlay_glyphs: true,
        };

        let cells = quantize_frame(
            &indices,
            Quantizer::Chroma {
                ramp: &ramp,
                targets: &targets,
            },
            options,
            &mut errors,
        );

        assert!(errors.is_chroma());
        assert_eq!(cells.len(), 12);
    }

    #[test]
    fn test_chroma_dither_mixes_base_colours() {
        // mid grey without overlays must alternate black and white
        let ramp = ColourRamp::new(vec![Rgb::new(0, 0, 0), Rgb::new(256, 256, 256)]).unwrap();
        let targets = NativePalette::blended();
        let (cols, rows) = (20, 10);
        let indices = values(cols, rows, &vec![0.5; cols * rows]);
        let mut errors = ErrorBuffer::chroma(cols, rows);
        let options = QuantizeOptions {
            dither: true,
            overlay_glyphs: false,
        };

        let cells = quantize_frame(
            &indices,
            Quantizer::Chroma {
                ramp: &ramp,
                targets: &targets,
            },
            options,
            &mut errors,
        );

        let row: Vec<NativeColour> = (1..cols - 1)
            .map(|col| cells.get(0, col).unwrap().background)
            .collect();
        assert!(row.contains(&NativeColour::Black));
        assert!(row.contains(&NativeColour::White));
    }
}
