use crate::core::colour::palette::native::NativeColour;
use crate::core::data::cell::{Cell, Glyph};

/// Cell and residual produced by quantizing one scalar colour index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScalarQuantized {
    pub cell: Cell,
    pub residual: f64,
}

/// Rounds a continuous colour index to a native colour.
///
/// With `overlay_glyphs`, the rounding error is partly shown as a glyph in
/// the neighbouring colour (`bg + 1` above, `bg - 1` below) at coverage
/// `round(|err| * 3) / 3`, and only what the glyph cannot show is left as
/// residual.
#[must_use]
pub fn quantize_direct(index: f64, overlay_glyphs: bool) -> ScalarQuantized {
    let index = if index.is_finite() { index } else { 0.0 };
    let rounded = index.round();
    let background = NativeColour::cycled(rounded as i64);
    let error = index - rounded;

    if !overlay_glyphs {
        return ScalarQuantized {
            cell: Cell::blank(background),
            residual: error,
        };
    }

    let level = ((error.abs() * 3.0).round() as usize).min(Glyph::BLENDS.len());
    let glyph = Glyph::from_level(level);
    let residual = error.signum() * (error.abs() - glyph.coverage());

    let cell = match glyph {
        Glyph::Blank => Cell::blank(background),
        _ => {
            let step = if error > 0.0 { 1 } else { -1 };
            Cell::overlay(background, NativeColour::cycled(rounded as i64 + step), glyph)
        }
    };

    ScalarQuantized { cell, residual }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
    }

    #[test]
    fn test_without_overlay_rounds_to_blank_cell() {
        let q = quantize_direct(2.3, false);

        assert_eq!(q.cell, Cell::blank(NativeColour::Magenta));
        assert_close(q.residual, 0.3);
    }

    #[test]
    fn test_index_wraps_around_cycle() {
        assert_eq!(quantize_direct(7.0, false).cell, Cell::blank(NativeColour::Red));
        assert_eq!(quantize_direct(-1.2, false).cell, Cell::blank(NativeColour::Green));
    }

    #[test]
    fn test_index_zero_is_not_black() {
        assert_eq!(quantize_direct(0.0, false).cell, Cell::blank(NativeColour::Yellow));
        assert_eq!(quantize_direct(0.2, true).cell, Cell::blank(NativeColour::Yellow));
    }

    #[test]
    fn test_overlay_small_error_draws_blank() {
        let q = quantize_direct(3.1, true);

        assert_eq!(q.cell, Cell::blank(NativeColour::Blue));
        assert_close(q.residual, 0.1);
    }

    #[test]
    fn test_overlay_positive_error_uses_next_colour() {
        let q = quantize_direct(1.4, true);

        assert_eq!(
            q.cell,
            Cell::overlay(NativeColour::Red, NativeColour::Magenta, Glyph::Partial)
        );
        assert_close(q.residual, 0.4 - 1.0 / 3.0);
    }

    #[test]
    fn test_overlay_negative_error_uses_previous_colour() {
        let q = quantize_direct(4.6, true);

        // rounds to 5 with error -0.4
        assert_eq!(
            q.cell,
            Cell::overlay(NativeColour::Green, NativeColour::Cyan, Glyph::Partial)
        );
        assert_close(q.residual, -(0.4 - 1.0 / 3.0));
    }

    #[test]
    fn test_overlay_full_glyph_at_half_step() {
        // round(0.5 * 3) = 2
        let q = quantize_direct(-0.5, true);

        assert_eq!(q.cell.glyph, Glyph::Full);
        assert_close(q.residual, 0.5 - 2.0 / 3.0);
    }

    #[test]
    fn test_overlay_wraps_foreground() {
        let q = quantize_direct(5.4, true);

        assert_eq!(
            q.cell,
            Cell::overlay(NativeColour::Green, NativeColour::Yellow, Glyph::Partial)
        );
    }

    #[test]
    fn test_non_finite_index_takes_first_colour() {
        let q = quantize_direct(f64::NAN, true);

        assert_eq!(q.cell, Cell::blank(NativeColour::Yellow));
        assert_eq!(q.residual, 0.0);
    }
}
