use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::sample::Sample;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::iteration_budget::IterationBudget;
use crate::core::fractals::variant::FractalVariant;

/// Squared magnitude at which an orbit counts as escaped.
pub const BAILOUT: f64 = 1024.0;

/// Divisor inside the smoothing logarithm. Must stay below [`BAILOUT`] so
/// the double logarithm is defined and positive at escape.
pub const BANDING: f64 = 4.0;

/// Iterates `z <- f(z) + c` from `z = c` and returns the smoothed escape
/// count, or [`Sample::Inside`] if the orbit survives `max_iterations`.
#[must_use]
pub fn escape_time(variant: FractalVariant, point: Complex, max_iterations: u32) -> Sample {
    let c = match variant {
        // flipped so the ship renders upright with row 0 at the top
        FractalVariant::BurningShip => point.conjugate(),
        _ => point,
    };

    let mut z = c;
    let mut count = 0;

    while z.magnitude_squared() < BAILOUT && count < max_iterations {
        z = step(variant, z) + c;
        count += 1;
    }

    if count == max_iterations {
        return Sample::Inside;
    }

    Sample::Value(smooth(f64::from(count), z.magnitude_squared(), variant.normalization()))
}

/// Continuous correction of an integer escape count.
#[must_use]
pub fn smooth(count: f64, magnitude_squared: f64, normalization: f64) -> f64 {
    count - (magnitude_squared / BANDING).ln().ln() / normalization
}

fn step(variant: FractalVariant, z: Complex) -> Complex {
    match variant {
        FractalVariant::Mandelbrot => z * z,
        FractalVariant::BurningShip => {
            let folded = z.abs_components();
            folded * folded
        }
        FractalVariant::Multibrot(_) => z.powu(variant.power()),
    }
}

/// Evaluates [`escape_time`] for every cell of a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    variant: FractalVariant,
    budget: IterationBudget,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, variant: FractalVariant, budget: IterationBudget) -> Self {
        Self {
            viewport,
            variant,
            budget,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = Sample;
    type Failure = ViewportError;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.viewport.point_at(cell.y, cell.x)?;
        Ok(escape_time(self.variant, c, self.budget.get()))
    }

    fn bounds(&self) -> (u32, u32) {
        (self.viewport.cols(), self.viewport.rows())
    }
}
