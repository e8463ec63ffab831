use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates `algorithm` over every cell using rayon's work-stealing
/// scheduler, one task per row.
///
/// Results come back in row-major order, identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let (cols, rows) = algorithm.bounds();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..rows)
        .into_par_iter()
        .map(|y| {
            (0..cols)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
