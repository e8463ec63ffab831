use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates `algorithm` over every cell in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let (cols, rows) = algorithm.bounds();

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| Point { x, y }))
        .map(|cell| algorithm.compute(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubCoordsAlgorithm {
        cols: u32,
        rows: u32,
    }

    impl FractalAlgorithm for StubCoordsAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
            Ok((cell.y, cell.x))
        }

        fn bounds(&self) -> (u32, u32) {
            (self.cols, self.rows)
        }
    }

    struct StubFailOnCellAlgorithm {
        fail_at: Point,
    }

    impl FractalAlgorithm for StubFailOnCellAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
            if cell == self.fail_at {
                return Err(StubError {});
            }
            Ok(cell.x)
        }

        fn bounds(&self) -> (u32, u32) {
            (4, 4)
        }
    }

    #[test]
    fn test_serial_visits_cells_in_row_major_order() {
        let algorithm = StubCoordsAlgorithm { cols: 3, rows: 2 };

        let results = generate_fractal_serial(&algorithm).unwrap();

        assert_eq!(results, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_serial_empty_bounds_yield_nothing() {
        let algorithm = StubCoordsAlgorithm { cols: 0, rows: 5 };

        assert!(generate_fractal_serial(&algorithm).unwrap().is_empty());
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let algorithm = StubFailOnCellAlgorithm {
            fail_at: Point { x: 2, y: 3 },
        };

        assert_eq!(generate_fractal_serial(&algorithm), Err(StubError {}));
    }
}
