use crate::core::data::point::Point;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure>;

    /// Grid size as `(cols, rows)`.
    fn bounds(&self) -> (u32, u32);
}
