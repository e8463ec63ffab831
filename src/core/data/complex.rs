use std::ops::{Add, Mul};

// hand-rolled rather than num-complex: the escape loop only needs these few ops
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Folds both components into the first quadrant.
    #[must_use]
    pub fn abs_components(self) -> Self {
        Self {
            real: self.real.abs(),
            imag: self.imag.abs(),
        }
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// `self^power` by repeated multiplication. `power` 0 yields one.
    #[must_use]
    pub fn powu(self, power: u32) -> Self {
        let mut result = Self::new(1.0, 0.0);
        for _ in 0..power {
            result = result * self;
        }
        result
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_negative_components() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_abs_components() {
        let c = Complex::new(-1.5, -2.5).abs_components();
        assert_eq!(c, Complex::new(1.5, 2.5));
    }

    #[test]
    fn test_conjugate_flips_imaginary_sign() {
        assert_eq!(Complex::new(0.25, 0.75).conjugate(), Complex::new(0.25, -0.75));
    }

    #[test]
    fn test_powu_matches_repeated_multiplication() {
        let c = Complex::new(0.5, -1.25);
        assert_eq!(c.powu(0), Complex::new(1.0, 0.0));
        assert_eq!(c.powu(1), c);
        assert_eq!(c.powu(2), c * c);
        assert_eq!(c.powu(3), c * c * c);
    }

    #[test]
    fn test_square_of_i_is_minus_one() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i.powu(2), Complex::new(-1.0, 0.0));
    }
}
