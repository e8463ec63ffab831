use std::fmt;

/// Highest multibrot power reachable from a single digit key.
pub const MAX_SELECTOR: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    BurningShip,
    /// `z^n + c` for `n >= 2`.
    Multibrot(u32),
}

impl FractalVariant {
    /// Maps a digit selector to a variant.
    ///
    /// `1` would be the degenerate power-1 multibrot, so it selects the
    /// Burning Ship instead. `2` is the plain Mandelbrot and `3..=9` are
    /// multibrots of that power.
    #[must_use]
    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::BurningShip),
            2 => Some(Self::Mandelbrot),
            3..=MAX_SELECTOR => Some(Self::Multibrot(selector as u32)),
            _ => None,
        }
    }

    /// Inverse of [`Self::from_selector`].
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::BurningShip => 1,
            Self::Mandelbrot => 2,
            Self::Multibrot(n) => n as u8,
        }
    }

    /// Effective power of the iterated map; never below 2.
    #[must_use]
    pub const fn power(self) -> u32 {
        match self {
            Self::Mandelbrot | Self::BurningShip => 2,
            Self::Multibrot(n) => if n < 2 { 2 } else { n },
        }
    }

    /// `ln(power)`, the divisor of the smoothing correction.
    #[must_use]
    pub fn normalization(self) -> f64 {
        f64::from(self.power()).ln()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Multibrot(_) => "Multibrot",
        }
    }
}

impl fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multibrot(n) => write!(f, "{} (z^{})", self.display_name(), n),
            _ => f.write_str(self.display_name()),
        }
    }
}
