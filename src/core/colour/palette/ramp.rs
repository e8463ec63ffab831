use crate::core::data::rgb::Rgb;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampError {
    Empty,
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "colour ramp must have at least one stop"),
        }
    }
}

impl Error for RampError {}

/// A cyclic gradient through a sequence of RGB stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourRamp {
    stops: Vec<Rgb>,
}

impl ColourRamp {
    pub fn new(stops: Vec<Rgb>) -> Result<Self, RampError> {
        if stops.is_empty() {
            return Err(RampError::Empty);
        }

        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Colour at a continuous index: stop `⌊i⌋ mod N` blended towards
    /// stop `⌊i⌋ + 1 mod N` by the fractional part of `i`.
    #[must_use]
    pub fn sample(&self, index: f64) -> Rgb {
        if !index.is_finite() {
            return self.stops[0];
        }

        let n = self.stops.len();
        // reduce before converting so huge indices cannot overflow
        let wrapped = index.rem_euclid(n as f64);
        // tiny negative indices round up to exactly n
        let wrapped = if wrapped < n as f64 { wrapped } else { 0.0 };
        let base = (wrapped.floor() as usize).min(n - 1);
        let from = self.stops[base];
        let to = self.stops[(base + 1) % n];

        from.lerp(to, (wrapped - wrapped.floor()).clamp(0.0, 1.0))
    }
}

impl Default for ColourRamp {
    fn default() -> Self {
        Self {
            stops: vec![
                Rgb::new(0, 24, 112),
                Rgb::new(32, 176, 256),
                Rgb::new(256, 240, 128),
                Rgb::new(208, 64, 0),
            ],
        }
    }
}
