use std::ops::{Add, AddAssign, Sub};

/// Highest nominal channel value. Terminal colour codes use a 0–256 scale
/// rather than 0–255.
pub const CHANNEL_MAX: i32 = 256;

/// An RGB triple with signed channels.
///
/// Channels are allowed to leave `0..=CHANNEL_MAX` while error diffusion
/// accumulates overshoot; they are only ever compared by relative distance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dr = i64::from(self.r) - i64::from(other.r);
        let dg = i64::from(self.g) - i64::from(other.g);
        let db = i64::from(self.b) - i64::from(other.b);
        dr * dr + dg * dg + db * db
    }

    /// Linear blend towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |from: i32, to: i32| -> i32 {
            (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as i32
        };

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Applies `f` to every channel.
    #[must_use]
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }
}
