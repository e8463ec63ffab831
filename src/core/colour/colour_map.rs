use crate::core::data::sample::Sample;

pub const DEFAULT_EXPONENT: f64 = 0.75;
pub const DEFAULT_LINEAR_SCALE: f64 = 1.0;
pub const DEFAULT_OFFSET: f64 = 0.0;

pub const EXPONENT_STEP: f64 = 0.05;
pub const LINEAR_SCALE_STEP: f64 = 1.5;
pub const OFFSET_STEP: f64 = 1.0;

/// Interactive controls that turn a smoothed iteration count into a colour
/// index: `max(count, 0)^exponent * linear_scale + offset`.
///
/// `exponent` reshapes contrast near the set boundary, `linear_scale`
/// stretches the whole gradient and `offset` rotates the colour cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourMapParams {
    pub exponent: f64,
    pub linear_scale: f64,
    pub offset: f64,
}

impl Default for ColourMapParams {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            linear_scale: DEFAULT_LINEAR_SCALE,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl ColourMapParams {
    #[must_use]
    pub fn with_exponent_delta(self, delta: f64) -> Self {
        Self {
            exponent: self.exponent + delta,
            ..self
        }
    }

    #[must_use]
    pub fn with_linear_factor(self, factor: f64) -> Self {
        Self {
            linear_scale: self.linear_scale * factor,
            ..self
        }
    }

    #[must_use]
    pub fn with_offset_delta(self, delta: f64) -> Self {
        Self {
            offset: self.offset + delta,
            ..self
        }
    }

    /// Offset lifted into `[0, ncolors)` by repeated addition when negative.
    #[must_use]
    pub fn normalized_offset(&self, ncolors: usize) -> f64 {
        let ncolors = ncolors.max(1) as f64;
        let mut offset = self.offset;
        if offset < 0.0 {
            offset += (-offset / ncolors).ceil() * ncolors;
        }
        // the jump above can land one ulp short
        while offset < 0.0 {
            offset += ncolors;
        }
        offset
    }
}

/// Maps a smoothed count to a continuous colour index. `Inside` passes
/// through untouched.
#[must_use]
pub fn map_to_index(sample: Sample, params: &ColourMapParams, ncolors: usize) -> Sample {
    match sample {
        Sample::Inside => Sample::Inside,
        Sample::Value(count) => {
            // smoothing can dip slightly below zero near iteration boundaries
            let count = count.max(0.0);
            let index = count.powf(params.exponent) * params.linear_scale
                + params.normalized_offset(ncolors);
            Sample::Value(index)
        }
    }
}
