/// Raw value used for points presumed to be in the set.
pub const IN_SET_SENTINEL: f64 = -1.0;

/// Result of evaluating one cell: either the point never escaped, or a
/// continuous value (a smoothed iteration count, or a colour index once the
/// colour map has been applied).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Sample {
    #[default]
    Inside,
    Value(f64),
}

impl Sample {
    #[must_use]
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Inside => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Flattens to a float, with `Inside` mapped to [`IN_SET_SENTINEL`].
    #[must_use]
    pub fn raw(self) -> f64 {
        self.value().unwrap_or(IN_SET_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_raw_is_sentinel() {
        assert_eq!(Sample::Inside.raw(), -1.0);
        assert!(Sample::Inside.is_inside());
        assert_eq!(Sample::Inside.value(), None);
    }

    #[test]
    fn test_value_raw_passes_through() {
        assert_eq!(Sample::Value(3.25).raw(), 3.25);
        assert!(!Sample::Value(0.0).is_inside());
    }
}
