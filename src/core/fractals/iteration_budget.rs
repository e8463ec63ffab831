use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Iteration cap of the escape loop, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget(u32);

impl IterationBudget {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self(max_iterations.max(1))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Multiplies by 3/2, growing by at least one so a budget of one is not
    /// stuck there.
    #[must_use]
    pub fn increased(self) -> Self {
        let scaled = (u64::from(self.0) * 3 / 2).min(u64::from(u32::MAX)) as u32;
        Self::new(scaled.max(self.0.saturating_add(1)))
    }

    /// Multiplies by 2/3, truncating.
    #[must_use]
    pub fn decreased(self) -> Self {
        Self::new((u64::from(self.0) * 2 / 3) as u32)
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self(DEFAULT_MAX_ITERATIONS)
    }
}

impl fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_zero_to_one() {
        assert_eq!(IterationBudget::new(0).get(), 1);
    }

    #[test]
    fn test_increase_by_half() {
        assert_eq!(IterationBudget::new(100).increased().get(), 150);
        assert_eq!(IterationBudget::new(3).increased().get(), 4);
    }

    #[test]
    fn test_increase_escapes_one() {
        assert_eq!(IterationBudget::new(1).increased().get(), 2);
    }

    #[test]
    fn test_decrease_by_third() {
        assert_eq!(IterationBudget::new(150).decreased().get(), 100);
        assert_eq!(IterationBudget::new(100).decreased().get(), 66);
    }

    #[test]
    fn test_decrease_never_reaches_zero() {
        let mut budget = IterationBudget::new(5);
        for _ in 0..20 {
            budget = budget.decreased();
        }
        assert_eq!(budget.get(), 1);
    }

    #[test]
    fn test_increase_saturates() {
        assert_eq!(IterationBudget::new(u32::MAX).increased().get(), u32::MAX);
    }
}
