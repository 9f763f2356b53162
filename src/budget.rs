/// Width reserved for the ordinal prefix, sized for `"[99/99] "`-scale
/// markers. Sequences beyond 99 chunks can outgrow the reserve; accepted
/// limitation inherited from the source design.
pub const PREFIX_RESERVE: usize = 8;

/// Default maximum chunk length (the Discord message limit).
pub const DEFAULT_MAX_LENGTH: usize = 2000;

/// Length limits for one chunking run.
///
/// `max` is the channel's hard cap on a delivered fragment; `effective` is
/// what remains for content once the ordinal prefix reserve is subtracted.
/// All lengths are counted in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    max: usize,
    effective: usize,
}

impl Budget {
    /// Build a budget from the channel's maximum fragment length.
    ///
    /// A maximum smaller than the prefix reserve degrades to an effective
    /// budget of one character, so pathological limits slice aggressively
    /// instead of failing.
    pub fn new(max_length: usize) -> Self {
        let max = max_length.max(1);
        let effective = max.saturating_sub(PREFIX_RESERVE).max(1);
        Self { max, effective }
    }

    /// Hard cap on a delivered fragment, prefix included.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Content capacity with the prefix reserve subtracted.
    pub fn effective(&self) -> usize {
        self.effective
    }
}

#[cfg(test)]
mod budget_tests {
    use super::*;

    #[test]
    fn test_effective_subtracts_reserve() {
        let budget = Budget::new(2000);
        assert_eq!(budget.max(), 2000);
        assert_eq!(budget.effective(), 2000 - PREFIX_RESERVE);
    }

    #[test]
    fn test_tiny_budget_degrades_instead_of_failing() {
        let budget = Budget::new(3);
        assert_eq!(budget.max(), 3);
        assert_eq!(budget.effective(), 1);
    }

    #[test]
    fn test_zero_budget_is_clamped() {
        let budget = Budget::new(0);
        assert_eq!(budget.max(), 1);
        assert_eq!(budget.effective(), 1);
    }
}
