/// Largest chunk rank multiplied with the naive kernel by default.
///
/// Operands whose longest side is at most `2^7 = 128` skip the recursion.
pub const DEFAULT_NAIVE_THRESHOLD: u32 = 7;

/// Tuning knobs for [`StrassenMultiplier`](crate::StrassenMultiplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyConfig {
    /// Operands with `ceil(log2(max side)) <= naive_threshold` are multiplied
    /// naively. Any value gives the same result; lower values recurse deeper.
    pub naive_threshold: u32,
}

impl MultiplyConfig {
    pub fn new() -> Self {
        Self {
            naive_threshold: DEFAULT_NAIVE_THRESHOLD,
        }
    }

    /// Set the naive threshold. Returns self for builder-style usage.
    pub fn with_naive_threshold(mut self, naive_threshold: u32) -> Self {
        self.naive_threshold = naive_threshold;
        self
    }
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(MultiplyConfig::default().naive_threshold, DEFAULT_NAIVE_THRESHOLD);
    }

    #[test]
    fn test_builder() {
        let config = MultiplyConfig::new().with_naive_threshold(2);
        assert_eq!(config.naive_threshold, 2);
    }
}
