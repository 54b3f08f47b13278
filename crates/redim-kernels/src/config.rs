//! Kernel configuration

/// Block length the contiguous fast path must exceed by default
pub const DEFAULT_FAST_PATH_THRESHOLD: usize = 16;

/// Tuning knobs for the reduction kernels
///
/// None of these settings change results except `accelerated_weighted_sum`,
/// whose matrix-vector substitute may combine products in a different order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelConfig {
    /// Allow the contiguous fast path
    pub fast_path: bool,
    /// Block length must be strictly greater than this to use the fast path
    pub fast_path_threshold: usize,
    /// Allow the matrix-vector substitute for weighted sums over contiguous floats
    pub accelerated_weighted_sum: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            fast_path: true,
            fast_path_threshold: DEFAULT_FAST_PATH_THRESHOLD,
            accelerated_weighted_sum: true,
        }
    }
}

impl KernelConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that always takes the general strided traversal
    pub fn general_only() -> Self {
        Self {
            fast_path: false,
            fast_path_threshold: DEFAULT_FAST_PATH_THRESHOLD,
            accelerated_weighted_sum: false,
        }
    }

    /// Enable or disable the contiguous fast path
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    /// Set the block length threshold of the fast path
    pub fn with_fast_path_threshold(mut self, threshold: usize) -> Self {
        self.fast_path_threshold = threshold;
        self
    }

    /// Enable or disable the accelerated weighted sum
    pub fn with_accelerated_weighted_sum(mut self, enabled: bool) -> Self {
        self.accelerated_weighted_sum = enabled;
        self
    }

    /// Whether a block of `block_len` contiguous elements qualifies for the fast path
    pub fn takes_fast_path(&self, block_len: usize) -> bool {
        self.fast_path && block_len > self.fast_path_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = KernelConfig::new();
        assert!(!config.takes_fast_path(16));
        assert!(config.takes_fast_path(17));
    }

    #[test]
    fn test_general_only_never_takes_fast_path() {
        let config = KernelConfig::general_only();
        assert!(!config.takes_fast_path(1 << 20));
        assert!(!config.accelerated_weighted_sum);
    }

    #[test]
    fn test_builder() {
        let config = KernelConfig::new()
            .with_fast_path_threshold(0)
            .with_accelerated_weighted_sum(false);
        assert!(config.takes_fast_path(1));
        assert!(!config.accelerated_weighted_sum);
    }
}
