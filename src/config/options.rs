//! Engine configuration.
//!
//! `EngineOptions` selects the dot-product kernel used by every dot-based operation
//! (dot products, projections, angles, matrix products) and the row count at which
//! matrix kernels fan out across the rayon pool when the `rayon` feature is enabled.

use crate::kernels::DotKernel;

/// Engine kernel selection & parallel cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Kernel for dot-based operations
    pub dot_kernel: DotKernel,

    /// Minimum number of output rows before matrix kernels run rows in parallel
    pub parallel_threshold: usize,
}

impl EngineOptions {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            dot_kernel: DotKernel::default(),
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
