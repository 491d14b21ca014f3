//! Configuration for allocation calls.

use std::num::NonZeroU32;

use crate::errors::{AllocationError, Result};

/// Canonical width every item is rescaled to before height comparison.
pub const DEFAULT_TARGET_WIDTH: u32 = 1000;

/// Gap added below every normalized item.
pub const DEFAULT_GAP: u32 = 10;

/// Options shared by the height-aware strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AllocatorOptions {
    /// Width items are scaled to (aspect ratio preserved)
    pub target_width: u32,
    /// Gap folded into each normalized height
    pub gap: u32,
    /// Step of the contiguous partitioner's binary search; `None` follows `gap`
    pub search_step: Option<NonZeroU32>,
}

impl Default for AllocatorOptions {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            gap: DEFAULT_GAP,
            search_step: None,
        }
    }
}

impl AllocatorOptions {
    /// Set the canonical normalization width.
    pub fn with_target_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self
    }

    /// Set the inter-item gap.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Decouple the binary-search step from the gap.
    pub fn with_search_step(mut self, step: NonZeroU32) -> Self {
        self.search_step = Some(step);
        self
    }

    /// Effective search step. A zero gap degrades to a unit step.
    pub fn effective_search_step(&self) -> u64 {
        match self.search_step {
            Some(step) => u64::from(step.get()),
            None => u64::from(self.gap.max(1)),
        }
    }

    /// Check the options before any item is touched.
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(AllocationError::InvalidTargetWidth { width: self.target_width });
        }
        Ok(())
    }
}
