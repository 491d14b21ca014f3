//! Optimal contiguous partitioning.
//!
//! Splits the sequence into `columns` consecutive runs so that the tallest
//! run is as short as possible ("split array into k subarrays minimizing the
//! largest sum"). The bound is found by binary search over the answer:
//!
//! 1. The lower bound is the tallest single item, the upper bound the total.
//! 2. A candidate is feasible when a greedy left-to-right walk needs no more
//!    than `columns` groups to stay under it.
//! 3. The columns are rebuilt by repeating the walk with the found bound.
//!
//! The search advances by `step` (the normalization gap by default) instead
//! of 1. Normalized heights are gap padded, so this converges in fewer
//! iterations at the price of a bound that may exceed the true minimum by
//! less than two steps. Changing the step changes results.
//!
//! Sums saturate at `u64::MAX`, so extreme heights still yield a complete
//! assignment.

use masonry_core::{ensure_columns, Result};
use tracing::debug;

use crate::assignment::ColumnAssignment;

/// Number of contiguous groups needed to keep every group sum at or below
/// `limit`, or `None` when a single height already exceeds it.
///
/// An empty sequence needs one (empty) group.
pub fn count_groups(heights: &[u64], limit: u64) -> Option<usize> {
    let mut groups = 0;
    let mut sum: u64 = 0;

    for &height in heights {
        if height > limit {
            return None;
        }
        sum = sum.saturating_add(height);
        if sum > limit {
            groups += 1;
            sum = height;
        }
    }

    Some(groups + 1)
}

fn is_feasible(heights: &[u64], limit: u64, columns: usize) -> bool {
    count_groups(heights, limit).is_some_and(|groups| groups <= columns)
}

/// Smallest tested bound on the tallest column reachable with `columns`
/// contiguous groups, searching in increments of `step`.
///
/// When the coarse search never lands on a feasible candidate the total
/// height is returned, which is always feasible.
pub fn minimal_column_height(heights: &[u64], columns: usize, step: u64) -> Result<u64> {
    ensure_columns(columns)?;
    let step = step.max(1);

    let mut low = heights.iter().copied().max().unwrap_or(0);
    let mut high = heights.iter().fold(0u64, |total, &h| total.saturating_add(h));
    let mut best = high;
    let mut iterations = 0u32;

    while low <= high {
        iterations += 1;
        let mid = low + (high - low) / 2;

        if is_feasible(heights, mid, columns) {
            best = mid;
            match mid.checked_sub(step) {
                Some(next) => high = next,
                None => break,
            }
        } else {
            low = mid.saturating_add(step);
        }
    }

    debug!(bound = best, iterations, step, "contiguous partition bound");
    Ok(best)
}

/// Split `heights` into `columns` contiguous runs, none taller than
/// `limit` unless the runs would otherwise overflow the last column.
pub fn split(heights: &[u64], columns: usize, limit: u64) -> Result<ColumnAssignment<usize>> {
    ensure_columns(columns)?;

    let mut assignment = ColumnAssignment::empty(columns);
    let last = columns - 1;
    let mut current = 0;
    let mut accum: u64 = 0;

    for (index, &height) in heights.iter().enumerate() {
        if accum.saturating_add(height) > limit && current < last {
            current += 1;
            accum = 0;
        }
        accum = accum.saturating_add(height);
        assignment.push(current, index);
    }

    Ok(assignment)
}

/// Contiguous assignment of normalized `heights` minimizing the tallest column.
pub fn assign(heights: &[u64], columns: usize, step: u64) -> Result<ColumnAssignment<usize>> {
    let limit = minimal_column_height(heights, columns, step)?;
    split(heights, columns, limit)
}
