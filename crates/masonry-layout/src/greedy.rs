//! Greedy min-height allocation.
//!
//! Items are taken in arrival order and each one extends the currently
//! shortest column. This is locally optimal per step only; it is a heuristic,
//! not an optimal partition.

use masonry_core::{ensure_columns, AllocationError, Result};
use smallvec::{smallvec, SmallVec};

use crate::assignment::ColumnAssignment;
use crate::extremum::min_index_value;

/// Per-column accumulators; column counts are small in practice.
pub(crate) type Totals = SmallVec<[u64; 8]>;

/// Assign normalized `heights` to the shortest column, leftmost on ties.
pub fn assign(heights: &[u64], columns: usize) -> Result<ColumnAssignment<usize>> {
    ensure_columns(columns)?;

    let mut assignment = ColumnAssignment::empty(columns);
    let mut totals: Totals = smallvec![0; columns];

    for (index, &height) in heights.iter().enumerate() {
        let shortest = min_index_value(&totals)
            .ok_or(AllocationError::InvalidColumnCount { count: columns })?;
        assignment.push(shortest.index, index);
        totals[shortest.index] = shortest.value.saturating_add(height);
    }

    Ok(assignment)
}
