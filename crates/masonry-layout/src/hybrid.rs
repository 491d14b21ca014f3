//! Hybrid count/height allocation.
//!
//! Pure height-greedy can leave a column holding a few very tall items next
//! to one holding many short items. The hybrid strategy extends the shortest
//! column only while doing so keeps it strictly below the tallest column;
//! otherwise it falls back to the column with the fewest items.
//!
//! The tallest column is rescanned for every item. The scan is
//! `O(columns)`, and column counts are small.

use masonry_core::{ensure_columns, AllocationError, Result};
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::assignment::ColumnAssignment;
use crate::extremum::{max_index_value, min_index_value};
use crate::greedy::Totals;

/// Assign normalized `heights` by height while there is room, by count otherwise.
pub fn assign(heights: &[u64], columns: usize) -> Result<ColumnAssignment<usize>> {
    ensure_columns(columns)?;

    let mut assignment = ColumnAssignment::empty(columns);
    let mut totals: Totals = smallvec![0; columns];
    let mut counts: SmallVec<[usize; 8]> = smallvec![0; columns];
    let no_columns = || AllocationError::InvalidColumnCount { count: columns };

    for (index, &height) in heights.iter().enumerate() {
        let shortest = min_index_value(&totals).ok_or_else(no_columns)?;
        let tallest = max_index_value(&totals).ok_or_else(no_columns)?;
        let sparsest = min_index_value(&counts).ok_or_else(no_columns)?;

        let target = if shortest.value.saturating_add(height) < tallest.value {
            shortest.index
        } else {
            sparsest.index
        };
        trace!(index, height, column = target, by_height = (target == shortest.index), "placed item");

        assignment.push(target, index);
        totals[target] = totals[target].saturating_add(height);
        counts[target] += 1;
    }

    Ok(assignment)
}
