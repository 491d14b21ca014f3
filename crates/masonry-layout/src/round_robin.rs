//! Round-robin allocation.

use masonry_core::{ensure_columns, Result};

use crate::assignment::ColumnAssignment;

/// Item `i` goes to column `i % columns`.
pub fn assign(len: usize, columns: usize) -> Result<ColumnAssignment<usize>> {
    ensure_columns(columns)?;

    let mut assignment = ColumnAssignment::empty(columns);
    for index in 0..len {
        assignment.push(index % columns, index);
    }
    Ok(assignment)
}
