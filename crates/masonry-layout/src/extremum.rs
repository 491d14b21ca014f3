//! Leftmost extremum scans.
//!
//! Every strategy picks columns through these helpers so ties always resolve
//! to the lowest column index.

/// Position and value of an extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum<T> {
    pub index: usize,
    pub value: T,
}

/// Smallest value, keeping the first index on ties. `None` for an empty slice.
pub fn min_index_value<T: PartialOrd + Copy>(values: &[T]) -> Option<Extremum<T>> {
    let (&first, rest) = values.split_first()?;
    let mut best = Extremum { index: 0, value: first };
    for (offset, &value) in rest.iter().enumerate() {
        if value < best.value {
            best = Extremum { index: offset + 1, value };
        }
    }
    Some(best)
}

/// Largest value, keeping the first index on ties. `None` for an empty slice.
pub fn max_index_value<T: PartialOrd + Copy>(values: &[T]) -> Option<Extremum<T>> {
    let (&first, rest) = values.split_first()?;
    let mut best = Extremum { index: 0, value: first };
    for (offset, &value) in rest.iter().enumerate() {
        if value > best.value {
            best = Extremum { index: offset + 1, value };
        }
    }
    Some(best)
}
