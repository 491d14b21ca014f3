//! Column assignment output.
//!
//! An assignment always holds exactly the requested number of columns, even
//! when some stay empty, and every input item lands in exactly one of them.
//! Strategies compute assignments of input indices; [`ColumnAssignment::gather`]
//! then moves the caller's items into place without cloning.

use std::slice;

/// Items distributed over a fixed number of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnAssignment<T> {
    columns: Vec<Vec<T>>,
}

impl<T> ColumnAssignment<T> {
    /// `count` empty columns.
    pub fn empty(count: usize) -> Self {
        Self {
            columns: (0..count).map(|_| Vec::new()).collect(),
        }
    }

    pub(crate) fn push(&mut self, column: usize, item: T) {
        self.columns[column].push(item);
    }

    /// Number of columns, including empty ones.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of items across all columns.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Whether no column holds an item.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Items of one column.
    pub fn column(&self, index: usize) -> Option<&[T]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    /// Iterate columns in order.
    pub fn iter(&self) -> slice::Iter<'_, Vec<T>> {
        self.columns.iter()
    }

    /// Number of items per column.
    pub fn column_sizes(&self) -> Vec<usize> {
        self.columns.iter().map(Vec::len).collect()
    }

    /// Sum of `measure` over each column.
    pub fn column_totals(&self, mut measure: impl FnMut(&T) -> u64) -> Vec<u64> {
        self.columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .fold(0u64, |total, item| total.saturating_add(measure(item)))
            })
            .collect()
    }

    pub fn into_columns(self) -> Vec<Vec<T>> {
        self.columns
    }

    /// Concatenate columns in column order.
    pub fn into_items(self) -> Vec<T> {
        self.columns.into_iter().flatten().collect()
    }

    /// Transform every item, keeping its column and position.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ColumnAssignment<U> {
        ColumnAssignment {
            columns: self
                .columns
                .into_iter()
                .map(|column| column.into_iter().map(&mut f).collect())
                .collect(),
        }
    }
}

impl ColumnAssignment<usize> {
    /// Move `items` into the columns named by this index assignment.
    ///
    /// Indices must come from an allocation over the same `items`, so each
    /// index is in range and appears exactly once. Debug builds panic when
    /// an index is out of range, repeated, or missing.
    pub fn gather<T>(self, items: Vec<T>) -> ColumnAssignment<T> {
        let expected = items.len();
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let gathered = ColumnAssignment {
            columns: self
                .columns
                .into_iter()
                .map(|column| {
                    column
                        .into_iter()
                        .filter_map(|index| slots.get_mut(index).and_then(Option::take))
                        .collect()
                })
                .collect(),
        };
        debug_assert!(
            gathered.len() == expected && slots.iter().all(Option::is_none),
            "index assignment does not cover {expected} items exactly once"
        );
        gathered
    }

    /// Per-column sums of `heights[index]`.
    pub fn column_heights(&self, heights: &[u64]) -> Vec<u64> {
        self.column_totals(|&index| heights.get(index).copied().unwrap_or(0))
    }
}

impl<T> IntoIterator for ColumnAssignment<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ColumnAssignment<T> {
    type Item = &'a Vec<T>;
    type IntoIter = slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
