//! Allocation entry points.

use masonry_core::{ensure_columns, AllocatorOptions, Result, Tile};
use tracing::debug;

use crate::assignment::ColumnAssignment;
use crate::normalize::normalized_heights;
use crate::strategy::Strategy;
use crate::{greedy, hybrid, partition, round_robin};

/// Compute which column each item goes into, as input indices.
///
/// Every call is a full, stateless recomputation. Height-aware strategies
/// normalize `items` first; round-robin never reads geometry, so it accepts
/// items whose dimensions would fail normalization.
pub fn allocate_indices<T: Tile>(
    items: &[T],
    columns: usize,
    strategy: Strategy,
    options: &AllocatorOptions,
) -> Result<ColumnAssignment<usize>> {
    ensure_columns(columns)?;
    debug!(%strategy, items = items.len(), columns, "allocating columns");

    match strategy {
        Strategy::RoundRobin => round_robin::assign(items.len(), columns),
        Strategy::GreedyHeight => greedy::assign(&heights(items, options)?, columns),
        Strategy::Hybrid => hybrid::assign(&heights(items, options)?, columns),
        Strategy::Contiguous => partition::assign(
            &heights(items, options)?,
            columns,
            options.effective_search_step(),
        ),
    }
}

fn heights<T: Tile>(items: &[T], options: &AllocatorOptions) -> Result<Vec<u64>> {
    options.validate()?;
    normalized_heights(items, options.target_width, options.gap)
}

/// Distribute `items` into `columns` columns with the given strategy.
///
/// Items are moved into the result unchanged; only derived copies of their
/// geometry are used for computation.
pub fn allocate<T: Tile>(
    items: Vec<T>,
    columns: usize,
    strategy: Strategy,
    options: &AllocatorOptions,
) -> Result<ColumnAssignment<T>> {
    let indices = allocate_indices(&items, columns, strategy, options)?;
    Ok(indices.gather(items))
}

/// Reusable allocator configuration.
///
/// Holds the column count, strategy, and options between calls; never any
/// item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAllocator {
    columns: usize,
    strategy: Strategy,
    options: AllocatorOptions,
}

impl ColumnAllocator {
    /// Allocator for `columns` columns using the default strategy.
    pub fn new(columns: usize) -> Result<Self> {
        ensure_columns(columns)?;
        Ok(Self {
            columns,
            strategy: Strategy::default(),
            options: AllocatorOptions::default(),
        })
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the normalization and search options.
    pub fn with_options(mut self, options: AllocatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn options(&self) -> &AllocatorOptions {
        &self.options
    }

    pub fn allocate<T: Tile>(&self, items: Vec<T>) -> Result<ColumnAssignment<T>> {
        allocate(items, self.columns, self.strategy, &self.options)
    }

    pub fn allocate_indices<T: Tile>(&self, items: &[T]) -> Result<ColumnAssignment<usize>> {
        allocate_indices(items, self.columns, self.strategy, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masonry_core::{AllocationError, Dimensions};

    #[derive(Debug, Clone, PartialEq)]
    struct MediaItem {
        id: &'static str,
        url: &'static str,
        width: u32,
        height: u32,
    }

    impl Tile for MediaItem {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }
    }

    fn media(id: &'static str, width: u32, height: u32) -> MediaItem {
        MediaItem { id, url: "/media/preview", width, height }
    }

    /// Tiles already at the canonical width: normalized height is `h + 10`.
    fn canonical(heights: &[u32]) -> Vec<Dimensions> {
        heights.iter().map(|&h| Dimensions::new(1000, h)).collect()
    }

    #[test]
    fn test_contiguous_minimal_column() {
        let items = canonical(&[30, 30, 30, 30, 30]);
        let assignment = allocate_indices(&items, 2, Strategy::Contiguous, &AllocatorOptions::default()).unwrap();

        assert_eq!(assignment.into_columns(), vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_items_keep_their_fields() {
        let items = vec![media("a", 800, 600), media("b", 600, 800), media("c", 1000, 1000)];
        let assignment = allocate(items.clone(), 2, Strategy::GreedyHeight, &AllocatorOptions::default()).unwrap();

        // a -> 760, b -> 1343, c -> 1010
        let ids: Vec<Vec<&str>> = assignment
            .iter()
            .map(|column| column.iter().map(|item| item.id).collect())
            .collect();
        assert_eq!(ids, vec![vec!["a", "c"], vec!["b"]]);
        assert!(assignment.iter().flatten().all(|item| item.url == "/media/preview"));
        assert_eq!(items[1], media("b", 600, 800));
    }

    #[test]
    fn test_round_robin_skips_geometry() {
        let items = vec![Dimensions::new(0, 0), Dimensions::new(0, 5), Dimensions::new(7, 0)];
        let assignment = allocate(items, 2, Strategy::RoundRobin, &AllocatorOptions::default()).unwrap();
        assert_eq!(assignment.column_sizes(), vec![2, 1]);
    }

    #[test]
    fn test_round_robin_ignores_options() {
        let items = canonical(&[10, 20, 30]);
        let options = AllocatorOptions::default().with_target_width(0);
        let assignment = allocate_indices(&items, 2, Strategy::RoundRobin, &options).unwrap();
        assert_eq!(assignment.into_columns(), vec![vec![0, 2], vec![1]]);

        assert_eq!(
            allocate_indices(&items, 2, Strategy::Hybrid, &options),
            Err(AllocationError::InvalidTargetWidth { width: 0 })
        );
    }

    #[test]
    fn test_extreme_heights_do_not_overflow() {
        // Each normalized height is close to u64::MAX, so any sum saturates.
        let items = [Dimensions::new(1, u32::MAX); 2];
        let options = AllocatorOptions::default().with_target_width(u32::MAX);

        for strategy in Strategy::ALL {
            let split = allocate_indices(&items, 2, strategy, &options).unwrap();
            assert_eq!(split.into_columns(), vec![vec![0], vec![1]], "{strategy}");

            let single = allocate_indices(&items, 1, strategy, &options).unwrap();
            assert_eq!(single.into_columns(), vec![vec![0, 1]], "{strategy}");
        }
    }

    #[test]
    fn test_height_strategies_reject_bad_dimensions() {
        let items = vec![Dimensions::new(100, 100), Dimensions::new(0, 100)];
        for strategy in [Strategy::GreedyHeight, Strategy::Hybrid, Strategy::Contiguous] {
            assert_eq!(
                allocate_indices(&items, 2, strategy, &AllocatorOptions::default()),
                Err(AllocationError::InvalidDimension { index: 1, width: 0, height: 100 })
            );
        }
    }

    #[test]
    fn test_zero_columns_rejected_everywhere() {
        for strategy in Strategy::ALL {
            assert_eq!(
                allocate_indices::<Dimensions>(&[], 0, strategy, &AllocatorOptions::default()),
                Err(AllocationError::InvalidColumnCount { count: 0 })
            );
        }
        assert!(ColumnAllocator::new(0).is_err());
    }

    #[test]
    fn test_empty_input_yields_empty_columns() {
        for strategy in Strategy::ALL {
            let assignment = allocate::<Dimensions>(Vec::new(), 4, strategy, &AllocatorOptions::default()).unwrap();
            assert_eq!(assignment.column_count(), 4);
            assert!(assignment.is_empty());
        }
    }

    #[test]
    fn test_gap_changes_heights() {
        // A large gap dwarfs the native heights, so greedy alternates.
        let items = canonical(&[10, 300, 10, 10]);
        let options = AllocatorOptions::default().with_gap(0);
        let tight = allocate_indices(&items, 2, Strategy::GreedyHeight, &options).unwrap();
        assert_eq!(tight.into_columns(), vec![vec![0, 2, 3], vec![1]]);

        let options = AllocatorOptions::default().with_gap(100_000);
        let loose = allocate_indices(&items, 2, Strategy::GreedyHeight, &options).unwrap();
        assert_eq!(loose.into_columns(), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_allocator_value_holder() {
        let allocator = ColumnAllocator::new(3)
            .unwrap()
            .with_strategy(Strategy::RoundRobin)
            .with_options(AllocatorOptions::default().with_gap(90));

        assert_eq!(allocator.columns(), 3);
        assert_eq!(allocator.strategy(), Strategy::RoundRobin);
        assert_eq!(allocator.options().gap, 90);

        let items = canonical(&[1, 2, 3, 4, 5, 6, 7]);
        let first = allocator.allocate_indices(&items).unwrap();
        let second = allocator.allocate(items).unwrap();
        assert_eq!(first.column_sizes(), vec![3, 2, 2]);
        assert_eq!(second.column_sizes(), vec![3, 2, 2]);
    }

    #[test]
    fn test_allocator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColumnAllocator>();
    }
}
