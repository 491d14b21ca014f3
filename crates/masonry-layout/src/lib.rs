//! Column allocation for masonry layouts.
//!
//! This crate decides which column each tile of a waterfall layout goes into
//! so that columns end up close in length while keeping a sensible reading
//! order. It does not fetch, cache, or render anything.
//!
//! # Strategies
//!
//! 1. **Round-robin**: item `i` goes to column `i % columns`
//! 2. **Greedy min-height**: always extend the shortest column
//! 3. **Hybrid**: shortest column while it stays below the tallest, otherwise
//!    the column with the fewest items
//! 4. **Contiguous**: order-preserving split minimizing the tallest column,
//!    found by binary search over the answer
//!
//! Height-aware strategies first normalize every tile to a canonical width
//! and fold the inter-item gap into its height. Columns never reorder their
//! items, and ties always go to the leftmost column.
//!
//! # Example
//!
//! ```
//! use masonry_core::{AllocatorOptions, Dimensions};
//! use masonry_layout::{allocate, Strategy};
//!
//! let tiles = vec![
//!     Dimensions::new(1000, 30),
//!     Dimensions::new(1000, 30),
//!     Dimensions::new(1000, 30),
//!     Dimensions::new(1000, 30),
//!     Dimensions::new(1000, 30),
//! ];
//! let columns = allocate(tiles, 2, Strategy::Contiguous, &AllocatorOptions::default())?;
//!
//! assert_eq!(columns.column_sizes(), vec![3, 2]);
//! # Ok::<(), masonry_core::AllocationError>(())
//! ```

mod assignment;
mod compute;
mod extremum;
mod strategy;

pub mod greedy;
pub mod hybrid;
pub mod normalize;
pub mod partition;
pub mod round_robin;

pub use assignment::ColumnAssignment;
pub use compute::{allocate, allocate_indices, ColumnAllocator};
pub use extremum::{max_index_value, min_index_value, Extremum};
pub use normalize::{normalize, normalize_tile, normalized_heights};
pub use strategy::Strategy;
