//! Rescaling of items to a canonical width.
//!
//! Heights of items with different native aspect ratios only become
//! comparable once every item shares the same width. The normalizer scales
//! each item to `target_width`, truncates, and folds the inter-item gap into
//! the height.
//!
//! Normalizing an already normalized item adds the gap a second time; callers
//! must normalize raw geometry exactly once.

use masonry_core::{AllocationError, NormalizedTile, Result, Tile};

/// Rescale one item. Arithmetic is exact integer floor division.
pub fn normalize_tile<T: Tile + ?Sized>(
    item: &T,
    target_width: u32,
    gap: u32,
) -> Option<NormalizedTile> {
    let size = item.dimensions();
    if !size.is_valid() {
        return None;
    }

    let width = u64::from(size.width);
    let height = u64::from(size.height);
    let target = u64::from(target_width);
    Some(NormalizedTile {
        width: width * target / width,
        height: height * target / width + u64::from(gap),
    })
}

/// Rescale every item, preserving order. The input is left untouched.
pub fn normalize<T: Tile>(items: &[T], target_width: u32, gap: u32) -> Result<Vec<NormalizedTile>> {
    if target_width == 0 {
        return Err(AllocationError::InvalidTargetWidth { width: target_width });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            normalize_tile(item, target_width, gap).ok_or_else(|| {
                let size = item.dimensions();
                AllocationError::InvalidDimension {
                    index,
                    width: size.width,
                    height: size.height,
                }
            })
        })
        .collect()
}

/// Normalized heights only, the input every height-aware strategy works on.
pub fn normalized_heights<T: Tile>(items: &[T], target_width: u32, gap: u32) -> Result<Vec<u64>> {
    Ok(normalize(items, target_width, gap)?
        .into_iter()
        .map(|tile| tile.height)
        .collect())
}
