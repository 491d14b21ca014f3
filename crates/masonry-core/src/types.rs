//! Item geometry.

/// Anything with a native pixel size that can be placed in a column.
///
/// The engine reads geometry only through this trait, so caller types may
/// carry arbitrary extra fields (ids, urls, metadata) that are ignored.
pub trait Tile {
    /// Native width in pixels.
    fn width(&self) -> u32;

    /// Native height in pixels.
    fn height(&self) -> u32;

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }
}

impl<T: Tile + ?Sized> Tile for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<T: Tile + ?Sized> Tile for Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// `(width, height)` pairs.
impl Tile for (u32, u32) {
    fn width(&self) -> u32 {
        self.0
    }

    fn height(&self) -> u32 {
        self.1
    }
}

/// Native pixel size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides are non-zero, so the item can be normalized.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Tile for Dimensions {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Item geometry rescaled to the canonical width.
///
/// `height` already contains the inter-item gap, so column heights are plain
/// sums of normalized heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedTile {
    pub width: u64,
    pub height: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Photo {
        #[allow(dead_code)]
        id: &'static str,
        size: Dimensions,
    }

    impl Tile for Photo {
        fn width(&self) -> u32 {
            self.size.width
        }

        fn height(&self) -> u32 {
            self.size.height
        }
    }

    #[test]
    fn test_tile_through_references() {
        let photo = Photo { id: "a", size: Dimensions::new(640, 480) };
        let by_ref: &Photo = &photo;
        let boxed: Box<dyn Tile> = Box::new(Dimensions::new(3, 4));

        assert_eq!(by_ref.width(), 640);
        assert_eq!((&by_ref).height(), 480);
        assert_eq!(boxed.width(), 3);
        assert_eq!((1920u32, 1080u32).height(), 1080);
    }

    #[test]
    fn test_dimensions_validity() {
        let photo = Photo { id: "b", size: Dimensions::new(200, 100) };
        assert_eq!(photo.dimensions(), Dimensions::new(200, 100));
        assert!(photo.dimensions().is_valid());
        assert!(!Dimensions::new(0, 10).is_valid());
        assert!(!(10u32, 0u32).dimensions().is_valid());
        assert_eq!(Dimensions::from((4, 5)), Dimensions::new(4, 5));
    }
}
