//! Error types for the allocation engine.

use thiserror::Error;

/// Errors raised when the input to an allocation call is invalid.
///
/// An empty item sequence is not an error: every strategy answers it with
/// the requested number of empty columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Item {index} has invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { index: usize, width: u32, height: u32 },

    #[error("Invalid column count {count}: at least one column is required")]
    InvalidColumnCount { count: usize },

    #[error("Invalid normalization width {width}: must be positive")]
    InvalidTargetWidth { width: u32 },

    #[error("Unknown allocation strategy: {name}")]
    UnknownStrategy { name: String },
}

/// Result alias used throughout the engine.
pub type Result<T, E = AllocationError> = std::result::Result<T, E>;

/// Reject a column count of zero.
pub fn ensure_columns(count: usize) -> Result<()> {
    if count == 0 {
        return Err(AllocationError::InvalidColumnCount { count });
    }
    Ok(())
}
