//! Core types, options, and errors for the masonry column allocation engine.
//!
//! This crate provides the foundational types shared by the allocation
//! strategies in `masonry-layout`:
//! - Item geometry (`Tile`, `Dimensions`, `NormalizedTile`)
//! - Per-call configuration (`AllocatorOptions`)
//! - Error types

pub mod errors;
pub mod options;
pub mod types;

pub use errors::*;
pub use options::*;
pub use types::*;
