//! Pixel buffers and the regions and shapes used to slice them
//!
//! This module contains spatial-related functionality including:
//! - Tile size derivation and texture validation
//! - Half, quarter and atlas cell regions

use ndarray::Array3;

/// Tile size derivation and texture validation
pub mod geometry;
/// Rectangular regions within tiles and atlases
pub mod region;

pub use geometry::TileGeometry;

/// 8-bit pixels indexed by (row, column, channel), origin top-left
pub type PixelBuffer = Array3<u8>;
