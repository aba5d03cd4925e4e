//! Tile size derivation and 2x2 texture shape validation
//!
//! The source tile fixes the tile size `T`. A compact 2x2 texture holds four
//! `(T+1)` x `(T+1)` quadrants that overlap by one pixel along their shared
//! edges, so it must measure exactly `2T+1` pixels along both axes.

use crate::io::configuration::{ALPHA_CHANNELS, OUTPUT_CHANNELS};
use crate::io::error::{Result, invalid_geometry};
use ndarray::ArrayView3;

/// Pixel dimensions shared by the source tile, texture and atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    size: usize,
    channels: usize,
}

impl TileGeometry {
    /// Derive the geometry from a source tile
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not square, has an odd or zero edge
    /// length, or does not have 3 or 4 channels
    pub fn from_source(source: &ArrayView3<'_, u8>) -> Result<Self> {
        let (rows, cols, channels) = source.dim();

        if rows != cols {
            return Err(invalid_geometry(&format!(
                "source tile must be square, got {rows}x{cols}"
            )));
        }
        if rows == 0 || rows % 2 != 0 {
            return Err(invalid_geometry(&format!(
                "source tile size must be a positive even number, got {rows}"
            )));
        }
        if channels != OUTPUT_CHANNELS && channels != ALPHA_CHANNELS {
            return Err(invalid_geometry(&format!(
                "source tile must have 3 or 4 channels, got {channels}"
            )));
        }

        Ok(Self {
            size: rows,
            channels,
        })
    }

    /// Check a 2x2 texture against this geometry
    ///
    /// # Errors
    ///
    /// Returns an error if the texture is not `(2T+1)` x `(2T+1)` or its
    /// channel count differs from the source tile's
    pub fn check_texture(&self, texture: &ArrayView3<'_, u8>) -> Result<()> {
        let (rows, cols, channels) = texture.dim();
        let expected = self.texture_size();

        if rows != expected || cols != expected {
            return Err(invalid_geometry(&format!(
                "2x2 texture must be {expected}x{expected} for {size}x{size} tiles, got {rows}x{cols}",
                size = self.size
            )));
        }
        if channels != self.channels {
            return Err(invalid_geometry(&format!(
                "2x2 texture has {channels} channels but source tile has {}",
                self.channels
            )));
        }

        Ok(())
    }

    /// Edge length `T` of a tile
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Edge length `T/2` of a tile half
    pub const fn half(&self) -> usize {
        self.size / 2
    }

    /// Edge length `T+1` of a texture quadrant
    pub const fn quadrant_size(&self) -> usize {
        self.size + 1
    }

    /// Edge length `2T+1` of the 2x2 texture
    pub const fn texture_size(&self) -> usize {
        2 * self.size + 1
    }

    /// Channel count of the inputs
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Whether the inputs carry an alpha channel
    pub const fn has_alpha(&self) -> bool {
        self.channels == ALPHA_CHANNELS
    }
}
