//! Rectangular pixel regions for tile overwrites and atlas cells

use crate::spatial::geometry::TileGeometry;
use ndarray::{ArrayView3, ArrayViewMut3, s};
use std::ops::Range;

/// Half of a square tile, named after the neighbour it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Top half-rows
    North,
    /// Bottom half-rows
    South,
    /// Left half-columns
    West,
    /// Right half-columns
    East,
}

/// Quarter of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left quarter
    NorthWest,
    /// Top-right quarter
    NorthEast,
    /// Bottom-left quarter
    SouthWest,
    /// Bottom-right quarter
    SouthEast,
}

/// Axis-aligned pixel rectangle with half-open row and column ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Rows covered (exclusive end)
    pub rows: Range<usize>,
    /// Columns covered (exclusive end)
    pub cols: Range<usize>,
}

impl Region {
    /// Create a region from row and column ranges
    pub const fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// Half of a tile facing `side`
    ///
    /// The split is at `T/2`; validated tile sizes are even, so both
    /// halves are equal.
    pub const fn half(side: Side, geometry: &TileGeometry) -> Self {
        let (size, half) = (geometry.size(), geometry.half());
        match side {
            Side::North => Self::new(0..half, 0..size),
            Side::South => Self::new(half..size, 0..size),
            Side::West => Self::new(0..size, 0..half),
            Side::East => Self::new(0..size, half..size),
        }
    }

    /// Quarter of a tile at `corner`
    pub const fn quarter(corner: Corner, geometry: &TileGeometry) -> Self {
        let (size, half) = (geometry.size(), geometry.half());
        match corner {
            Corner::NorthWest => Self::new(0..half, 0..half),
            Corner::NorthEast => Self::new(0..half, half..size),
            Corner::SouthWest => Self::new(half..size, 0..half),
            Corner::SouthEast => Self::new(half..size, half..size),
        }
    }

    /// Cell (`row`, `col`) of a grid of `size` x `size` tiles
    pub const fn cell(row: usize, col: usize, size: usize) -> Self {
        Self::new(row * size..(row + 1) * size, col * size..(col + 1) * size)
    }

    /// Check if the region lies within a buffer of `rows` x `cols` pixels
    pub const fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.rows.start <= self.rows.end
            && self.cols.start <= self.cols.end
            && self.rows.end <= rows
            && self.cols.end <= cols
    }

    /// Read-only view of this region across all channels
    ///
    /// Returns `None` when the region does not fit inside `buffer`.
    pub fn view<'a>(&self, buffer: ArrayView3<'a, u8>) -> Option<ArrayView3<'a, u8>> {
        let (rows, cols, _) = buffer.dim();
        self.fits_within(rows, cols)
            .then(|| buffer.slice_move(s![self.rows.clone(), self.cols.clone(), ..]))
    }

    /// Mutable view of this region across all channels
    ///
    /// Returns `None` when the region does not fit inside `buffer`.
    pub fn view_mut<'a>(&self, buffer: ArrayViewMut3<'a, u8>) -> Option<ArrayViewMut3<'a, u8>> {
        let (rows, cols, _) = buffer.dim();
        self.fits_within(rows, cols)
            .then(|| buffer.slice_move(s![self.rows.clone(), self.cols.clone(), ..]))
    }
}
