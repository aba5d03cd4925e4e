//! Overlapping quadrants of a compact 2x2 texture
//!
//! Each quadrant spans `T+1` pixels per axis, inclusive at both ends, so
//! neighbouring quadrants share their boundary row or column.

use crate::ctm::inputs::TileInputs;
use crate::spatial::geometry::TileGeometry;
use crate::spatial::region::Region;
use ndarray::{ArrayView3, s};

/// One of the four corner regions of the 2x2 texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left, index 0
    NorthWest,
    /// Top-right, index 1
    NorthEast,
    /// Bottom-left, index 2
    SouthWest,
    /// Bottom-right, index 3
    SouthEast,
}

impl Quadrant {
    /// All quadrants in index order
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Quadrant for an index in `0..4`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of this quadrant in `0..4`
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    /// Top-left texture pixel (row, column) of this quadrant for tile size `size`
    pub const fn origin(self, size: usize) -> (usize, usize) {
        match self {
            Self::NorthWest => (0, 0),
            Self::NorthEast => (0, size),
            Self::SouthWest => (size, 0),
            Self::SouthEast => (size, size),
        }
    }

    /// Texture pixels covered by this quadrant, `T+1` per axis
    pub const fn region(self, geometry: &TileGeometry) -> Region {
        let (row, col) = self.origin(geometry.size());
        let span = geometry.quadrant_size();
        Region::new(row..row + span, col..col + span)
    }
}

/// View of one quadrant of the validated texture
///
/// The view is `(T+1)` x `(T+1)` and borrows the texture without copying.
pub fn extract<'a>(inputs: &TileInputs<'a>, quadrant: Quadrant) -> ArrayView3<'a, u8> {
    let Region { rows, cols } = quadrant.region(inputs.geometry());
    inputs.texture().slice_move(s![rows, cols, ..])
}
