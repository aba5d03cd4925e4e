use crate::io::error::Result;
use crate::spatial::geometry::TileGeometry;
use ndarray::ArrayView3;

/// Source tile and 2x2 texture whose shapes have been checked together
///
/// Every slice taken by the compositor is in bounds for a value of this
/// type, so composition itself cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct TileInputs<'a> {
    source: ArrayView3<'a, u8>,
    texture: ArrayView3<'a, u8>,
    geometry: TileGeometry,
}

impl<'a> TileInputs<'a> {
    /// Validate a source tile against a 2x2 texture
    ///
    /// # Errors
    ///
    /// Returns an error if the source tile is not a square of even size
    /// with 3 or 4 channels, or the texture is not `(2T+1)` square with the
    /// same channel count
    pub fn new(source: ArrayView3<'a, u8>, texture: ArrayView3<'a, u8>) -> Result<Self> {
        let geometry = TileGeometry::from_source(&source)?;
        geometry.check_texture(&texture)?;

        Ok(Self {
            source,
            texture,
            geometry,
        })
    }

    /// The plain source tile
    pub fn source(&self) -> ArrayView3<'a, u8> {
        self.source
    }

    /// The 2x2 texture
    pub fn texture(&self) -> ArrayView3<'a, u8> {
        self.texture
    }

    /// Shared pixel dimensions
    pub const fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }
}
