//! Lays the 47 composed tiles out on a 4x12 atlas
//!
//! Tile `n` lands in row `n / 12`, column `n % 12`. The final cell has no
//! tile and keeps the zeroed background.

use crate::ctm::adjacency::tiles;
use crate::ctm::compositor::compose_connections;
use crate::ctm::inputs::TileInputs;
use crate::io::configuration::{ATLAS_COLUMNS, ATLAS_ROWS, OUTPUT_CHANNELS};
use crate::spatial::geometry::TileGeometry;
use crate::io::error::Result;
use crate::spatial::PixelBuffer;
use crate::spatial::region::Region;
use ndarray::{Array3, ArrayView3, s};
use rayon::prelude::*;

/// Output settings for atlas assembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtlasOptions {
    /// Keep the alpha channel when both inputs are RGBA
    pub keep_alpha: bool,
    /// Compose tiles on the rayon thread pool
    pub parallel: bool,
}

impl AtlasOptions {
    /// Channel count of the atlas for inputs of the given geometry
    pub const fn output_channels(&self, geometry: &TileGeometry) -> usize {
        if self.keep_alpha && geometry.has_alpha() {
            geometry.channels()
        } else {
            OUTPUT_CHANNELS
        }
    }
}

/// Atlas cell holding tile `tile_index` for tile size `size`
pub const fn cell_region(tile_index: usize, size: usize) -> Region {
    Region::cell(tile_index / ATLAS_COLUMNS, tile_index % ATLAS_COLUMNS, size)
}

/// Build an RGB atlas from a source tile and 2x2 texture
///
/// # Errors
///
/// Returns an error if the texture geometry does not match the source tile
pub fn assemble<'a>(
    source: ArrayView3<'a, u8>,
    texture: ArrayView3<'a, u8>,
) -> Result<PixelBuffer> {
    let inputs = TileInputs::new(source, texture)?;
    Ok(assemble_with(&inputs, &AtlasOptions::default(), |_| {}))
}

/// Build an atlas from validated inputs
///
/// `on_tile` is called with each tile index once its cell is written, in
/// index order. On the parallel path every tile is composed before the
/// first cell is written, so the calls arrive together at the end.
pub fn assemble_with(
    inputs: &TileInputs<'_>,
    options: &AtlasOptions,
    mut on_tile: impl FnMut(usize),
) -> PixelBuffer {
    let geometry = inputs.geometry();
    let size = geometry.size();
    let channels = options.output_channels(geometry);
    let mut atlas: PixelBuffer =
        Array3::zeros((ATLAS_ROWS * size, ATLAS_COLUMNS * size, channels));

    if options.parallel {
        let composed: Vec<(usize, PixelBuffer)> = tiles()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(index, connections)| (index, compose_connections(connections, inputs)))
            .collect();

        for (index, tile) in composed {
            write_cell(&mut atlas, index, &tile, size, channels);
            on_tile(index);
        }
    } else {
        for (index, connections) in tiles() {
            let tile = compose_connections(connections, inputs);
            write_cell(&mut atlas, index, &tile, size, channels);
            on_tile(index);
        }
    }

    atlas
}

fn write_cell(
    atlas: &mut PixelBuffer,
    index: usize,
    tile: &PixelBuffer,
    size: usize,
    channels: usize,
) {
    let pixels = tile.slice(s![.., .., ..channels]);
    let cell = cell_region(index, size).view_mut(atlas.view_mut());
    debug_assert!(cell.is_some(), "cell {index} outside the atlas");

    if let Some(mut cell) = cell {
        cell.assign(&pixels);
    }
}
