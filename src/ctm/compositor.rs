//! Builds a single connected tile from the source tile and texture quadrants
//!
//! Straight connections replace a half of the tile with the matching half
//! of a straight-edge donor: north and south read from the north-east
//! quadrant, west and east from the south-west quadrant. A corner whose two
//! adjacent straight directions are both connected is then replaced with
//! the north-west quadrant when the diagonal neighbour also connects (inner
//! corner) and the south-east quadrant otherwise (outer corner). Donor
//! pixels are always read at the same tile coordinates they are written to.

use crate::ctm::adjacency::{TILE_COUNT, directions_of};
use crate::ctm::direction::{ConnectionSet, Direction};
use crate::ctm::inputs::TileInputs;
use crate::ctm::quadrant::{Quadrant, extract};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::PixelBuffer;
use crate::spatial::region::{Corner, Region, Side};

/// Half-plane fills: connected direction, tile half, donor quadrant
const EDGE_FILLS: [(Direction, Side, Quadrant); 4] = [
    (Direction::N, Side::North, Quadrant::NorthEast),
    (Direction::S, Side::South, Quadrant::NorthEast),
    (Direction::W, Side::West, Quadrant::SouthWest),
    (Direction::E, Side::East, Quadrant::SouthWest),
];

/// Corner refinements: the two straight directions, the diagonal, tile quarter
const CORNER_FILLS: [(Direction, Direction, Direction, Corner); 4] = [
    (Direction::N, Direction::W, Direction::NW, Corner::NorthWest),
    (Direction::N, Direction::E, Direction::NE, Corner::NorthEast),
    (Direction::S, Direction::W, Direction::SW, Corner::SouthWest),
    (Direction::S, Direction::E, Direction::SE, Corner::SouthEast),
];

/// Compose the atlas tile at `tile_index`
///
/// Tile 0 has no connections and is a copy of the source tile.
///
/// # Errors
///
/// Returns an error if `tile_index` is not below [`TILE_COUNT`]
pub fn compose(tile_index: usize, inputs: &TileInputs<'_>) -> Result<PixelBuffer> {
    let connections = directions_of(tile_index).ok_or_else(|| {
        invalid_parameter(
            "tile_index",
            &tile_index,
            &format!("must be below {TILE_COUNT}"),
        )
    })?;

    Ok(compose_connections(connections, inputs))
}

/// Compose a tile for an arbitrary connection set
///
/// Sets outside the adjacency table are accepted; diagonals only take
/// effect when both of their straight neighbours are connected.
pub fn compose_connections(connections: ConnectionSet, inputs: &TileInputs<'_>) -> PixelBuffer {
    let mut tile = inputs.source().to_owned();
    if connections.is_empty() {
        return tile;
    }

    let geometry = inputs.geometry();

    for (direction, side, donor) in EDGE_FILLS {
        if connections.contains(direction) {
            copy_region(&mut tile, &Region::half(side, geometry), inputs, donor);
        }
    }

    // Corners run after the edges so they overwrite the edge fills
    for (vertical, horizontal, diagonal, corner) in CORNER_FILLS {
        if connections.contains_both(vertical, horizontal) {
            let donor = if connections.contains(diagonal) {
                Quadrant::NorthWest
            } else {
                Quadrant::SouthEast
            };
            copy_region(&mut tile, &Region::quarter(corner, geometry), inputs, donor);
        }
    }

    tile
}

// Regions come from the validated geometry, which bounds both the tile and
// each (T+1) quadrant
fn copy_region(
    tile: &mut PixelBuffer,
    region: &Region,
    inputs: &TileInputs<'_>,
    donor: Quadrant,
) {
    let quadrant = extract(inputs, donor);
    let target = region.view_mut(tile.view_mut());
    let pixels = region.view(quadrant);
    debug_assert!(
        target.is_some() && pixels.is_some(),
        "region {region:?} outside tile or {donor:?} quadrant"
    );

    if let (Some(mut target), Some(pixels)) = (target, pixels) {
        target.assign(&pixels);
    }
}
