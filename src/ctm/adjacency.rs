//! The 47 neighbour configurations a connected texture distinguishes
//!
//! Entry `n` lists the directions whose neighbours share the block's
//! material in atlas tile `n`. Tiles are laid out row-major in a 4x12
//! grid, so the index also fixes the tile's atlas cell.

use crate::ctm::direction::Direction::{E, N, NE, NW, S, SE, SW, W};
use crate::ctm::direction::{ConnectionSet, Direction};

/// Number of tiles in a connected texture atlas
pub const TILE_COUNT: usize = 47;

// Order within an entry is irrelevant; entries are read as sets.
static ADJACENCY: [&[Direction]; TILE_COUNT] = [
    &[],
    &[E],
    &[E, W],
    &[W],
    &[E, S],
    &[S, W],
    &[N, E, S],
    &[E, S, W],
    &[N, NE, E, S, W],
    &[N, E, SE, S, W],
    &[N, E, S, SW, W, NW],
    &[N, NE, E, S, W, NW],
    &[S],
    &[E, SE, S],
    &[E, SE, S, SW, W],
    &[S, SW, W],
    &[N, E],
    &[N, W],
    &[N, E, W],
    &[N, S, W],
    &[N, E, S, W, NW],
    &[N, E, S, SW, W],
    &[N, E, SE, S, SW, W],
    &[N, NE, E, SE, S, W],
    &[N, S],
    &[N, NE, E, SE, S],
    &[N, NE, E, SE, S, SW, W, NW],
    &[N, S, SW, W, NW],
    &[N, E, SE, S],
    &[E, S, SW, W],
    &[N, NE, E, S],
    &[E, SE, S, W],
    &[N, NE, E, S, SW, W, NW],
    &[N, NE, E, SE, S, W, NW],
    &[N, NE, E, S, SW, W],
    &[N, E, SE, S, W, NW],
    &[N],
    &[N, NE, E],
    &[N, NE, E, W, NW],
    &[N, W, NW],
    &[N, NE, E, W],
    &[N, S, W, NW],
    &[N, E, W, NW],
    &[N, S, SW, W],
    &[N, E, SE, S, SW, W, NW],
    &[N, NE, E, SE, S, SW, W],
    &[N, E, S, W],
];

/// Connected directions for a tile index
///
/// Returns `None` for indices outside `0..TILE_COUNT`; the atlas cell
/// after the last tile has no configuration.
pub fn directions_of(tile_index: usize) -> Option<ConnectionSet> {
    ADJACENCY
        .get(tile_index)
        .map(|directions| ConnectionSet::from_directions(directions))
}

/// All tile indices with their connection sets, in atlas order
pub fn tiles() -> impl Iterator<Item = (usize, ConnectionSet)> {
    ADJACENCY
        .iter()
        .enumerate()
        .map(|(index, directions)| (index, ConnectionSet::from_directions(directions)))
}
