//! Connected texture (CTM) atlas synthesis from a compact 2x2 texture
//!
//! A block texture that connects to its neighbours needs one tile for each
//! of the 47 distinguishable neighbour configurations. This crate composes
//! all of them from a plain source tile and a 2x2 texture whose quadrants
//! hold the straight-edge, inner-corner and outer-corner artwork, and lays
//! them out on a 4x12 atlas.

/// Tile composition and atlas assembly
pub mod ctm;
/// Input/output operations and error handling
pub mod io;
/// Pixel buffers, regions and geometry validation
pub mod spatial;

pub use io::error::{CtmError, Result};
