//! Connected texture synthesis
//!
//! Maps each of the 47 neighbour configurations to a tile composed from a
//! plain source tile and the four overlapping quadrants of a 2x2 texture.

/// The fixed table of neighbour configurations
pub mod adjacency;
/// Atlas assembly over all tile indices
pub mod atlas;
/// Tile composition from source and quadrant pixels
pub mod compositor;
/// Compass directions and connection sets
pub mod direction;
/// Validated source tile and texture pair
pub mod inputs;
/// Quadrant extraction from the 2x2 texture
pub mod quadrant;

pub use atlas::{AtlasOptions, assemble, assemble_with};
pub use compositor::compose;
pub use direction::{ConnectionSet, Direction};
pub use inputs::TileInputs;
