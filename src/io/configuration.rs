//! Atlas layout constants and output naming defaults

/// Edge length in pixels of the tiles the reference textures are authored at
pub const REFERENCE_TILE_SIZE: usize = 32;

// The atlas is a fixed grid; its last cell has no tile
/// Number of tile rows in the atlas
pub const ATLAS_ROWS: usize = 4;
/// Number of tile columns in the atlas
pub const ATLAS_COLUMNS: usize = 12;

/// Channel count of the atlas unless alpha is explicitly kept
pub const OUTPUT_CHANNELS: usize = 3;
/// Channel count of an RGBA buffer
pub const ALPHA_CHANNELS: usize = 4;

// Output settings
/// Stem suffix marking a compact 2x2 texture
pub const TEXTURE_SUFFIX: &str = "_2x2";
/// Stem suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_ctm";
/// Extension used when the texture path has none
pub const DEFAULT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
