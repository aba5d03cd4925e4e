//! Command-line interface turning a source tile and 2x2 texture into an atlas

use crate::ctm::adjacency::TILE_COUNT;
use crate::ctm::atlas::{AtlasOptions, assemble_with};
use crate::ctm::inputs::TileInputs;
use crate::io::configuration::{DEFAULT_EXTENSION, OUTPUT_SUFFIX, TEXTURE_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{load_pixel_buffer, output_format, save_pixel_buffer};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ctmforge")]
#[command(
    author,
    version,
    about = "Build a 47-tile connected texture atlas from a source tile and a 2x2 texture"
)]
/// Command-line arguments for atlas conversion
pub struct Cli {
    /// Plain source tile image (T x T)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Compact 2x2 texture image ((2T+1) x (2T+1))
    #[arg(value_name = "TEXTURE")]
    pub texture: PathBuf,

    /// Output path (defaults to the texture path with `_2x2` replaced by `_ctm`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep the alpha channel when both inputs are RGBA
    #[arg(short = 'a', long)]
    pub keep_alpha: bool,

    /// Compose tiles in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path the atlas is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.texture))
    }

    /// Atlas settings selected by the flags
    pub const fn atlas_options(&self) -> AtlasOptions {
        AtlasOptions {
            keep_alpha: self.keep_alpha,
            parallel: self.parallel,
        }
    }
}

/// Derive the atlas path from the texture path
///
/// A stem ending in `_2x2` has that suffix replaced by `_ctm`; any other
/// stem gets `_ctm` appended. The extension is kept, defaulting to `png`.
pub fn derive_output_path(texture_path: &Path) -> PathBuf {
    let stem = texture_path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = texture_path
        .extension()
        .map_or(Cow::Borrowed(DEFAULT_EXTENSION), |ext| ext.to_string_lossy());
    let base = stem.strip_suffix(TEXTURE_SUFFIX).unwrap_or(&*stem);
    let output_name = format!("{base}{OUTPUT_SUFFIX}.{extension}");

    texture_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Runs one conversion: decode, validate, assemble, encode
pub struct Converter {
    cli: Cli,
}

impl Converter {
    /// Create a converter for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Convert the inputs and write the atlas, returning its path
    ///
    /// Nothing is written unless every step before encoding succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the output format is not lossless, either input
    /// cannot be decoded, the texture does not fit the source tile, or the
    /// atlas cannot be written
    // Allow print for the completion summary
    #[allow(clippy::print_stderr)]
    pub fn convert(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path();
        output_format(&output_path)?;

        let source = load_pixel_buffer(&self.cli.source)?;
        let texture = load_pixel_buffer(&self.cli.texture)?;
        let inputs = TileInputs::new(source.view(), texture.view())?;

        let progress = if self.cli.should_show_progress() {
            let label = self
                .cli
                .texture
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            ProgressReporter::new(TILE_COUNT, &label)
        } else {
            ProgressReporter::hidden()
        };

        let atlas = assemble_with(&inputs, &self.cli.atlas_options(), |_| {
            progress.tile_done();
        });
        progress.finish();

        save_pixel_buffer(&atlas, &output_path)?;

        if self.cli.should_show_progress() {
            let (rows, cols, channels) = atlas.dim();
            eprintln!(
                "Wrote {} ({cols}x{rows}, {channels} channels) in {:.2?}",
                output_path.display(),
                start_time.elapsed()
            );
        }

        Ok(output_path)
    }
}
