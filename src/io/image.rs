//! Decoding inputs to pixel buffers and encoding the atlas losslessly

use crate::io::error::{CtmError, Result, invalid_geometry, invalid_parameter};
use crate::spatial::PixelBuffer;
use image::{ColorType, DynamicImage, ImageFormat};
use ndarray::Array3;
use std::path::Path;

/// Encoders that reproduce 8-bit RGB and RGBA pixels exactly
pub const LOSSLESS_FORMATS: [ImageFormat; 6] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::Tga,
    ImageFormat::Pnm,
    ImageFormat::Qoi,
];

/// Load an image as a pixel buffer with its stored channels
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image is not 8-bit RGB or RGBA
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| CtmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (width, height) = (img.width() as usize, img.height() as usize);
    let (channels, raw) = match img {
        DynamicImage::ImageRgb8(rgb) => (3, rgb.into_raw()),
        DynamicImage::ImageRgba8(rgba) => (4, rgba.into_raw()),
        other => {
            return Err(CtmError::UnsupportedPixelFormat {
                path: path.to_path_buf(),
                color: other.color(),
            });
        }
    };

    Array3::from_shape_vec((height, width, channels), raw).map_err(|e| invalid_geometry(&e))
}

/// Pick the lossless encoder for an output path from its extension
///
/// # Errors
///
/// Returns an error if the extension is unknown or names a lossy format
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        invalid_parameter("output", &path.display(), &e)
    })?;

    if LOSSLESS_FORMATS.contains(&format) {
        Ok(format)
    } else {
        Err(invalid_parameter(
            "output",
            &path.display(),
            &format!("{format:?} is not a lossless format"),
        ))
    }
}

/// Save a pixel buffer with 3 or 4 channels to `path`
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a lossless format
/// - The buffer does not have 3 or 4 channels or is too large to encode
/// - The parent directory cannot be created
/// - The image cannot be written
pub fn save_pixel_buffer<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path)?;

    let (rows, cols, channels) = buffer.dim();
    let color = match channels {
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        _ => {
            return Err(invalid_geometry(&format!(
                "cannot encode a buffer with {channels} channels"
            )));
        }
    };
    let width = u32::try_from(cols).map_err(|e| invalid_parameter("width", &cols, &e))?;
    let height = u32::try_from(rows).map_err(|e| invalid_parameter("height", &rows, &e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CtmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    // Logical iteration order is row-major whatever the memory layout
    let raw: Vec<u8> = buffer.iter().copied().collect();
    image::save_buffer_with_format(path, &raw, width, height, color, format).map_err(|e| {
        CtmError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        }
    })
}
