//! Error types for atlas synthesis and its file I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum CtmError {
    /// Failed to load an input image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded image is not 8-bit RGB or RGBA
    ///
    /// Pixels are composited as stored, so other layouts are rejected
    /// rather than converted.
    UnsupportedPixelFormat {
        /// Path to the image file
        path: PathBuf,
        /// Colour type reported by the decoder
        color: image::ColorType,
    },

    /// Source tile and 2x2 texture do not fit together
    InvalidGeometry {
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the atlas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CtmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedPixelFormat { path, color } => {
                write!(
                    f,
                    "Unsupported pixel format {color:?} in '{}': expected 8-bit RGB or RGBA",
                    path.display()
                )
            }
            Self::InvalidGeometry { reason } => {
                write!(f, "Invalid texture geometry: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CtmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, CtmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CtmError {
    CtmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a geometry validation error
pub fn invalid_geometry(reason: &impl ToString) -> CtmError {
    CtmError::InvalidGeometry {
        reason: reason.to_string(),
    }
}
