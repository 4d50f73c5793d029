use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::device::ImageFormat;

/// Failure to turn a file or raster into a GPU image.
///
/// No native handle exists when one of these is returned.
#[derive(Debug)]
pub enum ImageError {
    /// The file could not be opened or read.
    Open { path: PathBuf, source: io::Error },
    /// The bytes are not a decodable image.
    Decode(::image::ImageError),
    /// One of the dimensions is zero.
    Empty { width: u32, height: u32 },
    /// The dimensions do not fit the native integer types.
    TooLarge { width: u32, height: u32 },
    /// The native library returned the invalid handle.
    Allocation { format: ImageFormat, width: u32, height: u32 },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Open { path, source } => {
                write!(f, "cannot read image {}: {source}", path.display())
            }
            ImageError::Decode(e) => write!(f, "cannot decode image: {e}"),
            ImageError::Empty { width, height } => {
                write!(f, "image has no pixels ({width}x{height})")
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "image is too large for the native API ({width}x{height})")
            }
            ImageError::Allocation { format, width, height } => {
                write!(f, "GPU image allocation failed ({width}x{height} {format:?})")
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Open { source, .. } => Some(source),
            ImageError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<::image::ImageError> for ImageError {
    fn from(e: ::image::ImageError) -> Self {
        ImageError::Decode(e)
    }
}
