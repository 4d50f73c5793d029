//! Image resources.
//!
//! Decoded pixels are wrapped in a [`Raster`], which picks the GPU format, and
//! uploaded through [`Canvas::new_image`](crate::Canvas::new_image). The
//! resulting [`Image`] releases its GPU memory when dropped.

mod error;
mod handle;
mod placeholder;
mod source;

pub use error::ImageError;
pub use handle::{Image, RawImage};
pub use source::{premultiplied_bottom_up, Raster};
