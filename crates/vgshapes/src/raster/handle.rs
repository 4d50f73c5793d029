use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::ImageReader;

use crate::canvas::Canvas;
use crate::device::{Backend, ImageFormat, ImageHandle};

use super::{ImageError, Raster};

/// GPU-resident image tied to the canvas that created it.
///
/// The native image is destroyed when this value is dropped, or earlier with
/// [`destroy`](Image::destroy). Use [`into_raw`](Image::into_raw) to take over
/// the handle's lifetime manually.
pub struct Image<'c, B: Backend> {
    canvas: &'c Canvas<B>,
    raw: RawImage,
    live: bool,
}

/// Image handle whose release is the caller's responsibility.
///
/// Not `Clone`: [`Canvas::destroy_raw_image`] consumes it, so a destroyed
/// handle cannot be drawn again. Dropping it without destroying leaks the GPU
/// memory until the session ends.
#[derive(Debug, PartialEq, Eq)]
pub struct RawImage {
    handle: ImageHandle,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl RawImage {
    #[inline]
    pub fn handle(&self) -> ImageHandle {
        self.handle
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<'c, B: Backend> Image<'c, B> {
    /// Draws the image at the current image transform.
    pub fn draw(&self) {
        self.canvas.backend.draw_image(self.raw.handle);
    }

    /// Releases the GPU memory now.
    pub fn destroy(self) {
        drop(self);
    }

    /// Detaches the handle from this scope; see [`RawImage`].
    pub fn into_raw(mut self) -> RawImage {
        self.live = false;
        let RawImage { handle, format, width, height } = self.raw;
        RawImage { handle, format, width, height }
    }

    #[inline]
    pub fn handle(&self) -> ImageHandle {
        self.raw.handle
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.raw.format
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.raw.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.raw.height
    }
}

impl<B: Backend> Drop for Image<'_, B> {
    fn drop(&mut self) {
        if self.live {
            self.canvas.backend.destroy_image(self.raw.handle);
        }
    }
}

impl<B: Backend> std::fmt::Debug for Image<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image").field("raw", &self.raw).field("live", &self.live).finish()
    }
}

impl<B: Backend> Canvas<B> {
    /// Uploads decoded pixels into a new GPU image.
    ///
    /// The GPU format follows the raster layout; see [`Raster`].
    pub fn new_image(&self, raster: impl Into<Raster>) -> Result<Image<'_, B>, ImageError> {
        let raster = raster.into();
        let (width, height) = raster.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }

        let format = raster.format();
        let too_large = || ImageError::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let stride = w
            .checked_mul(format.bytes_per_pixel() as i32)
            .ok_or_else(too_large)?;

        let Some(handle) = self.backend.create_image(format, w, h, self.init.image_quality) else {
            log::warn!("GPU image allocation failed ({width}x{height} {format:?})");
            return Err(ImageError::Allocation { format, width, height });
        };

        let data = raster.upload_data();
        self.backend.image_sub_data(handle, &data, stride, format, w, h);
        log::debug!("uploaded {width}x{height} {format:?} image as {handle:?}");

        Ok(Image {
            canvas: self,
            raw: RawImage { handle, format, width, height },
            live: true,
        })
    }

    /// Decodes an encoded image (PNG, JPEG, ...) held in memory.
    pub fn decode_image(&self, bytes: &[u8]) -> Result<Image<'_, B>, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        self.new_image(decoded)
    }

    /// Opens, decodes and uploads an image file.
    pub fn open_image(&self, path: impl AsRef<Path>) -> Result<Image<'_, B>, ImageError> {
        let path = path.as_ref();
        let open_err = |source| ImageError::Open { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(open_err)?;
        let decoded = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(open_err)?
            .decode()?;

        self.new_image(decoded)
    }

    /// Draws an image whose lifetime is managed manually.
    pub fn draw_raw_image(&self, image: &RawImage) {
        self.backend.draw_image(image.handle);
    }

    /// Releases an image detached with [`Image::into_raw`].
    pub fn destroy_raw_image(&self, image: RawImage) {
        self.backend.destroy_image(image.handle);
    }
}
