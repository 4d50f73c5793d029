use std::num::NonZeroU32;
use std::path::Path;

use crate::paint::{Ramp, Rgb};
use crate::text::{TextAlign, Typeface};

/// Native handle of a GPU-resident image (`VGImage`).
///
/// The native API reserves `0` for `VG_INVALID_HANDLE`, so a valid handle is
/// never zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageHandle(NonZeroU32);

impl ImageHandle {
    #[inline]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

/// Pixel format an image is created with on the GPU.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    /// `VG_lL_8`: 8-bit luminance.
    Luminance,
    /// `VG_A_8`: 8-bit alpha mask.
    Alpha,
    /// `VG_lRGBA_8888`: straight-alpha RGBA.
    Rgba,
    /// `VG_lRGBA_8888_PRE`: premultiplied RGBA.
    RgbaPremultiplied,
    /// `VG_sABGR_8888_PRE`: premultiplied, byte order `r,g,b,a` in memory.
    AbgrPremultiplied,
}

impl ImageFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ImageFormat::Luminance | ImageFormat::Alpha => 1,
            ImageFormat::Rgba | ImageFormat::RgbaPremultiplied | ImageFormat::AbgrPremultiplied => 4,
        }
    }
}

/// Whether `data` holds `height` rows of `stride` bytes, each wide enough for
/// `width` pixels of `format`.
pub fn upload_fits(data: &[u8], stride: i32, format: ImageFormat, width: i32, height: i32) -> bool {
    let (Ok(stride), Ok(width), Ok(height)) =
        (usize::try_from(stride), usize::try_from(width), usize::try_from(height))
    else {
        return false;
    };

    let row = width.checked_mul(format.bytes_per_pixel());
    let total = stride.checked_mul(height);
    matches!((row, total), (Some(row), Some(total)) if row <= stride && total <= data.len())
}

/// Resampling quality hint passed at image creation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ImageQuality {
    NonAntialiased,
    #[default]
    Faster,
    Better,
}

/// The native drawing API consumed by [`Canvas`](crate::Canvas).
///
/// Every method is a synchronous pass-through; implementations must not
/// buffer or reorder calls. Methods take `&self` because the native context is
/// global state owned by the library, not by the Rust value.
///
/// Implementations are expected to be `!Send`: the native context is bound to
/// the thread that called [`init`](Backend::init).
pub trait Backend {
    /// Acquires the display and returns its `(width, height)`.
    fn init(&self) -> (i32, i32);
    fn finish(&self);

    fn start(&self, width: i32, height: i32);
    fn end(&self);
    /// Ends the picture and writes the raw raster to `path`.
    fn save_end(&self, path: &Path);

    fn background(&self, color: Rgb);
    fn background_rgba(&self, color: Rgb, alpha: f32);

    fn fill(&self, color: Rgb, alpha: f32);
    fn stroke(&self, color: Rgb, alpha: f32);
    fn stroke_width(&self, width: f32);
    fn fill_linear_gradient(&self, x1: f32, y1: f32, x2: f32, y2: f32, ramp: &Ramp);
    fn fill_radial_gradient(&self, cx: f32, cy: f32, fx: f32, fy: f32, radius: f32, ramp: &Ramp);

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn rect(&self, x: f32, y: f32, w: f32, h: f32);
    fn roundrect(&self, x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32);
    fn ellipse(&self, x: f32, y: f32, w: f32, h: f32);
    fn circle(&self, x: f32, y: f32, r: f32);
    fn qbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, ex: f32, ey: f32);
    #[allow(clippy::too_many_arguments)]
    fn cbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, px: f32, py: f32, ex: f32, ey: f32);
    fn arc(&self, x: f32, y: f32, w: f32, h: f32, sa: f32, aext: f32);
    /// Draws nothing unless `x` and `y` have the same, non-zero length.
    fn polygon(&self, x: &[f32], y: &[f32]);
    /// Draws nothing unless `x` and `y` have the same, non-zero length.
    fn polyline(&self, x: &[f32], y: &[f32]);

    fn text(&self, x: f32, y: f32, text: &str, face: Typeface, size: i32, align: TextAlign);
    fn text_width(&self, text: &str, face: Typeface, size: i32) -> f32;

    fn translate(&self, x: f32, y: f32);
    fn rotate(&self, degrees: f32);
    fn shear(&self, x: f32, y: f32);
    fn scale(&self, x: f32, y: f32);
    /// Loads identity into the path, glyph and image matrices.
    fn reset_matrix(&self);

    /// Allocates an image; `None` when the native call returns the invalid handle.
    fn create_image(
        &self,
        format: ImageFormat,
        width: i32,
        height: i32,
        quality: ImageQuality,
    ) -> Option<ImageHandle>;
    /// Uploads `data` (rows of `stride` bytes) into the whole image.
    ///
    /// Uploads nothing unless [`upload_fits`] holds for the arguments.
    fn image_sub_data(
        &self,
        image: ImageHandle,
        data: &[u8],
        stride: i32,
        format: ImageFormat,
        width: i32,
        height: i32,
    );
    fn draw_image(&self, image: ImageHandle);
    fn destroy_image(&self, image: ImageHandle);
}
