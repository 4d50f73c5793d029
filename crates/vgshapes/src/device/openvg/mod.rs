//! Native backend: libshapes + OpenVG through FFI.

pub mod bindings;

use std::ffi::{self, CString};
use std::marker::PhantomData;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;

use crate::canvas::poly_points;
use crate::paint::{Ramp, Rgb};
use crate::text::{TextAlign, Typeface};

use super::{upload_fits, Backend, ImageFormat, ImageHandle, ImageQuality};

/// libshapes keeps its EGL/OpenVG context in process globals.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// [`Backend`] that talks to the GPU through libshapes.
///
/// At most one exists per process. The value is `!Send`: the EGL context is
/// current only on the thread that called `init`.
pub struct OpenVg {
    _not_send: PhantomData<*const ()>,
}

impl OpenVg {
    /// Claims the process-wide native context.
    ///
    /// Fails if another `OpenVg` is still alive.
    pub fn acquire() -> Result<Self> {
        if ACTIVE.swap(true, Ordering::AcqRel) {
            anyhow::bail!("an OpenVG session is already active in this process");
        }
        Ok(Self { _not_send: PhantomData })
    }
}

impl Drop for OpenVg {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::Release);
    }
}

/// C strings end at the first NUL, so anything after one is dropped.
fn c_text(s: &str) -> CString {
    let end = s.find('\0').unwrap_or(s.len());
    CString::new(&s[..end]).unwrap_or_default()
}

fn fontinfo(face: Typeface) -> bindings::Fontinfo {
    // SAFETY: the typefaces are immutable statics initialised by libshapes' `init`.
    unsafe {
        match face {
            Typeface::Sans => bindings::SansTypeface,
            Typeface::Serif => bindings::SerifTypeface,
            Typeface::Mono => bindings::MonoTypeface,
        }
    }
}

fn vg_format(format: ImageFormat) -> bindings::VGImageFormat {
    match format {
        ImageFormat::Luminance => bindings::VG_lL_8,
        ImageFormat::Alpha => bindings::VG_A_8,
        ImageFormat::Rgba => bindings::VG_lRGBA_8888,
        ImageFormat::RgbaPremultiplied => bindings::VG_lRGBA_8888_PRE,
        ImageFormat::AbgrPremultiplied => bindings::VG_sABGR_8888_PRE,
    }
}

fn vg_quality(quality: ImageQuality) -> bindings::VGbitfield {
    match quality {
        ImageQuality::NonAntialiased => bindings::VG_IMAGE_QUALITY_NONANTIALIASED,
        ImageQuality::Faster => bindings::VG_IMAGE_QUALITY_FASTER,
        ImageQuality::Better => bindings::VG_IMAGE_QUALITY_BETTER,
    }
}

/// Native point count for matching coordinate slices, `None` when nothing
/// may be drawn.
fn point_count(x: &[f32], y: &[f32]) -> Option<bindings::VGint> {
    match poly_points(x, y) {
        0 => None,
        n => bindings::VGint::try_from(n).ok(),
    }
}

#[inline]
fn channels(color: Rgb) -> (ffi::c_uint, ffi::c_uint, ffi::c_uint) {
    (color.red.into(), color.green.into(), color.blue.into())
}

// SAFETY (for every call below): libshapes functions only read their
// arguments, pointers are valid for the duration of the call, and `OpenVg`
// being `!Send` keeps calls on the thread that owns the context.
impl Backend for OpenVg {
    fn init(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { bindings::init(&mut w, &mut h) };
        (w, h)
    }

    fn finish(&self) {
        unsafe { bindings::finish() }
    }

    fn start(&self, width: i32, height: i32) {
        unsafe { bindings::Start(width, height) }
    }

    fn end(&self) {
        unsafe { bindings::End() }
    }

    fn save_end(&self, path: &Path) {
        match CString::new(path.as_os_str().as_bytes()) {
            Ok(name) => unsafe { bindings::SaveEnd(name.as_ptr()) },
            Err(_) => {
                log::warn!("raster path {} contains a NUL byte; ending without saving", path.display());
                unsafe { bindings::End() }
            }
        }
    }

    fn background(&self, color: Rgb) {
        let (r, g, b) = channels(color);
        unsafe { bindings::Background(r, g, b) }
    }

    fn background_rgba(&self, color: Rgb, alpha: f32) {
        let (r, g, b) = channels(color);
        unsafe { bindings::BackgroundRGB(r, g, b, alpha) }
    }

    fn fill(&self, color: Rgb, alpha: f32) {
        let (r, g, b) = channels(color);
        unsafe { bindings::Fill(r, g, b, alpha) }
    }

    fn stroke(&self, color: Rgb, alpha: f32) {
        let (r, g, b) = channels(color);
        unsafe { bindings::Stroke(r, g, b, alpha) }
    }

    fn stroke_width(&self, width: f32) {
        unsafe { bindings::StrokeWidth(width) }
    }

    fn fill_linear_gradient(&self, x1: f32, y1: f32, x2: f32, y2: f32, ramp: &Ramp) {
        let stops = ramp.as_floats();
        let n = ramp.len() as ffi::c_int;
        let ptr = if stops.is_empty() { std::ptr::null() } else { stops.as_ptr() };
        unsafe { bindings::FillLinearGradient(x1, y1, x2, y2, ptr, n) }
    }

    fn fill_radial_gradient(&self, cx: f32, cy: f32, fx: f32, fy: f32, radius: f32, ramp: &Ramp) {
        let stops = ramp.as_floats();
        let n = ramp.len() as ffi::c_int;
        let ptr = if stops.is_empty() { std::ptr::null() } else { stops.as_ptr() };
        unsafe { bindings::FillRadialGradient(cx, cy, fx, fy, radius, ptr, n) }
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        unsafe { bindings::Line(x1, y1, x2, y2) }
    }

    fn rect(&self, x: f32, y: f32, w: f32, h: f32) {
        unsafe { bindings::Rect(x, y, w, h) }
    }

    fn roundrect(&self, x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32) {
        unsafe { bindings::Roundrect(x, y, w, h, rw, rh) }
    }

    fn ellipse(&self, x: f32, y: f32, w: f32, h: f32) {
        unsafe { bindings::Ellipse(x, y, w, h) }
    }

    fn circle(&self, x: f32, y: f32, r: f32) {
        unsafe { bindings::Circle(x, y, r) }
    }

    fn qbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, ex: f32, ey: f32) {
        unsafe { bindings::Qbezier(sx, sy, cx, cy, ex, ey) }
    }

    fn cbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, px: f32, py: f32, ex: f32, ey: f32) {
        unsafe { bindings::Cbezier(sx, sy, cx, cy, px, py, ex, ey) }
    }

    fn arc(&self, x: f32, y: f32, w: f32, h: f32, sa: f32, aext: f32) {
        unsafe { bindings::Arc(x, y, w, h, sa, aext) }
    }

    fn polygon(&self, x: &[f32], y: &[f32]) {
        if let Some(n) = point_count(x, y) {
            unsafe { bindings::Polygon(x.as_ptr(), y.as_ptr(), n) }
        }
    }

    fn polyline(&self, x: &[f32], y: &[f32]) {
        if let Some(n) = point_count(x, y) {
            unsafe { bindings::Polyline(x.as_ptr(), y.as_ptr(), n) }
        }
    }

    fn text(&self, x: f32, y: f32, text: &str, face: Typeface, size: i32, align: TextAlign) {
        let s = c_text(text);
        let font = fontinfo(face);
        match align {
            TextAlign::Start => unsafe { bindings::Text(x, y, s.as_ptr(), font, size) },
            TextAlign::Middle => unsafe { bindings::TextMid(x, y, s.as_ptr(), font, size) },
            TextAlign::End => unsafe { bindings::TextEnd(x, y, s.as_ptr(), font, size) },
        }
    }

    fn text_width(&self, text: &str, face: Typeface, size: i32) -> f32 {
        let s = c_text(text);
        unsafe { bindings::TextWidth(s.as_ptr(), fontinfo(face), size) }
    }

    fn translate(&self, x: f32, y: f32) {
        unsafe { bindings::Translate(x, y) }
    }

    fn rotate(&self, degrees: f32) {
        unsafe { bindings::Rotate(degrees) }
    }

    fn shear(&self, x: f32, y: f32) {
        unsafe { bindings::Shear(x, y) }
    }

    fn scale(&self, x: f32, y: f32) {
        unsafe { bindings::Scale(x, y) }
    }

    fn reset_matrix(&self) {
        for mode in [
            bindings::VG_MATRIX_PATH_USER_TO_SURFACE,
            bindings::VG_MATRIX_GLYPH_USER_TO_SURFACE,
            bindings::VG_MATRIX_IMAGE_USER_TO_SURFACE,
        ] {
            unsafe {
                bindings::vgSeti(bindings::VG_MATRIX_MODE, mode);
                bindings::vgLoadIdentity();
            }
        }
    }

    fn create_image(
        &self,
        format: ImageFormat,
        width: i32,
        height: i32,
        quality: ImageQuality,
    ) -> Option<ImageHandle> {
        let raw = unsafe { bindings::vgCreateImage(vg_format(format), width, height, vg_quality(quality)) };
        ImageHandle::new(raw)
    }

    fn image_sub_data(
        &self,
        image: ImageHandle,
        data: &[u8],
        stride: i32,
        format: ImageFormat,
        width: i32,
        height: i32,
    ) {
        if !upload_fits(data, stride, format, width, height) {
            log::warn!(
                "image upload skipped: {} bytes for {width}x{height} {format:?} rows of {stride}",
                data.len()
            );
            return;
        }

        unsafe {
            bindings::vgImageSubData(
                image.raw(),
                data.as_ptr().cast(),
                stride,
                vg_format(format),
                0,
                0,
                width,
                height,
            )
        }
    }

    fn draw_image(&self, image: ImageHandle) {
        unsafe { bindings::vgDrawImage(image.raw()) }
    }

    fn destroy_image(&self, image: ImageHandle) {
        unsafe { bindings::vgDestroyImage(image.raw()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_text_stops_at_nul() {
        assert_eq!(c_text("abc\0def").as_bytes(), b"abc");
        assert_eq!(c_text("plain").as_bytes(), b"plain");
    }

    #[test]
    fn point_count_rejects_mismatched_slices() {
        assert_eq!(point_count(&[1.0, 2.0, 3.0], &[]), None);
        assert_eq!(point_count(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(point_count(&[], &[]), None);
        assert_eq!(point_count(&[1.0, 2.0], &[3.0, 4.0]), Some(2));
    }

    #[test]
    fn format_constants() {
        assert_eq!(vg_format(ImageFormat::Luminance), 10);
        assert_eq!(vg_format(ImageFormat::AbgrPremultiplied), 194);
        assert_eq!(vg_quality(ImageQuality::Faster), 2);
    }
}
