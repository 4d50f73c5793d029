// See https://github.com/ajstarks/openvg (shapes.h, fontinfo.h) and the
// Khronos OpenVG 1.1 headers for the C side of these declarations.

#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals, dead_code)]

use std::ffi;

pub type VGfloat = ffi::c_float;
pub type VGint = i32;
pub type VGuint = u32;
pub type VGbitfield = VGuint;
pub type VGHandle = VGuint;
pub type VGImage = VGHandle;
pub type VGPath = VGHandle;

/// `VGImageFormat` (C enum).
pub type VGImageFormat = ffi::c_int;
/// `VGParamType` (C enum).
pub type VGParamType = ffi::c_int;

pub const VG_INVALID_HANDLE: VGHandle = 0;

pub const VG_lRGBA_8888: VGImageFormat = 8;
pub const VG_lRGBA_8888_PRE: VGImageFormat = 9;
pub const VG_lL_8: VGImageFormat = 10;
pub const VG_A_8: VGImageFormat = 11;
pub const VG_sABGR_8888_PRE: VGImageFormat = 2 | (1 << 6) | (1 << 7);

pub const VG_IMAGE_QUALITY_NONANTIALIASED: VGbitfield = 1 << 0;
pub const VG_IMAGE_QUALITY_FASTER: VGbitfield = 1 << 1;
pub const VG_IMAGE_QUALITY_BETTER: VGbitfield = 1 << 2;

pub const VG_MATRIX_MODE: VGParamType = 0x1100;

pub const VG_MATRIX_PATH_USER_TO_SURFACE: VGint = 0x1400;
pub const VG_MATRIX_IMAGE_USER_TO_SURFACE: VGint = 0x1401;
pub const VG_MATRIX_GLYPH_USER_TO_SURFACE: VGint = 0x1404;

pub const MAXFONTPATH: usize = 500;

/// Built-in font description, passed to libshapes by value.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Fontinfo {
    pub CharacterMap: *const ffi::c_short,
    pub GlyphAdvances: *const ffi::c_int,
    pub Count: ffi::c_int,
    pub descender_height: ffi::c_int,
    pub font_height: ffi::c_int,
    pub Glyphs: [VGPath; MAXFONTPATH],
}

unsafe extern "C" {
    pub static SansTypeface: Fontinfo;
    pub static SerifTypeface: Fontinfo;
    pub static MonoTypeface: Fontinfo;

    // ── libshapes: lifecycle ──────────────────────────────────────────────

    pub fn init(w: *mut ffi::c_int, h: *mut ffi::c_int);
    pub fn finish();
    pub fn Start(width: ffi::c_int, height: ffi::c_int);
    pub fn End();
    pub fn SaveEnd(filename: *const ffi::c_char);
    pub fn Background(r: ffi::c_uint, g: ffi::c_uint, b: ffi::c_uint);
    pub fn BackgroundRGB(r: ffi::c_uint, g: ffi::c_uint, b: ffi::c_uint, a: VGfloat);

    // ── libshapes: paint ──────────────────────────────────────────────────

    pub fn Fill(r: ffi::c_uint, g: ffi::c_uint, b: ffi::c_uint, a: VGfloat);
    pub fn Stroke(r: ffi::c_uint, g: ffi::c_uint, b: ffi::c_uint, a: VGfloat);
    pub fn StrokeWidth(width: VGfloat);
    pub fn FillLinearGradient(
        x1: VGfloat,
        y1: VGfloat,
        x2: VGfloat,
        y2: VGfloat,
        stops: *const VGfloat,
        ns: ffi::c_int,
    );
    pub fn FillRadialGradient(
        cx: VGfloat,
        cy: VGfloat,
        fx: VGfloat,
        fy: VGfloat,
        radius: VGfloat,
        stops: *const VGfloat,
        ns: ffi::c_int,
    );

    // ── libshapes: shapes ─────────────────────────────────────────────────

    pub fn Line(x1: VGfloat, y1: VGfloat, x2: VGfloat, y2: VGfloat);
    pub fn Rect(x: VGfloat, y: VGfloat, w: VGfloat, h: VGfloat);
    pub fn Roundrect(x: VGfloat, y: VGfloat, w: VGfloat, h: VGfloat, rw: VGfloat, rh: VGfloat);
    pub fn Ellipse(x: VGfloat, y: VGfloat, w: VGfloat, h: VGfloat);
    pub fn Circle(x: VGfloat, y: VGfloat, r: VGfloat);
    pub fn Qbezier(sx: VGfloat, sy: VGfloat, cx: VGfloat, cy: VGfloat, ex: VGfloat, ey: VGfloat);
    pub fn Cbezier(
        sx: VGfloat,
        sy: VGfloat,
        cx: VGfloat,
        cy: VGfloat,
        px: VGfloat,
        py: VGfloat,
        ex: VGfloat,
        ey: VGfloat,
    );
    pub fn Arc(x: VGfloat, y: VGfloat, w: VGfloat, h: VGfloat, sa: VGfloat, aext: VGfloat);
    pub fn Polygon(x: *const VGfloat, y: *const VGfloat, n: VGint);
    pub fn Polyline(x: *const VGfloat, y: *const VGfloat, n: VGint);

    // ── libshapes: text ───────────────────────────────────────────────────

    pub fn Text(x: VGfloat, y: VGfloat, s: *const ffi::c_char, f: Fontinfo, pointsize: ffi::c_int);
    pub fn TextMid(x: VGfloat, y: VGfloat, s: *const ffi::c_char, f: Fontinfo, pointsize: ffi::c_int);
    pub fn TextEnd(x: VGfloat, y: VGfloat, s: *const ffi::c_char, f: Fontinfo, pointsize: ffi::c_int);
    pub fn TextWidth(s: *const ffi::c_char, f: Fontinfo, pointsize: ffi::c_int) -> VGfloat;

    // ── libshapes: transforms ─────────────────────────────────────────────

    pub fn Translate(x: VGfloat, y: VGfloat);
    pub fn Rotate(r: VGfloat);
    pub fn Shear(x: VGfloat, y: VGfloat);
    pub fn Scale(x: VGfloat, y: VGfloat);

    // ── OpenVG ────────────────────────────────────────────────────────────

    pub fn vgSeti(param_type: VGParamType, value: VGint);
    pub fn vgLoadIdentity();
    pub fn vgCreateImage(
        format: VGImageFormat,
        width: VGint,
        height: VGint,
        allowed_quality: VGbitfield,
    ) -> VGImage;
    pub fn vgImageSubData(
        image: VGImage,
        data: *const ffi::c_void,
        data_stride: VGint,
        data_format: VGImageFormat,
        x: VGint,
        y: VGint,
        width: VGint,
        height: VGint,
    );
    pub fn vgDrawImage(image: VGImage);
    pub fn vgDestroyImage(image: VGImage);
}
