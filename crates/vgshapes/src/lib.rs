//! Procedural 2D drawing over OpenVG.
//!
//! This crate wraps the `libshapes` helper library: a [`Canvas`] owns one
//! graphics session and forwards shapes, text, paint and transforms to the
//! native renderer. Its own logic is limited to color lookup, gradient
//! packing, image format dispatch and terminal mode handling.
//!
//! The native renderer sits behind the [`Backend`] trait. Enable the `openvg`
//! feature for the real FFI backend; [`Recorder`] runs headless.

pub mod canvas;
pub mod device;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod terminal;
pub mod text;

pub use canvas::{poly_points, Canvas, CanvasInit};
#[cfg(feature = "openvg")]
pub use device::OpenVg;
pub use device::{Backend, DrawCall, ImageFormat, ImageHandle, ImageQuality, Recorder};
pub use paint::{lookup_color, GradientStop, LinearGradient, Paint, RadialGradient, Rgb};
pub use raster::{Image, ImageError, Raster, RawImage};
pub use terminal::{RawTerminal, SavedTerminal};
pub use text::{TextAlign, Typeface};
