//! Drawing session.
//!
//! [`Canvas`] owns a [`Backend`] for the lifetime of one graphics session and
//! exposes the procedural drawing API on top of it. Operations are grouped by
//! concern in the submodules; each is a direct, unbuffered call into the
//! backend.

mod init;
mod paint;
mod shapes;
mod text;
mod transform;

use std::marker::PhantomData;
use std::path::Path;

use anyhow::Result;

use crate::device::Backend;
use crate::paint::{lookup_color, Rgb};

pub use init::CanvasInit;
pub use shapes::poly_points;

/// A live graphics session.
///
/// Invariants:
/// - the native `init` has been called exactly once and `finish` runs exactly
///   once, when the canvas is dropped or [`finish`](Canvas::finish)ed
/// - the canvas never leaves the thread that created it (`!Send`, `!Sync`),
///   because the native context is bound to that thread
/// - images borrow the canvas, so all of them are released before `finish`
pub struct Canvas<B: Backend> {
    pub(crate) backend: B,
    width: i32,
    height: i32,
    pub(crate) init: CanvasInit,
    _not_send: PhantomData<*const ()>,
}

impl<B: Backend> Canvas<B> {
    /// Initializes the display with default settings.
    pub fn init(backend: B) -> Result<Self> {
        Self::with_init(backend, CanvasInit::default())
    }

    /// Initializes the display and records the surface size it reports.
    pub fn with_init(backend: B, init: CanvasInit) -> Result<Self> {
        let (width, height) = backend.init();
        let canvas = Self {
            backend,
            width,
            height,
            init,
            _not_send: PhantomData,
        };

        // On error `canvas` is dropped here, which finishes the native session.
        anyhow::ensure!(
            width > 0 && height > 0,
            "display reported an unusable surface size {width}x{height}"
        );

        log::info!("graphics session started ({width}x{height})");
        Ok(canvas)
    }

    /// Ends the session and releases the display.
    pub fn finish(self) {
        drop(self);
    }

    /// Surface width in pixels, as reported at init.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels, as reported at init.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The backend, for inspection in tests. Drawing goes through the canvas
    /// so that `finish` stays tied to its lifetime.
    #[inline]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn settings(&self) -> &CanvasInit {
        &self.init
    }

    // ── pictures ──────────────────────────────────────────────────────────

    /// Begins a picture of `width` x `height`.
    pub fn start(&self, width: i32, height: i32) {
        self.backend.start(width, height);
    }

    /// Begins a picture and clears it to `color`.
    pub fn start_rgb(&self, width: i32, height: i32, color: Rgb) {
        self.start(width, height);
        self.background(color);
    }

    /// Begins a picture and clears it to a named color (alpha defaults to 1).
    pub fn start_color(&self, width: i32, height: i32, color: &str, alpha: Option<f32>) {
        self.start(width, height);
        self.background_color(color, alpha);
    }

    /// Ends the picture and presents it.
    pub fn end(&self) {
        self.backend.end();
    }

    /// Ends the picture and writes the raw raster to `path`.
    pub fn save_end(&self, path: impl AsRef<Path>) {
        self.backend.save_end(path.as_ref());
    }

    // ── background ────────────────────────────────────────────────────────

    /// Clears the surface to an opaque color.
    pub fn background(&self, color: Rgb) {
        self.backend.background(color);
    }

    pub fn background_rgba(&self, color: Rgb, alpha: f32) {
        self.backend.background_rgba(color, alpha);
    }

    /// Clears the surface to a named or `rgb()` color (alpha defaults to 1).
    pub fn background_color(&self, color: &str, alpha: Option<f32>) {
        self.background_rgba(lookup_color(color), alpha.unwrap_or(1.0));
    }
}

impl<B: Backend> Drop for Canvas<B> {
    fn drop(&mut self) {
        self.backend.finish();
        log::info!("graphics session finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DrawCall, Recorder};

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn init_reports_surface_size() {
        let canvas = Canvas::init(Recorder::new(1280, 720)).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1280, 720));
        assert_eq!(canvas.backend().calls(), vec![DrawCall::Init]);
    }

    #[test]
    fn zero_size_display_is_an_error() {
        let err = Canvas::init(Recorder::new(0, 480)).err().unwrap();
        assert!(err.to_string().contains("0x480"), "{err}");
    }

    #[test]
    fn finish_is_forwarded_once() {
        let rec = Recorder::default();
        let canvas = Canvas::init(rec.clone()).unwrap();
        canvas.end();
        canvas.finish();
        assert_eq!(rec.calls(), vec![DrawCall::Init, DrawCall::End, DrawCall::Finish]);
    }

    #[test]
    fn dropping_forwards_finish_once() {
        let rec = Recorder::default();
        {
            let canvas = Canvas::init(rec.clone()).unwrap();
            canvas.start(10, 10);
        }
        let finishes = rec.calls().iter().filter(|c| **c == DrawCall::Finish).count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn failed_init_still_releases_display() {
        let rec = Recorder::new(-1, -1);
        assert!(Canvas::init(rec.clone()).is_err());
        assert_eq!(rec.calls(), vec![DrawCall::Init, DrawCall::Finish]);
    }

    // ── pictures ──────────────────────────────────────────────────────────

    #[test]
    fn start_variants() {
        let canvas = Canvas::init(Recorder::default()).unwrap();
        canvas.backend().take();

        canvas.start(640, 480);
        canvas.start_rgb(640, 480, Rgb::new(1, 2, 3));
        canvas.start_color(640, 480, "red", None);
        canvas.start_color(640, 480, "rgb(4,5,6)", Some(0.5));

        assert_eq!(
            canvas.backend().take(),
            vec![
                DrawCall::Start { width: 640, height: 480 },
                DrawCall::Start { width: 640, height: 480 },
                DrawCall::Background(Rgb::new(1, 2, 3)),
                DrawCall::Start { width: 640, height: 480 },
                DrawCall::BackgroundRgba(Rgb::new(255, 0, 0), 1.0),
                DrawCall::Start { width: 640, height: 480 },
                DrawCall::BackgroundRgba(Rgb::new(4, 5, 6), 0.5),
            ]
        );
    }

    #[test]
    fn end_and_save_end() {
        let canvas = Canvas::init(Recorder::default()).unwrap();
        canvas.backend().take();

        canvas.end();
        canvas.save_end("frame.raw");

        assert_eq!(
            canvas.backend().take(),
            vec![DrawCall::End, DrawCall::SaveEnd("frame.raw".into())]
        );
    }

    #[test]
    fn unknown_background_name_is_black() {
        let canvas = Canvas::init(Recorder::default()).unwrap();
        canvas.backend().take();

        canvas.background_color("nope", Some(0.25));
        assert_eq!(canvas.backend().take(), vec![DrawCall::BackgroundRgba(Rgb::BLACK, 0.25)]);
    }
}
