use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::paint::{Ramp, Rgb};
use crate::text::{TextAlign, Typeface};

use super::{Backend, ImageFormat, ImageHandle, ImageQuality};

/// One native call as observed by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Init,
    Finish,
    Start { width: i32, height: i32 },
    End,
    SaveEnd(PathBuf),
    Background(Rgb),
    BackgroundRgba(Rgb, f32),
    Fill(Rgb, f32),
    Stroke(Rgb, f32),
    StrokeWidth(f32),
    LinearGradient { x1: f32, y1: f32, x2: f32, y2: f32, ramp: Vec<f32>, stops: usize },
    RadialGradient { cx: f32, cy: f32, fx: f32, fy: f32, radius: f32, ramp: Vec<f32>, stops: usize },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Roundrect { x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32 },
    Ellipse { x: f32, y: f32, w: f32, h: f32 },
    Circle { x: f32, y: f32, r: f32 },
    Qbezier { sx: f32, sy: f32, cx: f32, cy: f32, ex: f32, ey: f32 },
    Cbezier { sx: f32, sy: f32, cx: f32, cy: f32, px: f32, py: f32, ex: f32, ey: f32 },
    Arc { x: f32, y: f32, w: f32, h: f32, sa: f32, aext: f32 },
    Polygon { x: Vec<f32>, y: Vec<f32> },
    Polyline { x: Vec<f32>, y: Vec<f32> },
    Text { x: f32, y: f32, text: String, face: Typeface, size: i32, align: TextAlign },
    TextWidth { text: String, face: Typeface, size: i32 },
    Translate(f32, f32),
    Rotate(f32),
    Shear(f32, f32),
    Scale(f32, f32),
    ResetMatrix,
    CreateImage { format: ImageFormat, width: i32, height: i32, quality: ImageQuality },
    ImageSubData {
        image: ImageHandle,
        data: Vec<u8>,
        stride: i32,
        format: ImageFormat,
        width: i32,
        height: i32,
    },
    DrawImage(ImageHandle),
    DestroyImage(ImageHandle),
}

/// Headless [`Backend`] that records every call in order.
///
/// Clones share one log, so a test can hand a clone to a `Canvas` and still
/// inspect the calls after the canvas is finished. Text is measured as
/// `0.6 * size` per char, which is close enough to the built-in sans face for
/// layout previews.
#[derive(Debug, Clone)]
pub struct Recorder {
    state: Rc<RecorderState>,
}

#[derive(Debug)]
struct RecorderState {
    width: i32,
    height: i32,
    calls: RefCell<Vec<DrawCall>>,
    next_image: Cell<u32>,
    live_images: RefCell<BTreeSet<u32>>,
    fail_allocations: Cell<bool>,
}

impl Recorder {
    /// Creates a recorder reporting a `width` x `height` display.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            state: Rc::new(RecorderState {
                width,
                height,
                calls: RefCell::new(Vec::new()),
                next_image: Cell::new(1),
                live_images: RefCell::new(BTreeSet::new()),
                fail_allocations: Cell::new(false),
            }),
        }
    }

    /// Makes subsequent `create_image` calls return the invalid handle.
    pub fn fail_allocations(&self, fail: bool) {
        self.state.fail_allocations.set(fail);
    }

    /// Returns a copy of the recorded calls in call order.
    pub fn calls(&self) -> Vec<DrawCall> {
        self.state.calls.borrow().clone()
    }

    /// Drains the recorded calls, keeping image bookkeeping.
    pub fn take(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.state.calls.borrow_mut())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.calls.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.calls.borrow().is_empty()
    }

    /// Images created and not yet destroyed.
    pub fn live_images(&self) -> usize {
        self.state.live_images.borrow().len()
    }

    #[inline]
    fn push(&self, call: DrawCall) {
        self.state.calls.borrow_mut().push(call);
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl Backend for Recorder {
    fn init(&self) -> (i32, i32) {
        self.push(DrawCall::Init);
        (self.state.width, self.state.height)
    }

    fn finish(&self) {
        self.push(DrawCall::Finish);
    }

    fn start(&self, width: i32, height: i32) {
        self.push(DrawCall::Start { width, height });
    }

    fn end(&self) {
        self.push(DrawCall::End);
    }

    fn save_end(&self, path: &Path) {
        self.push(DrawCall::SaveEnd(path.to_path_buf()));
    }

    fn background(&self, color: Rgb) {
        self.push(DrawCall::Background(color));
    }

    fn background_rgba(&self, color: Rgb, alpha: f32) {
        self.push(DrawCall::BackgroundRgba(color, alpha));
    }

    fn fill(&self, color: Rgb, alpha: f32) {
        self.push(DrawCall::Fill(color, alpha));
    }

    fn stroke(&self, color: Rgb, alpha: f32) {
        self.push(DrawCall::Stroke(color, alpha));
    }

    fn stroke_width(&self, width: f32) {
        self.push(DrawCall::StrokeWidth(width));
    }

    fn fill_linear_gradient(&self, x1: f32, y1: f32, x2: f32, y2: f32, ramp: &Ramp) {
        self.push(DrawCall::LinearGradient {
            x1,
            y1,
            x2,
            y2,
            ramp: ramp.as_floats().to_vec(),
            stops: ramp.len(),
        });
    }

    fn fill_radial_gradient(&self, cx: f32, cy: f32, fx: f32, fy: f32, radius: f32, ramp: &Ramp) {
        self.push(DrawCall::RadialGradient {
            cx,
            cy,
            fx,
            fy,
            radius,
            ramp: ramp.as_floats().to_vec(),
            stops: ramp.len(),
        });
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCall::Rect { x, y, w, h });
    }

    fn roundrect(&self, x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32) {
        self.push(DrawCall::Roundrect { x, y, w, h, rw, rh });
    }

    fn ellipse(&self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCall::Ellipse { x, y, w, h });
    }

    fn circle(&self, x: f32, y: f32, r: f32) {
        self.push(DrawCall::Circle { x, y, r });
    }

    fn qbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, ex: f32, ey: f32) {
        self.push(DrawCall::Qbezier { sx, sy, cx, cy, ex, ey });
    }

    fn cbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, px: f32, py: f32, ex: f32, ey: f32) {
        self.push(DrawCall::Cbezier { sx, sy, cx, cy, px, py, ex, ey });
    }

    fn arc(&self, x: f32, y: f32, w: f32, h: f32, sa: f32, aext: f32) {
        self.push(DrawCall::Arc { x, y, w, h, sa, aext });
    }

    fn polygon(&self, x: &[f32], y: &[f32]) {
        self.push(DrawCall::Polygon { x: x.to_vec(), y: y.to_vec() });
    }

    fn polyline(&self, x: &[f32], y: &[f32]) {
        self.push(DrawCall::Polyline { x: x.to_vec(), y: y.to_vec() });
    }

    fn text(&self, x: f32, y: f32, text: &str, face: Typeface, size: i32, align: TextAlign) {
        self.push(DrawCall::Text { x, y, text: text.to_owned(), face, size, align });
    }

    fn text_width(&self, text: &str, face: Typeface, size: i32) -> f32 {
        self.push(DrawCall::TextWidth { text: text.to_owned(), face, size });
        text.chars().count() as f32 * size as f32 * 0.6
    }

    fn translate(&self, x: f32, y: f32) {
        self.push(DrawCall::Translate(x, y));
    }

    fn rotate(&self, degrees: f32) {
        self.push(DrawCall::Rotate(degrees));
    }

    fn shear(&self, x: f32, y: f32) {
        self.push(DrawCall::Shear(x, y));
    }

    fn scale(&self, x: f32, y: f32) {
        self.push(DrawCall::Scale(x, y));
    }

    fn reset_matrix(&self) {
        self.push(DrawCall::ResetMatrix);
    }

    fn create_image(
        &self,
        format: ImageFormat,
        width: i32,
        height: i32,
        quality: ImageQuality,
    ) -> Option<ImageHandle> {
        self.push(DrawCall::CreateImage { format, width, height, quality });
        if self.state.fail_allocations.get() {
            return None;
        }

        let raw = self.state.next_image.get();
        self.state.next_image.set(raw.wrapping_add(1).max(1));
        self.state.live_images.borrow_mut().insert(raw);
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
        self.push(DrawCall::ImageSubData {
            image,
            data: data.to_vec(),
            stride,
            format,
            width,
            height,
        });
    }

    fn draw_image(&self, image: ImageHandle) {
        self.push(DrawCall::DrawImage(image));
    }

    fn destroy_image(&self, image: ImageHandle) {
        self.state.live_images.borrow_mut().remove(&image.raw());
        self.push(DrawCall::DestroyImage(image));
    }
}
