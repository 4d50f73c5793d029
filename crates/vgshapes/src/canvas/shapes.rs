use crate::device::Backend;

use super::Canvas;

/// Number of points a polygon/polyline with these coordinates draws.
///
/// Mismatched lengths draw nothing rather than truncating.
#[inline]
pub fn poly_points(x: &[f32], y: &[f32]) -> usize {
    if x.len() == y.len() { x.len() } else { 0 }
}

impl<B: Backend> Canvas<B> {
    /// Line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.backend.line(x1, y1, x2, y2);
    }

    /// Rectangle with its lower-left corner at `(x, y)`.
    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.backend.rect(x, y, w, h);
    }

    /// Rounded rectangle; `(rw, rh)` are the corner radii.
    pub fn roundrect(&self, x: f32, y: f32, w: f32, h: f32, rw: f32, rh: f32) {
        self.backend.roundrect(x, y, w, h, rw, rh);
    }

    /// Ellipse centered at `(x, y)` with dimensions `(w, h)`.
    pub fn ellipse(&self, x: f32, y: f32, w: f32, h: f32) {
        self.backend.ellipse(x, y, w, h);
    }

    /// Circle centered at `(x, y)`.
    ///
    /// libshapes treats `r` as the diameter.
    pub fn circle(&self, x: f32, y: f32, r: f32) {
        self.backend.circle(x, y, r);
    }

    /// Quadratic Bézier from `(sx, sy)` to `(ex, ey)` with control point `(cx, cy)`.
    pub fn qbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, ex: f32, ey: f32) {
        self.backend.qbezier(sx, sy, cx, cy, ex, ey);
    }

    /// Cubic Bézier from `(sx, sy)` to `(ex, ey)` with control points
    /// `(cx, cy)` and `(px, py)`.
    #[allow(clippy::too_many_arguments)]
    pub fn cbezier(&self, sx: f32, sy: f32, cx: f32, cy: f32, px: f32, py: f32, ex: f32, ey: f32) {
        self.backend.cbezier(sx, sy, cx, cy, px, py, ex, ey);
    }

    /// Elliptical arc centered at `(x, y)`, starting at `sa` degrees and
    /// extending `aext` degrees.
    pub fn arc(&self, x: f32, y: f32, w: f32, h: f32, sa: f32, aext: f32) {
        self.backend.arc(x, y, w, h, sa, aext);
    }

    /// Closed, filled polygon through the points `(x[i], y[i])`.
    pub fn polygon(&self, x: &[f32], y: &[f32]) {
        if poly_points(x, y) > 0 {
            self.backend.polygon(x, y);
        } else {
            log::debug!("polygon skipped: {} x / {} y coordinates", x.len(), y.len());
        }
    }

    /// Open, stroked polyline through the points `(x[i], y[i])`.
    pub fn polyline(&self, x: &[f32], y: &[f32]) {
        if poly_points(x, y) > 0 {
            self.backend.polyline(x, y);
        } else {
            log::debug!("polyline skipped: {} x / {} y coordinates", x.len(), y.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DrawCall, Recorder};

    fn canvas() -> Canvas<Recorder> {
        let canvas = Canvas::init(Recorder::default()).unwrap();
        canvas.backend().take();
        canvas
    }

    // ── pass-through ──────────────────────────────────────────────────────

    #[test]
    fn primitives_forward_arguments_unchanged() {
        let c = canvas();
        c.line(1.0, 2.0, 3.0, 4.0);
        c.rect(5.0, 6.0, 7.0, 8.0);
        c.roundrect(1.0, 1.0, 10.0, 10.0, 2.0, 3.0);
        c.ellipse(0.0, 0.0, 4.0, 2.0);
        c.circle(9.0, 9.0, 6.0);
        c.qbezier(0.0, 0.0, 1.0, 1.0, 2.0, 0.0);
        c.cbezier(0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0);
        c.arc(5.0, 5.0, 10.0, 10.0, 0.0, 90.0);

        assert_eq!(
            c.backend().take(),
            vec![
                DrawCall::Line { x1: 1.0, y1: 2.0, x2: 3.0, y2: 4.0 },
                DrawCall::Rect { x: 5.0, y: 6.0, w: 7.0, h: 8.0 },
                DrawCall::Roundrect { x: 1.0, y: 1.0, w: 10.0, h: 10.0, rw: 2.0, rh: 3.0 },
                DrawCall::Ellipse { x: 0.0, y: 0.0, w: 4.0, h: 2.0 },
                DrawCall::Circle { x: 9.0, y: 9.0, r: 6.0 },
                DrawCall::Qbezier { sx: 0.0, sy: 0.0, cx: 1.0, cy: 1.0, ex: 2.0, ey: 0.0 },
                DrawCall::Cbezier {
                    sx: 0.0,
                    sy: 0.0,
                    cx: 1.0,
                    cy: 1.0,
                    px: 2.0,
                    py: 1.0,
                    ex: 3.0,
                    ey: 0.0,
                },
                DrawCall::Arc { x: 5.0, y: 5.0, w: 10.0, h: 10.0, sa: 0.0, aext: 90.0 },
            ]
        );
    }

    // ── polygon / polyline ────────────────────────────────────────────────

    #[test]
    fn poly_points_counts() {
        assert_eq!(poly_points(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 3);
        assert_eq!(poly_points(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 0);
        assert_eq!(poly_points(&[], &[]), 0);
    }

    #[test]
    fn polygon_and_polyline_forward_points() {
        let c = canvas();
        c.polygon(&[0.0, 10.0, 5.0], &[0.0, 0.0, 8.0]);
        c.polyline(&[0.0, 1.0], &[2.0, 3.0]);

        assert_eq!(
            c.backend().take(),
            vec![
                DrawCall::Polygon { x: vec![0.0, 10.0, 5.0], y: vec![0.0, 0.0, 8.0] },
                DrawCall::Polyline { x: vec![0.0, 1.0], y: vec![2.0, 3.0] },
            ]
        );
    }

    #[test]
    fn mismatched_lengths_draw_nothing() {
        let c = canvas();
        c.polygon(&[0.0, 10.0, 5.0], &[0.0, 0.0]);
        c.polyline(&[0.0], &[1.0, 2.0]);
        c.polygon(&[], &[]);
        assert!(c.backend().is_empty());
    }
}
