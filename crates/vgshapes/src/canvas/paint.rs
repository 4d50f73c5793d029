use crate::device::Backend;
use crate::paint::{lookup_color, GradientStop, Paint, Ramp, Rgb};

use super::Canvas;

impl<B: Backend> Canvas<B> {
    /// Sets the fill color.
    pub fn fill_rgb(&self, color: Rgb, alpha: f32) {
        self.backend.fill(color, alpha);
    }

    /// Sets the stroke color.
    pub fn stroke_rgb(&self, color: Rgb, alpha: f32) {
        self.backend.stroke(color, alpha);
    }

    /// Sets the fill color by name or `rgb()` string (alpha defaults to 1).
    pub fn fill_color(&self, color: &str, alpha: Option<f32>) {
        self.fill_rgb(lookup_color(color), alpha.unwrap_or(1.0));
    }

    /// Sets the stroke color by name or `rgb()` string (alpha defaults to 1).
    pub fn stroke_color(&self, color: &str, alpha: Option<f32>) {
        self.stroke_rgb(lookup_color(color), alpha.unwrap_or(1.0));
    }

    pub fn stroke_width(&self, width: f32) {
        self.backend.stroke_width(width);
    }

    /// Fills with a linear gradient from `(x1, y1)` to `(x2, y2)`.
    pub fn fill_linear_gradient(&self, x1: f32, y1: f32, x2: f32, y2: f32, stops: &[GradientStop]) {
        let ramp = Ramp::pack(stops);
        self.backend.fill_linear_gradient(x1, y1, x2, y2, &ramp);
    }

    /// Fills with a radial gradient centered at `(cx, cy)` with focal point `(fx, fy)`.
    pub fn fill_radial_gradient(
        &self,
        cx: f32,
        cy: f32,
        fx: f32,
        fy: f32,
        radius: f32,
        stops: &[GradientStop],
    ) {
        let ramp = Ramp::pack(stops);
        self.backend.fill_radial_gradient(cx, cy, fx, fy, radius, &ramp);
    }

    /// Applies any [`Paint`] as the current fill.
    pub fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid { color, alpha } => self.fill_rgb(*color, *alpha),
            Paint::Linear(g) => self.fill_linear_gradient(g.x1, g.y1, g.x2, g.y2, &g.stops),
            Paint::Radial(g) => {
                self.fill_radial_gradient(g.cx, g.cy, g.fx, g.fy, g.radius, &g.stops)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::device::{DrawCall, Recorder};
    use crate::paint::{GradientStop, LinearGradient, Paint, RadialGradient, Rgb};
    use crate::Canvas;

    fn canvas() -> Canvas<Recorder> {
        let canvas = Canvas::init(Recorder::default()).unwrap();
        canvas.backend().take();
        canvas
    }

    // ── solid ─────────────────────────────────────────────────────────────

    #[test]
    fn named_colors_default_to_opaque() {
        let c = canvas();
        c.fill_color("cornflowerblue", None);
        c.stroke_color("rgb(10,20,30)", Some(0.4));
        c.stroke_width(2.5);

        assert_eq!(
            c.backend().take(),
            vec![
                DrawCall::Fill(Rgb::new(100, 149, 237), 1.0),
                DrawCall::Stroke(Rgb::new(10, 20, 30), 0.4),
                DrawCall::StrokeWidth(2.5),
            ]
        );
    }

    // ── gradients ─────────────────────────────────────────────────────────

    #[test]
    fn linear_gradient_forwards_packed_ramp() {
        let c = canvas();
        let stops = [
            GradientStop::new(0.0, Rgb::WHITE, 1.0),
            GradientStop::new(1.0, Rgb::BLACK, 0.5),
        ];
        c.fill_linear_gradient(0.0, 0.0, 100.0, 0.0, &stops);

        assert_eq!(
            c.backend().take(),
            vec![DrawCall::LinearGradient {
                x1: 0.0,
                y1: 0.0,
                x2: 100.0,
                y2: 0.0,
                ramp: vec![0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.5],
                stops: 2,
            }]
        );
    }

    #[test]
    fn radial_gradient_keeps_stop_order() {
        let c = canvas();
        let stops = [
            GradientStop::new(0.9, Rgb::BLACK, 1.0),
            GradientStop::new(0.1, Rgb::WHITE, 1.0),
        ];
        c.fill_radial_gradient(50.0, 50.0, 40.0, 40.0, 25.0, &stops);

        match &c.backend().take()[..] {
            [DrawCall::RadialGradient { radius, ramp, stops, .. }] => {
                assert_eq!(*radius, 25.0);
                assert_eq!(*stops, 2);
                assert_eq!(ramp[0], 0.9);
                assert_eq!(ramp[5], 0.1);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[test]
    fn empty_gradient_is_forwarded_with_zero_stops() {
        let c = canvas();
        c.fill_linear_gradient(0.0, 0.0, 1.0, 1.0, &[]);
        assert!(matches!(
            &c.backend().take()[..],
            [DrawCall::LinearGradient { stops: 0, ramp, .. }] if ramp.is_empty()
        ));
    }

    // ── Paint dispatch ────────────────────────────────────────────────────

    #[test]
    fn set_fill_dispatches_by_variant() {
        let c = canvas();
        let stops = vec![GradientStop::new(0.0, Rgb::WHITE, 1.0)];

        c.set_fill(&Paint::named("red", 0.5));
        c.set_fill(&LinearGradient::new(0.0, 0.0, 1.0, 0.0, stops.clone()).into());
        c.set_fill(&RadialGradient::new(1.0, 2.0, 3.0, 4.0, 5.0, stops).into());

        let calls = c.backend().take();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], DrawCall::Fill(Rgb::new(255, 0, 0), 0.5));
        assert!(matches!(calls[1], DrawCall::LinearGradient { x2: 1.0, stops: 1, .. }));
        assert!(matches!(calls[2], DrawCall::RadialGradient { radius: 5.0, stops: 1, .. }));
    }
}
