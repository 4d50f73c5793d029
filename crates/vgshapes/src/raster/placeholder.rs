use crate::canvas::Canvas;
use crate::device::Backend;

impl<B: Backend> Canvas<B> {
    /// Draws a stand-in for an image that could not be loaded: a light gray
    /// box crossed out in gray, with `label` centred in it.
    ///
    /// Leaves the fill black and the stroke width at 0.
    pub fn placeholder_image(&self, x: f32, y: f32, w: i32, h: i32, label: &str) {
        let (fw, fh) = (w as f32, h as f32);

        self.fill_color("lightgray", None);
        self.rect(x, y, fw, fh);

        self.stroke_width(1.0);
        self.stroke_color("gray", None);
        self.line(x, y, x + fw, y + fh);
        self.line(x, y + fh, x + fw, y);

        self.stroke_width(0.0);
        self.fill_color("black", None);
        self.text_mid(x + fw / 2.0, y + fh / 2.0, label, "sans", w / 20);
    }
}

#[cfg(test)]
mod tests {
    use crate::device::{DrawCall, Recorder};
    use crate::paint::Rgb;
    use crate::text::{TextAlign, Typeface};
    use crate::Canvas;

    #[test]
    fn placeholder_draws_crossed_box_and_label() {
        let c = Canvas::init(Recorder::default()).unwrap();
        c.backend().take();

        c.placeholder_image(10.0, 20.0, 200, 100, "missing.png");

        assert_eq!(
            c.backend().take(),
            vec![
                DrawCall::Fill(Rgb::new(211, 211, 211), 1.0),
                DrawCall::Rect { x: 10.0, y: 20.0, w: 200.0, h: 100.0 },
                DrawCall::StrokeWidth(1.0),
                DrawCall::Stroke(Rgb::new(128, 128, 128), 1.0),
                DrawCall::Line { x1: 10.0, y1: 20.0, x2: 210.0, y2: 120.0 },
                DrawCall::Line { x1: 10.0, y1: 120.0, x2: 210.0, y2: 20.0 },
                DrawCall::StrokeWidth(0.0),
                DrawCall::Fill(Rgb::BLACK, 1.0),
                DrawCall::Text {
                    x: 110.0,
                    y: 70.0,
                    text: "missing.png".into(),
                    face: Typeface::Sans,
                    size: 10,
                    align: TextAlign::Middle,
                },
            ]
        );
    }
}
