use crate::device::Backend;
use crate::text::{TextAlign, Typeface};

use super::Canvas;

impl<B: Backend> Canvas<B> {
    /// Text beginning at `(x, y)`.
    ///
    /// `family` is `"sans"`, `"serif"` or `"mono"`; anything else uses serif.
    pub fn text(&self, x: f32, y: f32, text: &str, family: &str, size: i32) {
        self.text_aligned(x, y, text, Typeface::from_family(family), size, TextAlign::Start);
    }

    /// Text centered on `(x, y)`.
    pub fn text_mid(&self, x: f32, y: f32, text: &str, family: &str, size: i32) {
        self.text_aligned(x, y, text, Typeface::from_family(family), size, TextAlign::Middle);
    }

    /// Text ending at `(x, y)`.
    pub fn text_end(&self, x: f32, y: f32, text: &str, family: &str, size: i32) {
        self.text_aligned(x, y, text, Typeface::from_family(family), size, TextAlign::End);
    }

    pub fn text_aligned(&self, x: f32, y: f32, text: &str, face: Typeface, size: i32, align: TextAlign) {
        self.backend.text(x, y, text, face, size, align);
    }

    /// Advance width of `text` at the given size.
    pub fn text_width(&self, text: &str, family: &str, size: i32) -> f32 {
        self.backend.text_width(text, Typeface::from_family(family), size)
    }
}

#[cfg(test)]
mod tests {
    use crate::device::{DrawCall, Recorder};
    use crate::text::{TextAlign, Typeface};
    use crate::Canvas;

    #[test]
    fn alignment_variants() {
        let c = Canvas::init(Recorder::default()).unwrap();
        c.backend().take();

        c.text(10.0, 20.0, "start", "sans", 12);
        c.text_mid(10.0, 20.0, "mid", "mono", 14);
        c.text_end(10.0, 20.0, "end", "fantasy", 16);

        assert_eq!(
            c.backend().take(),
            vec![
                DrawCall::Text {
                    x: 10.0,
                    y: 20.0,
                    text: "start".into(),
                    face: Typeface::Sans,
                    size: 12,
                    align: TextAlign::Start,
                },
                DrawCall::Text {
                    x: 10.0,
                    y: 20.0,
                    text: "mid".into(),
                    face: Typeface::Mono,
                    size: 14,
                    align: TextAlign::Middle,
                },
                DrawCall::Text {
                    x: 10.0,
                    y: 20.0,
                    text: "end".into(),
                    face: Typeface::Serif,
                    size: 16,
                    align: TextAlign::End,
                },
            ]
        );
    }

    #[test]
    fn text_width_is_a_native_measurement() {
        let c = Canvas::init(Recorder::default()).unwrap();
        c.backend().take();

        let w = c.text_width("abcd", "serif", 10);
        assert!((w - 24.0).abs() < 1e-4, "{w}");
        assert_eq!(
            c.backend().take(),
            vec![DrawCall::TextWidth { text: "abcd".into(), face: Typeface::Serif, size: 10 }]
        );
    }
}
