use crate::device::Backend;

use super::Canvas;

/// Coordinate transforms. Each composes with the current path, glyph and
/// image matrices; [`reset_matrix`](Canvas::reset_matrix) returns all three to identity.
impl<B: Backend> Canvas<B> {
    pub fn translate(&self, x: f32, y: f32) {
        self.backend.translate(x, y);
    }

    /// Rotates by `degrees` counter-clockwise.
    pub fn rotate(&self, degrees: f32) {
        self.backend.rotate(degrees);
    }

    pub fn shear(&self, x: f32, y: f32) {
        self.backend.shear(x, y);
    }

    pub fn scale(&self, x: f32, y: f32) {
        self.backend.scale(x, y);
    }

    pub fn reset_matrix(&self) {
        self.backend.reset_matrix();
    }
}
