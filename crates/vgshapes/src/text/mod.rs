//! Text model.
//!
//! Glyph outlines, layout and measurement all live in the native library;
//! this module only names the built-in typefaces and alignment modes.

mod typeface;

pub use typeface::{TextAlign, Typeface};
