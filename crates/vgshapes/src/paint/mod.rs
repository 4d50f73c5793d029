//! Paint model.
//!
//! Scope:
//! - 8-bit RGB colors, the SVG name table and `rgb()` parsing
//! - gradient stops and their packed native form
//! - the `Paint` value applied through `Canvas::set_fill`

pub mod color;
pub mod gradient;
mod names;

pub use color::{lookup_color, Rgb};
pub use gradient::{GradientStop, LinearGradient, RadialGradient, Ramp, RampEntry};

/// Fill paint source.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid { color: Rgb, alpha: f32 },
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid { color, alpha: 1.0 }
    }

    /// Solid paint from a color name or `rgb()` string.
    #[inline]
    pub fn named(name: &str, alpha: f32) -> Self {
        Paint::Solid { color: lookup_color(name), alpha }
    }
}

impl From<Rgb> for Paint {
    fn from(color: Rgb) -> Self {
        Paint::solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::Radial(g)
    }
}
