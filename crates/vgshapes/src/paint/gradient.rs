use bytemuck::{Pod, Zeroable};

use super::Rgb;

/// A single gradient stop.
///
/// `offset` and `alpha` are expected in [0, 1] in typical usage, but neither
/// the range nor the ordering of stops is enforced. The native rasterizer gets
/// exactly what the caller supplied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgb, alpha: f32) -> Self {
        Self { offset, color, alpha }
    }
}

/// One packed stop, laid out the way `vgSetParameterfv(VG_PAINT_COLOR_RAMP_STOPS)`
/// reads it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RampEntry {
    pub offset: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl From<&GradientStop> for RampEntry {
    #[inline]
    fn from(stop: &GradientStop) -> Self {
        let [red, green, blue] = stop.color.to_unit();
        Self { offset: stop.offset, red, green, blue, alpha: stop.alpha }
    }
}

/// Gradient stops packed into the flat float buffer the native gradient calls take.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ramp {
    entries: Vec<RampEntry>,
}

impl Ramp {
    /// Packs `stops` in input order.
    pub fn pack(stops: &[GradientStop]) -> Self {
        Self { entries: stops.iter().map(RampEntry::from).collect() }
    }

    /// Number of stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[RampEntry] {
        &self.entries
    }

    /// `[offset, r, g, b, a]` per stop; length is `5 * len()`.
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.entries)
    }
}

/// Linear gradient between `(x1, y1)` and `(x2, y2)` in user coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, stops: Vec<GradientStop>) -> Self {
        Self { x1, y1, x2, y2, stops }
    }
}

/// Radial gradient centered at `(cx, cy)` with radius `radius` and focal
/// point `(fx, fy)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub cx: f32,
    pub cy: f32,
    pub fx: f32,
    pub fy: f32,
    pub radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(cx: f32, cy: f32, fx: f32, fy: f32, radius: f32, stops: Vec<GradientStop>) -> Self {
        Self { cx, cy, fx, fy, radius, stops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(offset: f32, rgb: (u8, u8, u8), alpha: f32) -> GradientStop {
        GradientStop::new(offset, Rgb::from(rgb), alpha)
    }

    #[test]
    fn packs_five_floats_per_stop_in_order() {
        let stops = [
            stop(0.0, (255, 0, 0), 1.0),
            stop(0.5, (0, 255, 0), 0.5),
            stop(1.0, (0, 0, 255), 0.25),
        ];
        let ramp = Ramp::pack(&stops);

        assert_eq!(ramp.len(), 3);
        assert_eq!(
            ramp.as_floats(),
            &[
                0.0, 1.0, 0.0, 0.0, 1.0, //
                0.5, 0.0, 1.0, 0.0, 0.5, //
                1.0, 0.0, 0.0, 1.0, 0.25,
            ]
        );
    }

    #[test]
    fn channel_scaling_is_divide_by_255() {
        let ramp = Ramp::pack(&[stop(0.3, (51, 102, 204), 0.7)]);
        let f = ramp.as_floats();
        assert_eq!(f[0], 0.3);
        assert_eq!(f[1], 51.0 / 255.0);
        assert_eq!(f[2], 102.0 / 255.0);
        assert_eq!(f[3], 204.0 / 255.0);
        assert_eq!(f[4], 0.7);
    }

    #[test]
    fn malformed_offsets_pass_through() {
        let ramp = Ramp::pack(&[stop(1.5, (0, 0, 0), 1.0), stop(-0.2, (0, 0, 0), 2.0)]);
        let f = ramp.as_floats();
        assert_eq!(f[0], 1.5);
        assert_eq!(f[5], -0.2);
        assert_eq!(f[9], 2.0);
    }

    #[test]
    fn empty_ramp() {
        let ramp = Ramp::pack(&[]);
        assert!(ramp.is_empty());
        assert!(ramp.as_floats().is_empty());
    }
}
