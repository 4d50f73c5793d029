use crate::device::ImageQuality;

/// Session parameters for [`Canvas::with_init`](super::Canvas::with_init).
///
/// Keep this structure minimal. libshapes sizes the surface to the display on
/// its own, so only settings the binding itself applies belong here.
#[derive(Debug, Clone)]
pub struct CanvasInit {
    /// Quality hint for every image created through this canvas.
    ///
    /// `Faster` matches what libshapes uses for its own JPEG images.
    pub image_quality: ImageQuality,
}

impl Default for CanvasInit {
    fn default() -> Self {
        Self { image_quality: ImageQuality::Faster }
    }
}
