use std::borrow::Cow;

use image::{DynamicImage, GenericImageView, GrayImage, Rgba, RgbaImage};

use crate::device::ImageFormat;

/// Decoded pixels, tagged by the layout that decides the GPU format.
///
/// The four recognised layouts upload their buffer as-is. Anything else goes
/// through [`premultiplied_bottom_up`] first.
#[derive(Debug, Clone)]
pub enum Raster {
    /// 8-bit grayscale.
    Gray(GrayImage),
    /// 8-bit coverage / alpha mask.
    Alpha(GrayImage),
    /// Straight-alpha RGBA.
    Rgba(RgbaImage),
    /// RGBA whose color channels are already scaled by alpha.
    Premultiplied(RgbaImage),
    /// Any other layout.
    Other(DynamicImage),
}

impl Raster {
    /// Treats a single-channel buffer as an alpha mask rather than grayscale.
    pub fn alpha_mask(mask: GrayImage) -> Self {
        Raster::Alpha(mask)
    }

    /// Marks an RGBA buffer as premultiplied.
    pub fn premultiplied(pixels: RgbaImage) -> Self {
        Raster::Premultiplied(pixels)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Raster::Gray(buf) | Raster::Alpha(buf) => buf.dimensions(),
            Raster::Rgba(buf) | Raster::Premultiplied(buf) => buf.dimensions(),
            Raster::Other(img) => img.dimensions(),
        }
    }

    /// GPU format this raster is uploaded as.
    pub fn format(&self) -> ImageFormat {
        match self {
            Raster::Gray(_) => ImageFormat::Luminance,
            Raster::Alpha(_) => ImageFormat::Alpha,
            Raster::Rgba(_) => ImageFormat::Rgba,
            Raster::Premultiplied(_) => ImageFormat::RgbaPremultiplied,
            Raster::Other(_) => ImageFormat::AbgrPremultiplied,
        }
    }

    /// Bytes handed to the native upload, tightly packed rows.
    pub(crate) fn upload_data(&self) -> Cow<'_, [u8]> {
        match self {
            Raster::Gray(buf) | Raster::Alpha(buf) => Cow::Borrowed(buf.as_raw().as_slice()),
            Raster::Rgba(buf) | Raster::Premultiplied(buf) => Cow::Borrowed(buf.as_raw().as_slice()),
            Raster::Other(img) => {
                let (w, h) = img.dimensions();
                log::debug!("converting {w}x{h} {:?} image pixel by pixel", img.color());
                Cow::Owned(premultiplied_bottom_up(img))
            }
        }
    }
}

impl From<DynamicImage> for Raster {
    fn from(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(buf) => Raster::Gray(buf),
            DynamicImage::ImageRgba8(buf) => Raster::Rgba(buf),
            other => Raster::Other(other),
        }
    }
}

impl From<GrayImage> for Raster {
    fn from(buf: GrayImage) -> Self {
        Raster::Gray(buf)
    }
}

impl From<RgbaImage> for Raster {
    fn from(buf: RgbaImage) -> Self {
        Raster::Rgba(buf)
    }
}

/// Converts any image to 8-bit premultiplied `r,g,b,a` bytes, last row first.
///
/// Each pixel is widened to 16 bits, premultiplied as `c * a / 0xffff` and
/// then truncated back to its high byte.
pub fn premultiplied_bottom_up(img: &DynamicImage) -> Vec<u8> {
    let rgba = img.to_rgba16();
    let (w, h) = rgba.dimensions();
    let mut data = Vec::with_capacity(w as usize * h as usize * 4);

    for y in (0..h).rev() {
        for x in 0..w {
            let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
            let a = u32::from(a);
            let premul = |c: u16| ((u32::from(c) * a / 0xffff) >> 8) as u8;
            data.extend_from_slice(&[premul(r), premul(g), premul(b), (a >> 8) as u8]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, LumaA, Rgb};

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn dynamic_image_dispatch() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(2, 2));
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let rgb = DynamicImage::ImageRgb8(ImageBuffer::new(2, 2));

        assert_eq!(Raster::from(gray).format(), ImageFormat::Luminance);
        assert_eq!(Raster::from(rgba).format(), ImageFormat::Rgba);
        assert_eq!(Raster::from(rgb).format(), ImageFormat::AbgrPremultiplied);
    }

    #[test]
    fn explicit_layouts() {
        assert_eq!(Raster::alpha_mask(GrayImage::new(1, 1)).format(), ImageFormat::Alpha);
        assert_eq!(
            Raster::premultiplied(RgbaImage::new(1, 1)).format(),
            ImageFormat::RgbaPremultiplied
        );
    }

    #[test]
    fn direct_layouts_upload_their_buffer() {
        let mut buf = GrayImage::new(3, 1);
        buf.put_pixel(1, 0, image::Luma([77]));
        let raster = Raster::from(buf);
        let data = raster.upload_data();
        assert!(matches!(data, Cow::Borrowed(_)));
        assert_eq!(&*data, &[0, 77, 0]);
    }

    // ── fallback conversion ───────────────────────────────────────────────

    #[test]
    fn opaque_rgb_flips_rows() {
        let mut buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(2, 2);
        buf.put_pixel(0, 0, Rgb([10, 20, 30]));
        buf.put_pixel(1, 0, Rgb([40, 50, 60]));
        buf.put_pixel(0, 1, Rgb([70, 80, 90]));
        buf.put_pixel(1, 1, Rgb([100, 110, 120]));

        let data = premultiplied_bottom_up(&DynamicImage::ImageRgb8(buf));
        assert_eq!(
            data,
            vec![
                70, 80, 90, 255, 100, 110, 120, 255, // bottom row first
                10, 20, 30, 255, 40, 50, 60, 255,
            ]
        );
    }

    #[test]
    fn translucent_pixels_are_premultiplied() {
        let mut buf: ImageBuffer<LumaA<u8>, Vec<u8>> = ImageBuffer::new(2, 1);
        buf.put_pixel(0, 0, LumaA([200, 128]));
        buf.put_pixel(1, 0, LumaA([255, 0]));

        let data = premultiplied_bottom_up(&DynamicImage::ImageLumaA8(buf));
        assert_eq!(data, vec![100, 100, 100, 128, 0, 0, 0, 0]);
    }

    #[test]
    fn sixteen_bit_source_keeps_high_byte() {
        let mut buf: ImageBuffer<Rgba<u16>, Vec<u16>> = ImageBuffer::new(1, 1);
        buf.put_pixel(0, 0, Rgba([0x1234, 0xff00, 0x00ff, 0xffff]));

        let data = premultiplied_bottom_up(&DynamicImage::ImageRgba16(buf));
        assert_eq!(data, vec![0x12, 0xff, 0x00, 0xff]);
    }
}
