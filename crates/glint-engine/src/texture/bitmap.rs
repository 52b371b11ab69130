use ::image::imageops::{self, FilterType};
use ::image::{Rgba, RgbaImage};

use super::{Extent, PixelSource, Pixels};

/// CPU-side RGBA8 pixels with premultiplied alpha.
///
/// Decoding happens elsewhere; a `Bitmap` is what a decoded image hands to the
/// texture backend for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Wraps pixels that are already premultiplied.
    pub fn from_premultiplied(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Premultiplies straight-alpha pixels (the usual output of decoders).
    pub fn from_straight_alpha(mut pixels: RgbaImage) -> Self {
        for Rgba([r, g, b, a]) in pixels.pixels_mut() {
            let alpha = u16::from(*a);
            *r = premul_channel(*r, alpha);
            *g = premul_channel(*g, alpha);
            *b = premul_channel(*b, alpha);
        }
        Self { pixels }
    }

    /// Builds a bitmap from raw premultiplied RGBA8 bytes.
    ///
    /// Returns `None` if `rgba` does not hold exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, rgba).map(Self::from_premultiplied)
    }

    /// A bitmap filled with one premultiplied color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_premultiplied(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    #[inline]
    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }
}

impl PixelSource for Bitmap {
    fn extent(&self) -> Extent {
        Extent::new(self.pixels.width(), self.pixels.height())
    }

    fn pixels(&self) -> Option<Pixels<'_>> {
        Some(Pixels { extent: self.extent(), rgba: self.pixels.as_raw() })
    }

    fn kind(&self) -> &'static str {
        "bitmap"
    }
}

#[inline]
fn premul_channel(c: u8, alpha: u16) -> u8 {
    // Rounded c * a / 255.
    ((u16::from(c) * alpha + 127) / 255) as u8
}

/// Number of levels below level 0 for a full mip chain of `extent`.
pub fn mip_level_count(extent: Extent) -> u32 {
    let largest = extent.width.max(extent.height);
    if largest == 0 { 0 } else { 31 - largest.leading_zeros() }
}

/// Builds the downsampled levels below `pixels`, halving each axis (min 1)
/// until 1x1 or `max_levels` is reached.
///
/// Premultiplied input keeps the filtering free of dark fringes.
/// Returns an empty chain for malformed input.
pub fn mip_chain(pixels: Pixels<'_>, max_levels: u32) -> Vec<RgbaImage> {
    let count = mip_level_count(pixels.extent).min(max_levels);
    if count == 0 || !pixels.is_well_formed() {
        return Vec::new();
    }
    let Some(base) = RgbaImage::from_raw(pixels.extent.width, pixels.extent.height, pixels.rgba.to_vec())
    else {
        return Vec::new();
    };

    let mut levels: Vec<RgbaImage> = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let prev = levels.last().unwrap_or(&base);
        let w = (prev.width() / 2).max(1);
        let h = (prev.height() / 2).max(1);
        let next = imageops::resize(prev, w, h, FilterType::Triangle);
        levels.push(next);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_alpha_is_premultiplied() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 128, 0, 128]));
        let bmp = Bitmap::from_straight_alpha(img);
        assert_eq!(bmp.as_image().get_pixel(0, 0), &Rgba([128, 64, 0, 128]));
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Bitmap::from_raw(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_raw(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn bitmap_always_supplies_pixels() {
        let bmp = Bitmap::filled(3, 2, [255, 255, 255, 255]);
        let px = bmp.pixels().unwrap();
        assert_eq!(px.extent, Extent::new(3, 2));
        assert!(px.is_well_formed());
    }

    #[test]
    fn mip_level_count_follows_largest_axis() {
        assert_eq!(mip_level_count(Extent::new(1, 1)), 0);
        assert_eq!(mip_level_count(Extent::new(256, 256)), 8);
        assert_eq!(mip_level_count(Extent::new(256, 64)), 8);
        assert_eq!(mip_level_count(Extent::new(100, 3)), 6);
    }

    #[test]
    fn mip_chain_halves_down_to_one() {
        let bmp = Bitmap::filled(8, 2, [10, 20, 30, 255]);
        let chain = mip_chain(bmp.pixels().unwrap(), u32::MAX);
        let sizes: Vec<_> = chain.iter().map(|l| (l.width(), l.height())).collect();
        assert_eq!(sizes, vec![(4, 1), (2, 1), (1, 1)]);
        assert_eq!(chain[2].get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn mip_chain_respects_cap() {
        let bmp = Bitmap::filled(64, 64, [0, 0, 0, 0]);
        assert_eq!(mip_chain(bmp.pixels().unwrap(), 2).len(), 2);
        assert!(mip_chain(bmp.pixels().unwrap(), 0).is_empty());
    }
}
