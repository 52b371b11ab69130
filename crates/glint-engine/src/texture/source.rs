use crate::coords::Vec2;

/// Pixel dimensions of a texture or pixel store.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Borrowed RGBA8 pixel rows, premultiplied alpha, tightly packed.
#[derive(Debug, Copy, Clone)]
pub struct Pixels<'a> {
    pub extent: Extent,
    pub rgba: &'a [u8],
}

impl<'a> Pixels<'a> {
    /// Number of bytes a tightly packed RGBA8 buffer of `extent` occupies.
    #[inline]
    pub fn expected_len(extent: Extent) -> usize {
        extent.width as usize * extent.height as usize * 4
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.rgba.len() == Self::expected_len(self.extent)
    }
}

/// Supplies the pixels a texture is created from.
///
/// This is the capability an image variant plugs into the texture sheet. A
/// source that cannot (yet) produce pixels returns `None` from [`pixels`],
/// which makes the image skip rendering rather than fail.
///
/// [`pixels`]: PixelSource::pixels
pub trait PixelSource {
    /// Full size of the backing pixel store.
    fn extent(&self) -> Extent;

    /// Pixel data for texture upload, or `None` when unavailable.
    fn pixels(&self) -> Option<Pixels<'_>>;

    /// Short name used in diagnostics.
    fn kind(&self) -> &'static str {
        "image"
    }
}

/// A sized source whose pixels are not available, e.g. an image still loading.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placeholder {
    extent: Extent,
}

impl Placeholder {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { extent: Extent::new(width, height) }
    }
}

impl PixelSource for Placeholder {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn pixels(&self) -> Option<Pixels<'_>> {
        None
    }

    fn kind(&self) -> &'static str {
        "placeholder"
    }
}
