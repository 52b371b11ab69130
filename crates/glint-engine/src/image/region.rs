use crate::coords::{Rect, Vec2};
use crate::texture::Extent;

use super::ImageError;

/// Where an image's addressable pixels sit inside its backing texture.
///
/// A plain image covers the whole texture. An atlas sub-image covers a
/// rectangle at `offset`; its own coordinates start at `(0, 0)` regardless.
///
/// Invariant: `offset + size <= texture_size` component-wise, all non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    offset: Vec2,
    size: Vec2,
    texture_size: Vec2,
}

impl Region {
    /// Region covering an entire texture.
    pub fn full(texture: Extent) -> Self {
        let texture_size = texture.as_vec2();
        Self { offset: Vec2::ZERO, size: texture_size, texture_size }
    }

    /// Region covering `area` (texture pixels) of a texture of `texture_size`.
    pub fn new(area: Rect, texture_size: Vec2) -> Result<Self, ImageError> {
        let bounds = Rect::from_size(texture_size);
        check_within(area, bounds)?;
        Ok(Self { offset: area.origin, size: area.size, texture_size })
    }

    /// Narrows this region to `local`, given in this region's own coordinates.
    pub fn sub_region(&self, local: Rect) -> Result<Self, ImageError> {
        check_within(local, Rect::from_size(self.size))?;
        Ok(Self {
            offset: self.offset + local.origin,
            size: local.size,
            texture_size: self.texture_size,
        })
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn texture_size(&self) -> Vec2 {
        self.texture_size
    }

    /// Maps a rectangle in region coordinates to texture pixels.
    #[inline]
    pub fn to_texture_space(&self, local: Rect) -> Rect {
        local.translated(self.offset)
    }

    /// Texture pixels to UV. Always divides by the full texture size.
    #[inline]
    pub fn normalize(&self, texel: Vec2) -> Vec2 {
        texel / self.texture_size
    }
}

fn check_within(area: Rect, bounds: Rect) -> Result<(), ImageError> {
    let valid = area.is_finite()
        && area.size.x >= 0.0
        && area.size.y >= 0.0
        && bounds.contains_rect(area);
    if valid {
        Ok(())
    } else {
        Err(ImageError::RegionOutOfBounds { region: area, bounds })
    }
}
