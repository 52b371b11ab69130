use crate::coords::{Rect, Vec2};
use crate::paint::Tint;
use crate::texture::{TextureConfig, TextureHandle};

use super::Region;

/// One textured rectangle: destination corners plus normalized UV corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TexturedQuad {
    pub dst_min: Vec2,
    pub dst_max: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// Quad accumulation, implemented by the batch renderer.
///
/// Images only ever call `prepare_texture` followed by `add_quad`. Batching,
/// flushing and draw calls are the implementor's business.
pub trait QuadBatch {
    /// Transform type applied to quad vertices. Images pass it through as-is.
    type Transform;

    /// Binds `texture` and `tint` for the quads that follow.
    fn prepare_texture(&mut self, texture: TextureHandle, tint: Tint);

    /// Appends one quad drawn with the currently prepared texture.
    fn add_quad(&mut self, transform: &Self::Transform, quad: TexturedQuad);
}

/// Quad drawing a whole region into `dst`.
///
/// On a repeating axis the source span equals the destination span, so the
/// texture tiles once per region size; otherwise it is clamped to the region.
pub fn stretch_quad(region: &Region, config: TextureConfig, dst: Rect) -> TexturedQuad {
    let span = Vec2::new(
        if config.repeat_x { dst.size.x } else { region.width() },
        if config.repeat_y { dst.size.y } else { region.height() },
    );
    let src_min = region.offset();
    textured(region, dst, src_min, src_min + span)
}

/// Quad drawing `src` (region coordinates) into `dst`.
pub fn sub_region_quad(region: &Region, dst: Rect, src: Rect) -> TexturedQuad {
    let src = region.to_texture_space(src);
    textured(region, dst, src.min(), src.max())
}

#[inline]
fn textured(region: &Region, dst: Rect, src_min: Vec2, src_max: Vec2) -> TexturedQuad {
    TexturedQuad {
        dst_min: dst.min(),
        dst_max: dst.max(),
        uv_min: region.normalize(src_min),
        uv_max: region.normalize(src_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Extent;

    fn tex256() -> Vec2 {
        Vec2::new(256.0, 256.0)
    }

    fn no_repeat() -> TextureConfig {
        TextureConfig::default()
    }

    #[test]
    fn stretch_on_unpacked_region() {
        let region = Region::new(Rect::new(0.0, 0.0, 64.0, 64.0), tex256()).unwrap();
        let q = stretch_quad(&region, no_repeat(), Rect::new(10.0, 20.0, 128.0, 128.0));

        assert_eq!(q.uv_min, Vec2::new(0.0, 0.0));
        assert_eq!(q.uv_max, Vec2::new(0.25, 0.25));
        assert_eq!(q.dst_min, Vec2::new(10.0, 20.0));
        assert_eq!(q.dst_max, Vec2::new(138.0, 148.0));
    }

    #[test]
    fn sub_region_on_atlas_region() {
        let region = Region::new(Rect::new(64.0, 0.0, 64.0, 64.0), tex256()).unwrap();
        let q = sub_region_quad(
            &region,
            Rect::new(0.0, 0.0, 32.0, 32.0),
            Rect::new(0.0, 0.0, 32.0, 32.0),
        );
        assert_eq!(q.uv_min, Vec2::new(0.25, 0.0));
        assert_eq!(q.uv_max, Vec2::new(0.375, 0.125));
    }

    #[test]
    fn stretch_on_atlas_region_starts_at_offset() {
        let region = Region::new(Rect::new(64.0, 128.0, 64.0, 32.0), tex256()).unwrap();
        let q = stretch_quad(&region, no_repeat(), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(q.uv_min, Vec2::new(0.25, 0.5));
        assert_eq!(q.uv_max, Vec2::new(0.5, 0.625));
    }

    #[test]
    fn repeat_x_spans_destination_width() {
        let region = Region::full(Extent::new(64, 64));
        let config = TextureConfig { repeat_x: true, ..TextureConfig::default() };
        let q = stretch_quad(&region, config, Rect::new(0.0, 0.0, 200.0, 50.0));

        // 200 px of source across a 64 px texture: a bit over three tiles.
        assert_eq!(q.uv_max.x - q.uv_min.x, 200.0 / 64.0);
        // y is not repeating: clamped to the logical height.
        assert_eq!(q.uv_max.y, 1.0);
    }

    #[test]
    fn repeat_y_only_affects_y() {
        let region = Region::full(Extent::new(32, 32));
        let config = TextureConfig { repeat_y: true, ..TextureConfig::default() };
        let q = stretch_quad(&region, config, Rect::new(0.0, 0.0, 8.0, 96.0));
        assert_eq!(q.uv_max, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn sub_region_ignores_repeat_and_dst_size() {
        let region = Region::full(Extent::new(100, 50));
        let q = sub_region_quad(
            &region,
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Rect::new(25.0, 10.0, 50.0, 20.0),
        );
        assert_eq!(q.uv_min, Vec2::new(0.25, 0.2));
        assert_eq!(q.uv_max, Vec2::new(0.75, 0.6));
    }
}
