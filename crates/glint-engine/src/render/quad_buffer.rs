use core::marker::PhantomData;
use core::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{TransformPoint, Vec2};
use crate::image::{QuadBatch, TexturedQuad};
use crate::paint::Tint;
use crate::texture::TextureHandle;

/// Consecutive instances sharing one texture and tint: one instanced draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadRun {
    pub texture: TextureHandle,
    pub tint: Tint,
    pub instances: Range<u32>,
}

/// CPU-side quad batch.
///
/// Collects quads submitted by images during a frame, already transformed and
/// packed for upload. Renderers walk [`runs`](Self::runs) and issue one
/// instanced draw per run, binding the run's texture.
///
/// Buffers are kept across [`clear`](Self::clear) so a warmed-up buffer does
/// not allocate per frame.
#[derive(Debug)]
pub struct QuadBuffer<T> {
    instances: Vec<QuadInstance>,
    runs: Vec<QuadRun>,
    bound: Option<(TextureHandle, Tint)>,
    warned_unbound: bool,
    _transform: PhantomData<fn(&T)>,
}

impl<T> Default for QuadBuffer<T> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            runs: Vec::new(),
            bound: None,
            warned_unbound: false,
            _transform: PhantomData,
        }
    }
}

impl<T> QuadBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded quads and the bound texture; keeps capacity.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.runs.clear();
        self.bound = None;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[inline]
    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    #[inline]
    pub fn runs(&self) -> &[QuadRun] {
        &self.runs
    }

    /// Instance data ready for `queue.write_buffer`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl<T: TransformPoint> QuadBatch for QuadBuffer<T> {
    type Transform = T;

    fn prepare_texture(&mut self, texture: TextureHandle, tint: Tint) {
        self.bound = Some((texture, tint));
    }

    fn add_quad(&mut self, transform: &T, quad: TexturedQuad) {
        let Some((texture, tint)) = self.bound else {
            if !self.warned_unbound {
                log::debug!("QuadBuffer: add_quad before prepare_texture; quad ignored");
                self.warned_unbound = true;
            }
            return;
        };

        let TexturedQuad { dst_min, dst_max, uv_min, uv_max } = quad;
        let corners = [
            dst_min,
            Vec2::new(dst_max.x, dst_min.y),
            dst_max,
            Vec2::new(dst_min.x, dst_max.y),
        ]
        .map(|p| {
            let p = transform.transform_point(p);
            [p.x, p.y]
        });

        let Some(index) = next_instance_index(self.instances.len()) else {
            log::error!("QuadBuffer: instance index space exhausted; quad dropped");
            return;
        };
        self.instances.push(QuadInstance {
            corners,
            uv_min: [uv_min.x, uv_min.y],
            uv_max: [uv_max.x, uv_max.y],
            color: tint.to_color().to_array(),
        });

        match self.runs.last_mut() {
            Some(run) if run.texture == texture && run.tint == tint && run.instances.end == index => {
                run.instances.end += 1;
            }
            _ => self.runs.push(QuadRun { texture, tint, instances: index..index + 1 }),
        }
    }
}

/// Index for the instance pushed after `len` others. Run ranges are `u32` and
/// exclusive, so the last usable index is `u32::MAX - 1`.
fn next_instance_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&index| index < u32::MAX)
}

/// Instance data layout (64 bytes):
///
///  offset  0  corners  [[f32; 2]; 4]  loc 1..=4  (tl, tr, br, bl)
///  offset 32  uv_min   [f32; 2]       loc 5
///  offset 40  uv_max   [f32; 2]       loc 6
///  offset 48  color    [f32; 4]       loc 7      (premultiplied tint)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub corners: [[f32; 2]; 4],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub color: [f32; 4],
}

impl QuadInstance {
    const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        1 => Float32x2, // corner tl
        2 => Float32x2, // corner tr
        3 => Float32x2, // corner br
        4 => Float32x2, // corner bl
        5 => Float32x2, // uv_min
        6 => Float32x2, // uv_max
        7 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::coords::{Affine2, Rect};
    use crate::image::Image;
    use crate::paint::Color;
    use crate::texture::testing::FakeTextures;
    use crate::texture::{Bitmap, TextureSheet};

    fn handle(raw: u32) -> TextureHandle {
        TextureHandle::from_raw(raw).unwrap()
    }

    fn quad(x: f32) -> TexturedQuad {
        TexturedQuad {
            dst_min: Vec2::new(x, 0.0),
            dst_max: Vec2::new(x + 10.0, 20.0),
            uv_min: Vec2::ZERO,
            uv_max: Vec2::new(1.0, 1.0),
        }
    }

    #[test]
    fn instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 64);
    }

    #[test]
    fn corners_are_transformed_clockwise_from_top_left() {
        let mut buf = QuadBuffer::<Affine2>::new();
        buf.prepare_texture(handle(1), Tint::NONE);
        buf.add_quad(&Affine2::translation(100.0, 50.0), quad(0.0));

        let inst = buf.instances()[0];
        assert_eq!(inst.corners, [[100.0, 50.0], [110.0, 50.0], [110.0, 70.0], [100.0, 70.0]]);
        assert_eq!(inst.uv_max, [1.0, 1.0]);
        assert_eq!(inst.color, Color::WHITE.to_array());
    }

    #[test]
    fn same_texture_and_tint_extend_a_run() {
        let mut buf = QuadBuffer::<Affine2>::new();
        let id = Affine2::IDENTITY;
        for x in [0.0, 10.0, 20.0] {
            buf.prepare_texture(handle(1), Tint::NONE);
            buf.add_quad(&id, quad(x));
        }
        buf.prepare_texture(handle(2), Tint::NONE);
        buf.add_quad(&id, quad(30.0));
        buf.prepare_texture(handle(2), Tint(0x8000_0000));
        buf.add_quad(&id, quad(40.0));

        let runs: Vec<_> = buf.runs().iter().map(|r| (r.texture.get(), r.instances.clone())).collect();
        assert_eq!(runs, vec![(1, 0..3), (2, 3..4), (2, 4..5)]);
    }

    #[test]
    fn quads_without_a_bound_texture_are_dropped() {
        let mut buf = QuadBuffer::<Affine2>::new();
        buf.add_quad(&Affine2::IDENTITY, quad(0.0));
        assert!(buf.is_empty());
        assert!(buf.runs().is_empty());
    }

    #[test]
    fn clear_unbinds_texture() {
        let mut buf = QuadBuffer::<Affine2>::new();
        buf.prepare_texture(handle(1), Tint::NONE);
        buf.add_quad(&Affine2::IDENTITY, quad(0.0));
        buf.clear();
        buf.add_quad(&Affine2::IDENTITY, quad(0.0));
        assert!(buf.is_empty());
        assert!(buf.as_bytes().is_empty());
    }

    #[test]
    fn instance_indices_stop_short_of_u32_max() {
        assert_eq!(next_instance_index(0), Some(0));
        assert_eq!(next_instance_index(u32::MAX as usize - 1), Some(u32::MAX - 1));
        assert_eq!(next_instance_index(u32::MAX as usize), None);
        assert_eq!(next_instance_index(usize::MAX), None);
    }

    #[test]
    fn atlas_regions_draw_in_one_run() {
        let backend = FakeTextures::shared();
        let sheet = TextureSheet::shared(backend.clone(), Rc::new(Bitmap::filled(256, 256, [255; 4])));
        let a = Image::atlas_region(&sheet, Rect::new(0.0, 0.0, 64.0, 64.0)).unwrap();
        let b = Image::atlas_region(&sheet, Rect::new(64.0, 0.0, 64.0, 64.0)).unwrap();
        let c = a.sub_image(Rect::new(0.0, 0.0, 32.0, 32.0)).unwrap();

        let mut buf = QuadBuffer::<Affine2>::new();
        let xf = Affine2::scale(2.0, 2.0);
        a.draw(&mut buf, &xf, Rect::new(0.0, 0.0, 64.0, 64.0), Tint::NONE);
        a.draw(&mut buf, &xf, Rect::new(64.0, 0.0, 64.0, 64.0), Tint::NONE);
        b.draw(&mut buf, &xf, Rect::new(0.0, 64.0, 64.0, 64.0), Tint::NONE);
        c.draw(&mut buf, &xf, Rect::new(64.0, 64.0, 32.0, 32.0), Tint::NONE);

        assert_eq!(buf.len(), 4);
        assert_eq!(buf.runs().len(), 1);
        assert_eq!(buf.runs()[0].instances, 0..4);
        assert_eq!(backend.created(), 1);
        assert_eq!(buf.instances()[1].corners[2], [256.0, 128.0]);
        assert_eq!(buf.instances()[2].uv_min, [0.25, 0.0]);
        assert_eq!(buf.instances()[3].uv_max, [0.125, 0.125]);
        assert_eq!(buf.as_bytes().len(), 4 * 64);
    }
}
