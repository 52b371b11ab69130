use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::bitmap::mip_chain;
use super::{Extent, Pixels, TextureBackend, TextureConfig, TextureHandle};

/// Creation parameters for [`WgpuTextures`].
#[derive(Debug, Clone)]
pub struct WgpuTexturesInit {
    /// Format every image texture is created with. Pixel data is RGBA8.
    pub format: wgpu::TextureFormat,

    /// Upper bound on mip levels below level 0 for mipmapped images.
    pub max_mip_levels: u32,

    /// Magnification/minification filter for image samplers.
    pub filter: wgpu::FilterMode,
}

impl Default for WgpuTexturesInit {
    fn default() -> Self {
        Self {
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            max_mip_levels: 12,
            filter: wgpu::FilterMode::Linear,
        }
    }
}

/// A live image texture with its view and sampler.
struct GpuTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    extent: Extent,
}

/// [`TextureBackend`] backed by a wgpu device.
///
/// Handles index an internal table; renderers resolve them to a view and
/// sampler with [`view`](Self::view) / [`sampler`](Self::sampler) when building
/// bind groups.
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    init: WgpuTexturesInit,
    textures: RefCell<HashMap<TextureHandle, GpuTexture>>,
    next_id: Cell<u32>,
}

impl WgpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue, init: WgpuTexturesInit) -> Self {
        Self {
            device,
            queue,
            init,
            textures: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    /// View of a live texture.
    pub fn view(&self, handle: TextureHandle) -> Option<wgpu::TextureView> {
        self.textures.borrow().get(&handle).map(|t| t.view.clone())
    }

    /// Sampler configured for a live texture's wrap and mipmap state.
    pub fn sampler(&self, handle: TextureHandle) -> Option<wgpu::Sampler> {
        self.textures.borrow().get(&handle).map(|t| t.sampler.clone())
    }

    pub fn extent(&self, handle: TextureHandle) -> Option<Extent> {
        self.textures.borrow().get(&handle).map(|t| t.extent)
    }

    /// Number of textures currently alive.
    pub fn live_count(&self) -> usize {
        self.textures.borrow().len()
    }

    fn allocate_handle(&self) -> Option<TextureHandle> {
        let id = self.next_id.get();
        // 0 is reserved; skip it on wrap.
        self.next_id.set(id.wrapping_add(1).max(1));
        TextureHandle::from_raw(id)
    }

    fn validate(&self, pixels: &Pixels<'_>) -> bool {
        let Extent { width, height } = pixels.extent;
        let max_dim = self.device.limits().max_texture_dimension_2d;

        if pixels.extent.is_empty() {
            log::warn!("refusing to create a {width}x{height} texture");
            return false;
        }
        if width > max_dim || height > max_dim {
            log::warn!("{width}x{height} texture exceeds the device limit of {max_dim}");
            return false;
        }
        if !pixels.is_well_formed() {
            log::warn!(
                "pixel buffer holds {} bytes, expected {} for {width}x{height}",
                pixels.rgba.len(),
                Pixels::expected_len(pixels.extent)
            );
            return false;
        }
        true
    }

    fn write_level(&self, texture: &wgpu::Texture, mip_level: u32, rgba: &[u8], extent: Extent) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * extent.width),
                rows_per_image: Some(extent.height),
            },
            wgpu::Extent3d {
                width: extent.width,
                height: extent.height,
                depth_or_array_layers: 1,
            },
        );
    }

    fn create_sampler(&self, config: TextureConfig) -> wgpu::Sampler {
        self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glint image sampler"),
            address_mode_u: address_mode(config.repeat_x),
            address_mode_v: address_mode(config.repeat_y),
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: self.init.filter,
            min_filter: self.init.filter,
            mipmap_filter: if config.mipmapped {
                wgpu::MipmapFilterMode::Linear
            } else {
                wgpu::MipmapFilterMode::Nearest
            },
            ..Default::default()
        })
    }
}

impl TextureBackend for WgpuTextures {
    fn create_texture(&self, pixels: Pixels<'_>, config: TextureConfig) -> Option<TextureHandle> {
        if !self.validate(&pixels) {
            return None;
        }

        let levels = if config.mipmapped {
            mip_chain(pixels, self.init.max_mip_levels)
        } else {
            Vec::new()
        };

        let extent = pixels.extent;
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glint image texture"),
            size: wgpu::Extent3d {
                width: extent.width,
                height: extent.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1 + levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.init.format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.write_level(&texture, 0, pixels.rgba, extent);
        for (i, level) in levels.iter().enumerate() {
            let level_extent = Extent::new(level.width(), level.height());
            self.write_level(&texture, i as u32 + 1, level.as_raw(), level_extent);
        }

        let Some(handle) = self.allocate_handle() else {
            texture.destroy();
            return None;
        };

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.create_sampler(config);

        self.textures.borrow_mut().insert(
            handle,
            GpuTexture { texture, view, sampler, extent },
        );
        Some(handle)
    }

    fn destroy_texture(&self, handle: TextureHandle) {
        match self.textures.borrow_mut().remove(&handle) {
            Some(entry) => entry.texture.destroy(),
            None => log::warn!("destroy_texture: unknown handle {}", handle.get()),
        }
    }
}

impl Drop for WgpuTextures {
    fn drop(&mut self) {
        let leaked = self.textures.get_mut().len();
        if leaked > 0 {
            log::debug!("WgpuTextures dropped with {leaked} live textures");
        }
    }
}

#[inline]
fn address_mode(repeat: bool) -> wgpu::AddressMode {
    if repeat {
        wgpu::AddressMode::Repeat
    } else {
        wgpu::AddressMode::ClampToEdge
    }
}
