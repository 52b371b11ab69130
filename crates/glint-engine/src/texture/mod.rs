//! GPU texture lifetime.
//!
//! - [`TextureBackend`]: allocation/destruction, implemented by the GPU context
//! - [`PixelSource`]: where a texture's pixels come from
//! - [`TextureSheet`]: lazily created textures for one source, shared by its images
//! - [`WgpuTextures`]: the wgpu implementation of the backend

mod backend;
mod bitmap;
mod handle;
mod sheet;
mod source;
mod wgpu_textures;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::TextureBackend;
pub use bitmap::{mip_chain, mip_level_count, Bitmap};
pub use handle::{TextureConfig, TextureHandle};
pub use sheet::TextureSheet;
pub use source::{Extent, PixelSource, Pixels, Placeholder};
pub use wgpu_textures::{WgpuTextures, WgpuTexturesInit};
