//! Glint engine crate.
//!
//! GPU-backed 2D images: lazy texture creation, reference-counted texture
//! lifetime, wrap/mipmap state, and the geometry that turns an image and a
//! destination rectangle into a textured quad for a batch renderer.
//!
//! Everything here runs on the thread that owns the GPU context.

pub mod coords;
pub mod device;
pub mod image;
pub mod logging;
pub mod paint;
pub mod render;
pub mod texture;

pub use crate::image::{Image, ImageError, ImageLease, QuadBatch, TexturedQuad};
pub use crate::paint::{Pattern, Tint};
pub use crate::texture::{Bitmap, PixelSource, TextureBackend, TextureHandle, TextureSheet};
