//! Coordinate and geometry types shared by the image core and batches.
//!
//! Canonical CPU space:
//! - pixels, origin top-left
//! - +X right, +Y down
//!
//! Texture space uses the same axes; UVs are pixel positions divided by the
//! full backing texture size.

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::{Affine2, TransformPoint};
pub use vec2::Vec2;
