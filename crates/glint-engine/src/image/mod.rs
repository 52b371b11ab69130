//! GPU-backed images.
//!
//! Responsibilities:
//! - reference counting for scene-graph attachments ([`Image::reference`])
//! - lazy texture creation and invalidation on wrap/mipmap changes
//! - turning a destination (and optional source) rectangle into a
//!   [`TexturedQuad`] for a [`QuadBatch`]

mod error;
#[allow(clippy::module_inception)]
mod image;
mod lease;
mod quad;
mod region;

pub use error::ImageError;
pub use self::image::{BitmapTransformer, Image};
pub use lease::ImageLease;
pub use quad::{stretch_quad, sub_region_quad, QuadBatch, TexturedQuad};
pub use region::Region;
