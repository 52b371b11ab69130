//! Batch-side rendering support.
//!
//! Images submit [`TexturedQuad`](crate::image::TexturedQuad)s to a
//! [`QuadBatch`](crate::image::QuadBatch); [`QuadBuffer`] is the CPU-side
//! implementation that packs them into GPU instance data.
//!
//! Convention:
//! - quad corners are emitted in pixels after the batch transform
//! - UVs are normalized against the full backing texture

mod quad_buffer;

pub use quad_buffer::{QuadBuffer, QuadInstance, QuadRun};
