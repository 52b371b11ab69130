use super::{Pixels, TextureConfig, TextureHandle};

/// GPU texture allocation, implemented by the graphics context.
///
/// Methods take `&self`: backends are shared (`Rc<dyn TextureBackend>`) by
/// every image created against them and keep their bookkeeping behind
/// interior mutability. All calls happen on the thread owning the GPU context.
pub trait TextureBackend {
    /// Creates a texture from `pixels` with the sampling state in `config`.
    ///
    /// Returns `None` when the texture cannot be created (invalid size, limits,
    /// exhaustion). Callers treat that as "nothing to draw this frame".
    fn create_texture(&self, pixels: Pixels<'_>, config: TextureConfig) -> Option<TextureHandle>;

    /// Releases a texture previously returned by [`create_texture`].
    ///
    /// [`create_texture`]: TextureBackend::create_texture
    fn destroy_texture(&self, handle: TextureHandle);
}
