use core::num::NonZeroU32;

/// Opaque identifier of a GPU texture owned by a [`TextureBackend`].
///
/// Zero is never a valid handle; "no texture" is expressed as
/// `Option<TextureHandle>::None`.
///
/// [`TextureBackend`]: super::TextureBackend
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(NonZeroU32);

impl TextureHandle {
    #[inline]
    pub const fn new(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    /// Returns `None` for `0`.
    #[inline]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Sampling state baked into a texture when it is created.
///
/// Changing any field after creation requires recreating the texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureConfig {
    /// Tile horizontally instead of clamping to the edge.
    pub repeat_x: bool,
    /// Tile vertically instead of clamping to the edge.
    pub repeat_y: bool,
    /// Generate and sample a mip chain.
    pub mipmapped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_handle() {
        assert_eq!(TextureHandle::from_raw(0), None);
        assert_eq!(TextureHandle::from_raw(7).map(TextureHandle::get), Some(7));
    }
}
