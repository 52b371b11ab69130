use std::fmt;
use std::rc::Rc;

use crate::image::{Image, ImageError, ImageLease};
use crate::texture::Bitmap;

/// An image used as a tileable fill.
///
/// A pattern holds an [`ImageLease`], so the image's texture stays alive for
/// exactly as long as the pattern does and is released when it is dropped.
pub struct Pattern {
    lease: ImageLease,
}

impl Pattern {
    pub(crate) fn new(image: &Rc<Image>) -> Self {
        Self { lease: ImageLease::new(image) }
    }

    /// The image this pattern fills with.
    #[inline]
    pub fn image(&self) -> &Rc<Image> {
        self.lease.image()
    }

    #[inline]
    pub fn repeat_x(&self) -> bool {
        self.image().repeat_x()
    }

    #[inline]
    pub fn repeat_y(&self) -> bool {
        self.image().repeat_y()
    }

    /// CPU rasterization of a texture-backed pattern.
    ///
    /// Always fails: the pixels live on the GPU.
    pub fn rasterize(&self) -> Result<Bitmap, ImageError> {
        Err(ImageError::CapabilityUnsupported {
            operation: "rasterize pattern",
            kind: self.image().kind(),
        })
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self.image(), other.image())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern").field("image", self.image()).finish()
    }
}
