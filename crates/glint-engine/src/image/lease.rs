use std::fmt;
use std::rc::Rc;

use super::Image;

/// Scoped reference on an image.
///
/// Creating a lease calls [`Image::reference`]; dropping it calls
/// [`Image::release`]. The image's texture is therefore released
/// deterministically once the last lease (and scene attachment) goes away.
pub struct ImageLease {
    image: Rc<Image>,
}

impl ImageLease {
    pub fn new(image: &Rc<Image>) -> Self {
        image.reference();
        Self { image: Rc::clone(image) }
    }

    #[inline]
    pub fn image(&self) -> &Rc<Image> {
        &self.image
    }
}

impl Clone for ImageLease {
    fn clone(&self) -> Self {
        Self::new(&self.image)
    }
}

impl Drop for ImageLease {
    fn drop(&mut self) {
        // A lease always owns one reference, so this only fails if someone
        // released the image behind the lease's back.
        if let Err(err) = self.image.release() {
            log::error!("image lease dropped: {err}");
        }
    }
}

impl fmt::Debug for ImageLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageLease").field(&self.image).finish()
    }
}
