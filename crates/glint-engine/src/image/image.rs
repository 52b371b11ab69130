use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::coords::Rect;
use crate::paint::{Pattern, Tint};
use crate::texture::{Bitmap, PixelSource, TextureBackend, TextureConfig, TextureHandle, TextureSheet};

use super::quad::{stretch_quad, sub_region_quad};
use super::{ImageError, ImageLease, QuadBatch, Region, TexturedQuad};

/// Pixel-level transformation applied to a CPU bitmap.
pub trait BitmapTransformer {
    fn transform(&self, bitmap: &mut Bitmap);
}

/// A logical 2D image drawn from a lazily created GPU texture.
///
/// # Texture lifetime
///
/// The image claims a texture from its [`TextureSheet`] on the first
/// [`draw`](Self::draw) (or explicit [`ensure_texture`](Self::ensure_texture))
/// and gives the claim back when:
/// - the reference count drops from 1 to 0 ([`release`](Self::release))
/// - the repeat or mipmap state changes
/// - the image is dropped
///
/// Images cut from one sheet with equal wrap/mipmap state share a single
/// texture, destroyed when the last of them lets go.
///
/// # Threading
///
/// All operations must run on the thread that owns the GPU context. `Image`
/// shares its backend through `Rc` and is neither `Send` nor `Sync`, so the
/// compiler enforces this.
pub struct Image {
    sheet: Rc<TextureSheet>,
    texture: Cell<Option<TextureHandle>>,
    region: Region,
    config: Cell<TextureConfig>,
    refs: Cell<u32>,
}

impl Image {
    /// An image covering all of `source`, on a sheet of its own.
    pub fn new(backend: Rc<dyn TextureBackend>, source: Rc<dyn PixelSource>) -> Self {
        let region = Region::full(source.extent());
        Self::from_parts(TextureSheet::shared(backend, source), region)
    }

    /// An image covering `area` (pixels) of a shared atlas sheet.
    pub fn atlas_region(sheet: &Rc<TextureSheet>, area: Rect) -> Result<Self, ImageError> {
        let region = Region::new(area, sheet.source().extent().as_vec2())?;
        Ok(Self::from_parts(Rc::clone(sheet), region))
    }

    /// A new image addressing `area` of this one, in this image's coordinates.
    ///
    /// The sub-image draws from the same sheet but starts with default
    /// wrap/mipmap state and no references.
    pub fn sub_image(&self, area: Rect) -> Result<Self, ImageError> {
        let region = self.region.sub_region(area)?;
        Ok(Self::from_parts(Rc::clone(&self.sheet), region))
    }

    fn from_parts(sheet: Rc<TextureSheet>, region: Region) -> Self {
        Self {
            sheet,
            texture: Cell::new(None),
            region,
            config: Cell::new(TextureConfig::default()),
            refs: Cell::new(0),
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> f32 {
        self.region.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.region.height()
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The sheet this image draws from; cut more regions with
    /// [`atlas_region`](Self::atlas_region).
    #[inline]
    pub fn sheet(&self) -> &Rc<TextureSheet> {
        &self.sheet
    }

    /// True once the pixel source can supply pixels for upload.
    pub fn is_ready(&self) -> bool {
        self.sheet.source().pixels().is_some()
    }

    /// Current scene-graph reference count.
    #[inline]
    pub fn refs(&self) -> u32 {
        self.refs.get()
    }

    /// True while a GPU texture exists for this image.
    #[inline]
    pub fn has_texture(&self) -> bool {
        self.texture.get().is_some()
    }

    pub(crate) fn kind(&self) -> &'static str {
        self.sheet.source().kind()
    }

    // ── texture provider ──────────────────────────────────────────────────

    /// Returns the live texture, creating it if needed.
    ///
    /// `None` means there is nothing to draw (pixels unavailable or creation
    /// failed); it is never an error.
    pub fn ensure_texture(&self) -> Option<TextureHandle> {
        if let Some(texture) = self.texture.get() {
            return Some(texture);
        }
        let texture = self.sheet.acquire(self.config.get())?;
        self.texture.set(Some(texture));
        Some(texture)
    }

    /// Gives up this image's texture if it holds one. Idempotent.
    ///
    /// The GPU resource is destroyed once no other image on the sheet uses it.
    pub fn clear_texture(&self) {
        if let Some(texture) = self.texture.take() {
            self.sheet.release(texture);
        }
    }

    // ── reference counting ────────────────────────────────────────────────

    /// Records one more scene-graph attachment. Does not create the texture.
    pub fn reference(&self) {
        self.refs.set(self.refs.get() + 1);
    }

    /// Drops one attachment; the texture is destroyed when none remain.
    ///
    /// Fails with [`ImageError::PreconditionViolation`] if there are no
    /// references to release.
    pub fn release(&self) -> Result<(), ImageError> {
        let refs = self.refs.get();
        if refs == 0 {
            return Err(ImageError::PreconditionViolation(
                "released an image with no references",
            ));
        }
        self.refs.set(refs - 1);
        if refs == 1 {
            self.clear_texture();
        }
        Ok(())
    }

    /// Scoped reference: released when the returned lease is dropped.
    pub fn lease(self: &Rc<Self>) -> ImageLease {
        ImageLease::new(self)
    }

    // ── wrap / mipmap state ───────────────────────────────────────────────

    #[inline]
    pub fn repeat_x(&self) -> bool {
        self.config.get().repeat_x
    }

    #[inline]
    pub fn repeat_y(&self) -> bool {
        self.config.get().repeat_y
    }

    #[inline]
    pub fn mipmapped(&self) -> bool {
        self.config.get().mipmapped
    }

    /// Sets the wrap mode. Any change invalidates the texture.
    pub fn set_repeat(&self, repeat_x: bool, repeat_y: bool) {
        self.update_config(TextureConfig { repeat_x, repeat_y, ..self.config.get() });
    }

    /// Enables or disables mipmaps. Any change invalidates the texture.
    pub fn set_mipmapped(&self, mipmapped: bool) {
        self.update_config(TextureConfig { mipmapped, ..self.config.get() });
    }

    fn update_config(&self, next: TextureConfig) {
        if self.config.replace(next) != next {
            self.clear_texture();
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws the whole image into `dst`.
    ///
    /// Repeating axes tile the image across `dst`; the others stretch it.
    /// Submits nothing when there is no texture.
    pub fn draw<B>(&self, batch: &mut B, transform: &B::Transform, dst: Rect, tint: Tint)
    where
        B: QuadBatch + ?Sized,
    {
        self.submit(batch, transform, tint, |region, config| stretch_quad(region, config, dst));
    }

    /// Draws `src` (in this image's coordinates) into `dst`.
    ///
    /// Submits nothing when there is no texture.
    pub fn draw_region<B>(
        &self,
        batch: &mut B,
        transform: &B::Transform,
        dst: Rect,
        src: Rect,
        tint: Tint,
    ) where
        B: QuadBatch + ?Sized,
    {
        self.submit(batch, transform, tint, |region, _| sub_region_quad(region, dst, src));
    }

    fn submit<B, F>(&self, batch: &mut B, transform: &B::Transform, tint: Tint, build: F)
    where
        B: QuadBatch + ?Sized,
        F: FnOnce(&Region, TextureConfig) -> TexturedQuad,
    {
        let Some(texture) = self.ensure_texture() else { return };
        let quad = build(&self.region, self.config.get());
        batch.prepare_texture(texture, tint);
        batch.add_quad(transform, quad);
    }

    // ── adapters & pixel access ───────────────────────────────────────────

    /// Wraps this image as a tileable fill. The pattern holds a lease.
    pub fn to_pattern(self: &Rc<Self>) -> Pattern {
        Pattern::new(self)
    }

    /// Copies ARGB pixels of `area` into `out`.
    ///
    /// Always fails: GPU-backed images have no CPU pixel store.
    pub fn get_rgb(
        &self,
        _area: Rect,
        _out: &mut [u32],
        _offset: usize,
        _scan_size: usize,
    ) -> Result<(), ImageError> {
        Err(ImageError::CapabilityUnsupported { operation: "get_rgb", kind: self.kind() })
    }

    /// Produces a new image by running `xform` over this image's pixels.
    ///
    /// Always fails: GPU-backed images have no CPU pixel store.
    pub fn transform(&self, _xform: &dyn BitmapTransformer) -> Result<Image, ImageError> {
        Err(ImageError::CapabilityUnsupported { operation: "transform", kind: self.kind() })
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("region", &self.region)
            .field("config", &self.config.get())
            .field("refs", &self.refs.get())
            .field("texture", &self.texture.get())
            .finish()
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        self.clear_texture();
    }
}
