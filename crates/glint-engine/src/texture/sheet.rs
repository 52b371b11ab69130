use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{PixelSource, TextureBackend, TextureConfig, TextureHandle};

/// GPU textures for one pixel source, shared by every image cut from it.
///
/// Textures are created lazily per [`TextureConfig`] and counted by claim:
/// [`acquire`](TextureSheet::acquire) creates or joins the texture for a
/// config, [`release`](TextureSheet::release) gives the claim back, and the
/// texture is destroyed when its last claim goes. Atlas regions drawn with the
/// same wrap/mipmap state therefore bind one texture.
pub struct TextureSheet {
    backend: Rc<dyn TextureBackend>,
    source: Rc<dyn PixelSource>,
    live: RefCell<Vec<Claimed>>,
    warned_failure: Cell<bool>,
}

#[derive(Debug, Clone, Copy)]
struct Claimed {
    config: TextureConfig,
    handle: TextureHandle,
    claims: u32,
}

impl TextureSheet {
    pub fn shared(backend: Rc<dyn TextureBackend>, source: Rc<dyn PixelSource>) -> Rc<Self> {
        Rc::new(Self {
            backend,
            source,
            live: RefCell::new(Vec::new()),
            warned_failure: Cell::new(false),
        })
    }

    #[inline]
    pub fn backend(&self) -> &Rc<dyn TextureBackend> {
        &self.backend
    }

    #[inline]
    pub fn source(&self) -> &Rc<dyn PixelSource> {
        &self.source
    }

    /// The live texture for `config`, without creating or claiming it.
    pub fn current(&self, config: TextureConfig) -> Option<TextureHandle> {
        self.live.borrow().iter().find(|c| c.config == config).map(|c| c.handle)
    }

    /// Number of live textures on this sheet.
    pub fn live_textures(&self) -> usize {
        self.live.borrow().len()
    }

    /// Claims the texture for `config`, creating it if no one holds it yet.
    ///
    /// `None` means the source has no pixels yet, is empty, or the backend
    /// refused the allocation. Nothing is cached in that case, so the next
    /// call retries.
    pub fn acquire(&self, config: TextureConfig) -> Option<TextureHandle> {
        if let Some(claimed) = self.live.borrow_mut().iter_mut().find(|c| c.config == config) {
            claimed.claims += 1;
            return Some(claimed.handle);
        }

        let pixels = self.source.pixels()?;
        let extent = pixels.extent;
        if extent.is_empty() {
            log::debug!("skipping texture for empty {} source", self.source.kind());
            return None;
        }

        match self.backend.create_texture(pixels, config) {
            Some(handle) => {
                log::debug!(
                    "created texture {} ({}x{}, {}) {:?}",
                    handle.get(),
                    extent.width,
                    extent.height,
                    self.source.kind(),
                    config
                );
                self.live.borrow_mut().push(Claimed { config, handle, claims: 1 });
                self.warned_failure.set(false);
                Some(handle)
            }
            None => {
                if !self.warned_failure.replace(true) {
                    log::warn!(
                        "texture creation failed for {} ({}x{}); image will not be drawn",
                        self.source.kind(),
                        extent.width,
                        extent.height
                    );
                }
                None
            }
        }
    }

    /// Gives back one claim on `handle`; the last claim destroys the texture.
    pub fn release(&self, handle: TextureHandle) {
        let mut live = self.live.borrow_mut();
        let Some(index) = live.iter().position(|c| c.handle == handle) else {
            log::error!("released texture {} not owned by this sheet", handle.get());
            return;
        };
        live[index].claims -= 1;
        if live[index].claims == 0 {
            live.swap_remove(index);
            drop(live);
            self.backend.destroy_texture(handle);
            log::debug!("destroyed texture {}", handle.get());
        }
    }
}

impl Drop for TextureSheet {
    fn drop(&mut self) {
        for claimed in self.live.get_mut().drain(..) {
            self.backend.destroy_texture(claimed.handle);
        }
    }
}

impl fmt::Debug for TextureSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureSheet")
            .field("source", &self.source.kind())
            .field("extent", &self.source.extent())
            .field("live", &self.live.borrow())
            .finish()
    }
}
