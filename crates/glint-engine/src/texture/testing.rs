//! Test doubles for texture backends.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{Pixels, TextureBackend, TextureConfig, TextureHandle};

/// Backend that hands out sequential handles and counts calls.
#[derive(Debug)]
pub(crate) struct FakeTextures {
    next: Cell<u32>,
    live: RefCell<HashMap<TextureHandle, TextureConfig>>,
    create_calls: Cell<usize>,
    created: Cell<usize>,
    destroyed: Cell<usize>,
    failing: Cell<bool>,
}

impl FakeTextures {
    pub(crate) fn shared() -> Rc<Self> {
        Rc::new(Self {
            next: Cell::new(1),
            live: RefCell::new(HashMap::new()),
            create_calls: Cell::new(0),
            created: Cell::new(0),
            destroyed: Cell::new(0),
            failing: Cell::new(false),
        })
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.get()
    }

    pub(crate) fn created(&self) -> usize {
        self.created.get()
    }

    pub(crate) fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    pub(crate) fn live(&self) -> usize {
        self.live.borrow().len()
    }

    pub(crate) fn config_of(&self, handle: TextureHandle) -> Option<TextureConfig> {
        self.live.borrow().get(&handle).copied()
    }
}

impl TextureBackend for FakeTextures {
    fn create_texture(&self, pixels: Pixels<'_>, config: TextureConfig) -> Option<TextureHandle> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.failing.get() || !pixels.is_well_formed() {
            return None;
        }
        let handle = TextureHandle::from_raw(self.next.get())?;
        self.next.set(self.next.get() + 1);
        self.created.set(self.created.get() + 1);
        self.live.borrow_mut().insert(handle, config);
        Some(handle)
    }

    fn destroy_texture(&self, handle: TextureHandle) {
        let removed = self.live.borrow_mut().remove(&handle);
        assert!(removed.is_some(), "destroyed unknown or already destroyed texture {handle:?}");
        self.destroyed.set(self.destroyed.get() + 1);
    }
}
