// SPDX-License-Identifier: MPL-2.0
//! Displayable references to in-memory images.
//!
//! Every handle lives in the [`PreviewStore`] until it is explicitly released.
//! Iced evicts images from its renderer cache once no handle for them is
//! alive, so releasing here is what frees the decoded texture.

use crate::compression::Payload;
use iced::widget::image;
use std::collections::HashMap;

/// Opaque key for a preview held by a [`PreviewStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

#[derive(Debug, Default)]
pub struct PreviewStore {
    next_id: u64,
    handles: HashMap<PreviewId, image::Handle>,
}

impl PreviewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a displayable reference for `payload`.
    pub fn acquire(&mut self, payload: &Payload) -> PreviewId {
        let id = PreviewId(self.next_id);
        self.next_id += 1;
        self.handles
            .insert(id, image::Handle::from_bytes(payload.bytes().to_vec()));
        id
    }

    #[must_use]
    pub fn get(&self, id: PreviewId) -> Option<&image::Handle> {
        self.handles.get(&id)
    }

    /// Releases a reference. Returns `false` if it was already released.
    pub fn release(&mut self, id: PreviewId) -> bool {
        self.handles.remove(&id).is_some()
    }

    /// Number of references not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}
