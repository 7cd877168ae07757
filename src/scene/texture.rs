//! Texture availability as seen by the scene renderer.
//!
//! Decoding and uploading images belongs to the rendering backend; the
//! renderer only needs to know whether a node's texture is usable and its
//! pixel size.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::image::ImageId;

/// Load state of one image texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TextureStatus {
    /// Still loading. The node is not drawn.
    #[default]
    Pending,
    /// Decoded with the given pixel size.
    Ready {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Could not be loaded. The node is not drawn; siblings are unaffected.
    Failed,
}

/// Reports texture state per image.
pub trait TextureSource {
    /// Current state of the texture for `id`.
    fn status(&self, id: &ImageId) -> TextureStatus;
}

/// Explicit per-image texture states with a fallback for unknown ids.
#[derive(Debug, Clone, Default)]
pub struct TextureTable {
    entries: FxHashMap<ImageId, TextureStatus>,
    fallback: TextureStatus,
}

impl TextureTable {
    /// Table where every unknown image is still pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table where every unknown image is ready at `width` x `height`.
    #[must_use]
    pub fn all_ready(width: u32, height: u32) -> Self {
        Self {
            entries: FxHashMap::default(),
            fallback: TextureStatus::Ready { width, height },
        }
    }

    /// Record the state of one texture.
    pub fn set(&mut self, id: ImageId, status: TextureStatus) {
        let _ = self.entries.insert(id, status);
    }
}

impl TextureSource for TextureTable {
    fn status(&self, id: &ImageId) -> TextureStatus {
        self.entries.get(id).copied().unwrap_or(self.fallback)
    }
}
