//! Texture batch bookkeeping.
//!
//! A batch is a fixed list of texture requests issued together. Each slot
//! resolves exactly once, either to the decoded image or to the shared
//! flat-gray placeholder, so nothing downstream ever sees a load error.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Edge length of the placeholder texture in pixels.
pub const FALLBACK_TEXTURE_SIZE: u32 = 256;

/// RGBA fill of the placeholder texture (`#888888`, opaque).
pub const FALLBACK_TEXTURE_FILL: [u8; 4] = [0x88, 0x88, 0x88, 0xff];

/// Build the placeholder used in place of any texture that fails to load.
pub fn fallback_image() -> Image {
    Image::new_fill(
        Extent3d {
            width: FALLBACK_TEXTURE_SIZE,
            height: FALLBACK_TEXTURE_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &FALLBACK_TEXTURE_FILL,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// A texture that could not be fetched or decoded.
///
/// Never propagated: the loader logs it and substitutes the placeholder.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("failed to load texture {path}: {reason}")]
pub struct AssetLoadFailure {
    pub path: String,
    pub reason: String,
}

/// Where a resolved texture came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureOrigin {
    /// The requested image, decoded.
    Asset,
    /// The flat-gray placeholder substituted after a failure.
    Placeholder,
}

/// A resolved texture. The handle always points at a usable image.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedTexture {
    pub handle: Handle<Image>,
    pub origin: TextureOrigin,
}

impl LoadedTexture {
    pub fn is_placeholder(&self) -> bool {
        self.origin == TextureOrigin::Placeholder
    }
}

/// Load status of one outstanding request, as reported by the asset source.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotStatus {
    Pending,
    Ready,
    Failed(String),
}

/// One requested texture.
#[derive(Debug)]
pub struct TextureSlot {
    path: String,
    handle: Handle<Image>,
    resolved: Option<LoadedTexture>,
}

impl TextureSlot {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn handle(&self) -> &Handle<Image> {
        &self.handle
    }

    pub fn resolved(&self) -> Option<&LoadedTexture> {
        self.resolved.as_ref()
    }
}

/// Fixed set of texture requests joined by a single completion barrier.
#[derive(Resource, Debug, Default)]
pub struct TextureBatch {
    slots: Vec<TextureSlot>,
}

impl TextureBatch {
    /// Issue one load per path. All loads are in flight once this returns.
    pub fn request<'a>(
        paths: impl IntoIterator<Item = &'a str>,
        mut load: impl FnMut(&str) -> Handle<Image>,
    ) -> Self {
        let slots = paths
            .into_iter()
            .map(|path| TextureSlot {
                path: path.to_owned(),
                handle: load(path),
                resolved: None,
            })
            .collect();
        Self { slots }
    }

    /// Resolve every slot whose load has finished.
    ///
    /// Slots are resolved at most once; a failed slot gets `fallback` and
    /// is never retried. Returns true once every slot is resolved.
    pub fn poll(
        &mut self,
        mut status: impl FnMut(&TextureSlot) -> SlotStatus,
        fallback: &Handle<Image>,
    ) -> bool {
        for slot in self.slots.iter_mut().filter(|s| s.resolved.is_none()) {
            match status(slot) {
                SlotStatus::Pending => {}
                SlotStatus::Ready => {
                    slot.resolved = Some(LoadedTexture {
                        handle: slot.handle.clone(),
                        origin: TextureOrigin::Asset,
                    });
                }
                SlotStatus::Failed(reason) => {
                    let failure = AssetLoadFailure {
                        path: slot.path.clone(),
                        reason,
                    };
                    warn!("{failure}; using placeholder");
                    slot.resolved = Some(LoadedTexture {
                        handle: fallback.clone(),
                        origin: TextureOrigin::Placeholder,
                    });
                }
            }
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.resolved.is_some())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `(resolved, total)` slot counts.
    pub fn progress(&self) -> (usize, usize) {
        let resolved = self.slots.iter().filter(|s| s.resolved.is_some()).count();
        (resolved, self.slots.len())
    }

    pub fn slots(&self) -> &[TextureSlot] {
        &self.slots
    }

    /// Every resolved texture in request order, or `None` while any
    /// request is still outstanding.
    pub fn textures(&self) -> Option<Vec<LoadedTexture>> {
        self.slots.iter().map(|s| s.resolved.clone()).collect()
    }
}
