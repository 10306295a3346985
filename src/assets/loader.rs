//! Generation-tagged image loads.
//!
//! A load is split in three steps so the decode never borrows the engine:
//!
//! 1. [`crate::CoverEngine::request_image`] bumps the slot generation and returns an
//!    [`ImageRequest`] (already resolved if the bytes are cached).
//! 2. [`ImageRequest::decode`] reads and decodes the source, on whatever executor the host uses.
//! 3. [`crate::CoverEngine::complete_image`] applies the result only if no newer request for the
//!    same slot was issued in the meantime.

use std::path::PathBuf;

use anyhow::Context;

use crate::assets::cache::ContentFingerprint;
use crate::assets::decode::{ImageResource, decode_image_with_fingerprint};
use crate::foundation::error::{CoverError, CoverResult};
use crate::render::layer::Layer;

/// Config field an image is loaded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Background photo.
    Background,
    /// Icon emblem.
    Icon,
}

impl ImageSlot {
    /// Layer redrawn when this slot changes.
    pub fn layer(self) -> Layer {
        match self {
            ImageSlot::Background => Layer::Background,
            ImageSlot::Icon => Layer::Icon,
        }
    }
}

/// Where encoded image bytes come from.
///
/// Fetching remote URLs is the host's job; it hands the fetched blob over as [`ImageSource::Bytes`].
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Encoded bytes already in memory (uploaded file, fetched blob).
    Bytes(Vec<u8>),
    /// Encoded file on disk.
    Path(PathBuf),
}

impl ImageSource {
    fn read_bytes(self) -> CoverResult<Vec<u8>> {
        match self {
            ImageSource::Bytes(b) => Ok(b),
            ImageSource::Path(p) => std::fs::read(&p)
                .with_context(|| format!("read image '{}'", p.display()))
                .map_err(|e| CoverError::decode(format!("{e:#}"))),
        }
    }
}

/// Monotonically increasing tag of a load request within one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub(crate) u64);

impl Generation {
    /// Raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A pending load, detached from the engine.
#[derive(Debug)]
pub struct ImageRequest {
    slot: ImageSlot,
    generation: Generation,
    source: Option<ImageSource>,
    fingerprint: Option<ContentFingerprint>,
    cached: Option<ImageResource>,
}

impl ImageRequest {
    pub(crate) fn new(
        slot: ImageSlot,
        generation: Generation,
        source: ImageSource,
        fingerprint: Option<ContentFingerprint>,
        cached: Option<ImageResource>,
    ) -> Self {
        let source = if cached.is_some() { None } else { Some(source) };
        Self {
            slot,
            generation,
            source,
            fingerprint,
            cached,
        }
    }

    /// Slot this request targets.
    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    /// Generation assigned when the request was issued.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the image was served from the engine cache and needs no decode.
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Read and decode the source.
    ///
    /// Decoding itself is synchronous CPU work; the `async` boundary lets hosts schedule it like
    /// any other suspended task.
    pub async fn decode(self) -> DecodedImage {
        let Self {
            slot,
            generation,
            source,
            fingerprint,
            cached,
        } = self;

        let result = match (cached, source) {
            (Some(img), _) => Ok(img),
            (None, Some(source)) => source.read_bytes().and_then(|bytes| {
                let fp = fingerprint.unwrap_or_else(|| ContentFingerprint::of(&bytes));
                decode_image_with_fingerprint(&bytes, fp)
            }),
            (None, None) => Err(CoverError::decode("image request has no source")),
        };

        DecodedImage {
            slot,
            generation,
            result,
        }
    }

    /// Decode on the current thread.
    pub fn decode_blocking(self) -> DecodedImage {
        pollster::block_on(self.decode())
    }
}

/// Result of [`ImageRequest::decode`], to be handed back to the engine.
#[derive(Debug)]
pub struct DecodedImage {
    pub(crate) slot: ImageSlot,
    pub(crate) generation: Generation,
    pub(crate) result: CoverResult<ImageResource>,
}

impl DecodedImage {
    /// Slot the decode was requested for.
    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    /// Generation of the originating request.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether decoding succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// What the engine did with a completed decode.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The image was installed and its layer marked dirty.
    Applied {
        /// Updated slot.
        slot: ImageSlot,
    },
    /// A newer request for the slot exists; the result was discarded.
    Stale {
        /// Slot of the discarded result.
        slot: ImageSlot,
        /// Generation of the discarded result.
        generation: Generation,
        /// Generation currently expected for the slot.
        current: Generation,
    },
    /// Decoding failed; the slot was cleared and its layer falls back to its empty state.
    Failed {
        /// Affected slot.
        slot: ImageSlot,
        /// Why decoding failed. Meant as a non-blocking notification for the UI.
        error: CoverError,
    },
}

impl LoadOutcome {
    /// Whether the load changed the slot's image.
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }

    /// Whether the result was discarded as stale.
    pub fn is_stale(&self) -> bool {
        matches!(self, LoadOutcome::Stale { .. })
    }
}

/// Per-slot generation counters.
#[derive(Debug, Default)]
pub(crate) struct Generations {
    background: u64,
    icon: u64,
}

impl Generations {
    fn counter(&mut self, slot: ImageSlot) -> &mut u64 {
        match slot {
            ImageSlot::Background => &mut self.background,
            ImageSlot::Icon => &mut self.icon,
        }
    }

    /// Issue the next generation for `slot`, superseding every earlier one.
    pub(crate) fn bump(&mut self, slot: ImageSlot) -> Generation {
        let c = self.counter(slot);
        *c += 1;
        Generation(*c)
    }

    pub(crate) fn current(&self, slot: ImageSlot) -> Generation {
        match slot {
            ImageSlot::Background => Generation(self.background),
            ImageSlot::Icon => Generation(self.icon),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
