//! coverkit is a layered canvas compositing engine for cover and banner images.
//!
//! A cover is built from four independently rendered off-screen layers that are blitted onto a
//! visible surface in a fixed order:
//!
//! 1. **Background**: fill color, or a photo scaled to cover the canvas, blurred and tinted
//! 2. **Text**: multi-line title, each line centered, with an optional extruded shadow
//! 3. **Icon**: circular emblem with a ring plate, rotation and drop shadow
//! 4. **Watermark**: small oblique label pinned to the bottom-right corner
//!
//! [`CoverEngine`] owns the [`CanvasConfig`] and every surface. Field updates
//! ([`ConfigUpdate`]), image loads and pointer drags only mark layers dirty; a single
//! [`CoverEngine::flush`] per tick redraws each dirty layer once and recomposites.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical config and images produce identical pixels.
//! - **Premultiplied RGBA8** on every surface; exports are un-premultiplied on encode.
//! - **Stale decodes never win**: image loads carry a per-slot generation number.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod engine;
mod foundation;
mod geometry;
mod interact;
mod render;

pub use assets::cache::{ContentFingerprint, ImageCache};
pub use assets::decode::{ImageResource, decode_image};
pub use assets::font::FontResource;
pub use assets::loader::{
    DecodedImage, Generation, ImageRequest, ImageSlot, ImageSource, LoadOutcome,
};
pub use config::aspect::AspectRatio;
pub use config::model::{
    BackgroundConfig, CanvasConfig, IconConfig, Margin, ShadowSpec, TextConfig, WatermarkConfig,
};
pub use config::update::ConfigUpdate;
pub use engine::{CoverEngine, EngineOpts, PointerEvent};
pub use foundation::core::{Affine, CanvasSize, Color, Point, Rect, Rgba8Premul, Size, Vec2};
pub use foundation::error::{CoverError, CoverResult};
pub use geometry::fit::{CoverFit, cover_fit};
pub use geometry::hit::{
    ESTIMATED_CHAR_WIDTH_EM, clamp_icon_center, clamp_text_center, estimated_text_extent,
    icon_bounds, is_inside_icon, is_inside_icon_disc, is_inside_text, text_bounds,
};
pub use geometry::mapper::{to_canvas_space, to_display_space};
pub use interact::drag::{DragFeedback, DragState, DragTarget};
pub use render::frame::{ExportFormat, FrameRGBA};
pub use render::layer::{Layer, LayerSet};
pub use render::scheduler::FlushReport;
pub use render::surface::DEFAULT_MAX_SURFACE_PIXELS;
pub use render::text::line_baselines;
pub use render::watermark::WATERMARK_OBLIQUE_DEG;
