use serde::{Deserialize, Serialize};

use crate::assets::cache::ImageCache;
use crate::assets::decode::ImageResource;
use crate::assets::font::{FontResource, TextShaper};
use crate::assets::loader::{
    DecodedImage, Generations, ImageRequest, ImageSlot, ImageSource, LoadOutcome,
};
use crate::config::model::CanvasConfig;
use crate::config::update::ConfigUpdate;
use crate::foundation::core::{Color, Point, Rect};
use crate::foundation::error::CoverResult;
use crate::geometry::mapper::{is_usable, to_canvas_space};
use crate::interact::drag::{DragController, DragFeedback, DragState, DragTarget};
use crate::render::background::render_background;
use crate::render::compositor::{LayerSurfaces, composite};
use crate::render::frame::{ExportFormat, FrameRGBA};
use crate::render::icon::render_icon;
use crate::render::layer::{Layer, LayerSet};
use crate::render::scheduler::{FlushReport, RedrawScheduler};
use crate::render::surface::{DEFAULT_MAX_SURFACE_PIXELS, Painter, Surface};
use crate::render::text::render_text;
use crate::render::watermark::render_watermark;

/// Engine-wide options that are not part of the editable cover state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOpts {
    /// Maximum number of decoded images kept in the fingerprint cache; `0` disables caching.
    pub image_cache_capacity: usize,
    /// Largest surface (in pixels) the engine will allocate.
    pub max_surface_pixels: u64,
    /// Color of the text extrusion shadow.
    pub extrusion_shadow_color: Color,
    /// Font size of the watermark label.
    pub watermark_font_size_px: f64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            image_cache_capacity: 16,
            max_surface_pixels: DEFAULT_MAX_SURFACE_PIXELS,
            extrusion_shadow_color: Color::rgba(0, 0, 0, 0x80),
            watermark_font_size_px: 16.0,
        }
    }
}

/// Pointer event in client (display) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in client coordinates.
    pub client: Point,
    /// On-screen bounding rectangle of the canvas element.
    pub display_rect: Rect,
}

impl PointerEvent {
    /// Build a pointer event.
    pub fn new(client: Point, display_rect: Rect) -> Self {
        Self {
            client,
            display_rect,
        }
    }
}

/// The layered cover compositor.
///
/// Owns the [`CanvasConfig`], one off-screen surface per layer plus the visible surface, the
/// image cache, the redraw scheduler and the drag controller. All mutation goes through this type;
/// mutations only mark layers dirty and [`CoverEngine::flush`] performs the actual redraw.
pub struct CoverEngine {
    config: CanvasConfig,
    opts: EngineOpts,
    layers: LayerSurfaces,
    visible: Surface,
    scheduler: RedrawScheduler,
    drag: DragController,
    cache: ImageCache,
    generations: Generations,
    shaper: TextShaper,
    painter: Painter,
    font: Option<FontResource>,
}

impl std::fmt::Debug for CoverEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverEngine")
            .field("canvas_size", &self.config.canvas_size)
            .field("pending", &self.scheduler.pending())
            .field("drag", &self.drag.state())
            .field("font", &self.font)
            .finish()
    }
}

impl CoverEngine {
    /// Create an engine for `config`, allocating every surface up front.
    ///
    /// The first [`CoverEngine::flush`] renders all layers.
    pub fn new(mut config: CanvasConfig, opts: EngineOpts) -> CoverResult<Self> {
        config.normalize();
        let size = config.canvas_size;
        let layers = LayerSurfaces::new(size, opts.max_surface_pixels)?;
        let visible = Surface::new(size, opts.max_surface_pixels)?;
        Ok(Self {
            cache: ImageCache::new(opts.image_cache_capacity),
            config,
            opts,
            layers,
            visible,
            scheduler: RedrawScheduler::all_dirty(),
            drag: DragController::default(),
            generations: Generations::default(),
            shaper: TextShaper::new(),
            painter: Painter::default(),
            font: None,
        })
    }

    /// Current cover state.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Engine options.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Apply one discrete field update and schedule the affected layers.
    ///
    /// Canvas-size changes reallocate all surfaces before touching the config, so an allocation
    /// failure leaves the engine unchanged.
    pub fn apply(&mut self, update: ConfigUpdate) -> CoverResult<LayerSet> {
        if update.resizes_canvas() {
            let mut next = self.config.clone();
            let dirty = update.apply(&mut next)?;
            if next.canvas_size != self.config.canvas_size {
                let size = next.canvas_size;
                let layers = LayerSurfaces::new(size, self.opts.max_surface_pixels)?;
                let visible = Surface::new(size, self.opts.max_surface_pixels)?;
                self.layers = layers;
                self.visible = visible;
                tracing::debug!(width = size.width, height = size.height, "canvas resized");
            }
            self.config = next;
            self.scheduler.mark(dirty);
            return Ok(dirty);
        }

        let dirty = update.apply(&mut self.config)?;
        self.scheduler.mark(dirty);
        Ok(dirty)
    }

    /// Apply several updates as one event; they coalesce into a single redraw per layer.
    pub fn apply_all(
        &mut self,
        updates: impl IntoIterator<Item = ConfigUpdate>,
    ) -> CoverResult<LayerSet> {
        let mut dirty = LayerSet::EMPTY;
        for u in updates {
            dirty |= self.apply(u)?;
        }
        Ok(dirty)
    }

    /// Register font bytes used by the text and watermark layers.
    pub fn set_font(&mut self, bytes: Vec<u8>) -> CoverResult<()> {
        let font = self.shaper.load_font(bytes)?;
        self.font = Some(font);
        self.scheduler
            .mark(LayerSet::only(Layer::Text) | LayerSet::only(Layer::Watermark));
        Ok(())
    }

    /// Register a font file from disk.
    pub fn set_font_path(&mut self, path: impl AsRef<std::path::Path>) -> CoverResult<()> {
        let font = self.shaper.load_font_path(path.as_ref())?;
        self.font = Some(font);
        self.scheduler
            .mark(LayerSet::only(Layer::Text) | LayerSet::only(Layer::Watermark));
        Ok(())
    }

    /// Currently registered font, if any.
    pub fn font(&self) -> Option<&FontResource> {
        self.font.as_ref()
    }

    /// Start loading an image into `slot`.
    ///
    /// The returned request supersedes every earlier request for the same slot. Bytes already in
    /// the cache resolve without decoding.
    pub fn request_image(&mut self, slot: ImageSlot, source: ImageSource) -> ImageRequest {
        let generation = self.generations.bump(slot);
        let (fingerprint, cached) = match &source {
            ImageSource::Bytes(bytes) => {
                let fp = crate::assets::cache::ContentFingerprint::of(bytes);
                let hit = self.cache.get(fp);
                if hit.is_some() {
                    tracing::debug!(?slot, fingerprint = fp.as_u64(), "image cache hit");
                }
                (Some(fp), hit)
            }
            ImageSource::Path(_) => (None, None),
        };
        ImageRequest::new(slot, generation, source, fingerprint, cached)
    }

    /// Hand a finished decode back to the engine.
    ///
    /// Results from superseded requests are discarded. A failed current decode clears the slot so
    /// the layer falls back to its empty state (fill color for the background), and is reported
    /// as [`LoadOutcome::Failed`]; it is never retried.
    pub fn complete_image(&mut self, decoded: DecodedImage) -> LoadOutcome {
        let DecodedImage {
            slot,
            generation,
            result,
        } = decoded;

        let current = self.generations.current(slot);
        if generation != current {
            tracing::warn!(
                ?slot,
                generation = generation.as_u64(),
                current = current.as_u64(),
                "discarding stale image decode"
            );
            return LoadOutcome::Stale {
                slot,
                generation,
                current,
            };
        }

        match result {
            Ok(image) => {
                self.cache.insert(image.clone());
                self.set_slot(slot, Some(image));
                LoadOutcome::Applied { slot }
            }
            Err(error) => {
                tracing::warn!(?slot, %error, "image decode failed; layer degraded");
                self.set_slot(slot, None);
                LoadOutcome::Failed { slot, error }
            }
        }
    }

    /// Request, decode on the current thread and complete in one call.
    pub fn load_image_blocking(&mut self, slot: ImageSlot, source: ImageSource) -> LoadOutcome {
        let decoded = self.request_image(slot, source).decode_blocking();
        self.complete_image(decoded)
    }

    /// Remove the image from `slot` and supersede any in-flight request for it.
    pub fn clear_image(&mut self, slot: ImageSlot) {
        self.generations.bump(slot);
        self.set_slot(slot, None);
    }

    fn set_slot(&mut self, slot: ImageSlot, image: Option<ImageResource>) {
        match slot {
            ImageSlot::Background => self.config.background.image = image,
            ImageSlot::Icon => self.config.icon.image = image,
        }
        self.scheduler.mark_layer(slot.layer());
    }

    /// The engine-owned image cache.
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Drop every cached decode.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn map_pointer(&self, ev: PointerEvent) -> Option<Point> {
        let p = to_canvas_space(ev.client, ev.display_rect, self.config.canvas_size);
        if is_usable(p) {
            Some(p)
        } else {
            tracing::debug!(?ev, "ignoring pointer event with degenerate display rect");
            None
        }
    }

    /// Pointer pressed: start a drag if it hits the icon or the text.
    pub fn pointer_down(&mut self, ev: PointerEvent) -> Option<DragTarget> {
        let p = self.map_pointer(ev)?;
        self.drag.pointer_down(p, &self.config)
    }

    /// Pointer moved: reposition the dragged element and schedule its layer.
    pub fn pointer_move(&mut self, ev: PointerEvent) -> Option<DragFeedback> {
        if self.drag.state().is_idle() {
            return None;
        }
        let p = self.map_pointer(ev)?;
        let feedback = self.drag.pointer_move(p, &mut self.config)?;
        self.scheduler.mark_layer(feedback.target.layer());
        Some(feedback)
    }

    /// Pointer released: end the drag session.
    pub fn pointer_up(&mut self) -> Option<DragTarget> {
        self.drag.release()
    }

    /// Pointer left the canvas: end the drag session.
    pub fn pointer_leave(&mut self) -> Option<DragTarget> {
        self.drag.release()
    }

    /// Current drag session.
    pub fn drag_session(&self) -> DragState {
        self.drag.state()
    }

    /// Current icon center, for live coordinate display.
    pub fn icon_center(&self) -> Point {
        self.config.icon.center
    }

    /// Current text block center, for live coordinate display.
    pub fn text_center(&self) -> Point {
        self.config.text.center
    }

    /// Layers waiting for the next flush.
    pub fn pending(&self) -> LayerSet {
        self.scheduler.pending()
    }

    /// Redraw every dirty layer once and recomposite if anything changed.
    ///
    /// On error the pending flags are kept so the next flush retries.
    #[tracing::instrument(skip(self))]
    pub fn flush(&mut self) -> CoverResult<FlushReport> {
        if self.scheduler.is_idle() {
            return Ok(FlushReport::default());
        }
        let (dirty, compose) = self.scheduler.take();
        match self.redraw(dirty, compose) {
            Ok(report) => {
                if !report.is_noop() {
                    tracing::debug!(redrawn = ?report.redrawn, "flushed");
                }
                Ok(report)
            }
            Err(e) => {
                self.scheduler.mark(dirty);
                if compose {
                    self.scheduler.mark_compose();
                }
                Err(e)
            }
        }
    }

    fn redraw(&mut self, dirty: LayerSet, compose: bool) -> CoverResult<FlushReport> {
        let max = self.opts.max_surface_pixels;
        for layer in dirty.iter() {
            let surface = self.layers.get_mut(layer);
            match layer {
                Layer::Background => {
                    render_background(surface, &self.config.background, &mut self.painter, max)?
                }
                Layer::Icon => render_icon(surface, &self.config.icon, &mut self.painter, max)?,
                Layer::Text => render_text(
                    surface,
                    &self.config.text,
                    self.font.as_ref(),
                    &mut self.shaper,
                    &mut self.painter,
                    max,
                    self.opts.extrusion_shadow_color,
                )?,
                Layer::Watermark => render_watermark(
                    surface,
                    &self.config.watermark,
                    self.font.as_ref(),
                    self.opts.watermark_font_size_px,
                    &mut self.shaper,
                    &mut self.painter,
                    max,
                )?,
            }
        }

        let composited = compose || !dirty.is_empty();
        if composited {
            composite(&mut self.visible, &self.layers)?;
        }
        Ok(FlushReport {
            redrawn: dirty,
            composited,
        })
    }

    /// Copy of the visible surface as of the last flush.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.visible.width(),
            height: self.visible.height(),
            data: self.visible.data().to_vec(),
        }
    }

    /// Flush pending work and return the up-to-date cover.
    pub fn render(&mut self) -> CoverResult<FrameRGBA> {
        self.flush()?;
        Ok(self.snapshot())
    }

    /// Flush pending work and encode the cover for export.
    pub fn encode(&mut self, format: ExportFormat) -> CoverResult<Vec<u8>> {
        self.render()?.encode(format)
    }
}
