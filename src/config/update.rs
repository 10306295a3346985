use serde::{Deserialize, Serialize};

use crate::config::aspect::AspectRatio;
use crate::config::model::{
    CanvasConfig, MIN_FONT_SIZE_PX, MIN_ICON_DIAMETER_PX, MIN_LINE_HEIGHT, Margin, ShadowSpec,
    non_negative,
};
use crate::foundation::core::{CanvasSize, Color, Point};
use crate::foundation::error::CoverResult;
use crate::geometry::hit::{clamp_icon_center, clamp_text_center};
use crate::render::layer::{Layer, LayerSet};

/// One discrete field update delivered by the surrounding UI.
///
/// Serialized as `{"op": "<name>", "value": ...}`; unit updates omit `value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum ConfigUpdate {
    /// Switch to an explicit raster size.
    CanvasSize(CanvasSize),
    /// Switch to a preset (or custom) aspect ratio.
    AspectRatio(AspectRatio),
    /// Background fill color.
    BackgroundFill(Color),
    /// Background blur radius in pixels.
    BlurRadius(f64),
    /// Background tint; `None` or white disables it.
    Tint(Option<Color>),
    /// Icon center in canvas pixels.
    IconCenter(Point),
    /// Icon outer diameter.
    IconDiameter(f64),
    /// Icon rotation in degrees.
    IconRotation(f64),
    /// Ring width.
    RingThickness(f64),
    /// Ring color.
    RingColor(Color),
    /// Icon drop shadow.
    IconShadow(ShadowSpec),
    /// Full text string; split on line breaks.
    Text(String),
    /// Text block center in canvas pixels.
    TextCenter(Point),
    /// Font size in pixels.
    FontSize(f64),
    /// Line height multiplier.
    LineHeight(f64),
    /// Text color.
    TextColor(Color),
    /// Text extrusion (embossed shadow) depth.
    ExtrusionDepth(f64),
    /// Watermark label.
    WatermarkText(String),
    /// Watermark color.
    WatermarkColor(Color),
    /// Watermark distance from the bottom-right corner.
    WatermarkMargin(Margin),
    /// Move the icon to the canvas center.
    RecenterIcon,
    /// Move the text block to the canvas center.
    RecenterText,
}

impl ConfigUpdate {
    /// Apply the update, clamping degenerate values, and return the layers it dirties.
    ///
    /// A canvas-size change dirties every layer and re-clamps the icon and text positions so they
    /// stay on the new canvas.
    pub fn apply(self, cfg: &mut CanvasConfig) -> CoverResult<LayerSet> {
        let dirty = match self {
            ConfigUpdate::CanvasSize(size) => {
                let size = CanvasSize::new(size.width, size.height)?;
                resize(cfg, size)
            }
            ConfigUpdate::AspectRatio(ratio) => resize(cfg, ratio.size()?),
            ConfigUpdate::BackgroundFill(c) => {
                cfg.background.fill_color = c;
                Layer::Background.into()
            }
            ConfigUpdate::BlurRadius(r) => {
                cfg.background.blur_radius_px = non_negative(r);
                Layer::Background.into()
            }
            ConfigUpdate::Tint(c) => {
                cfg.background.tint_color = c;
                Layer::Background.into()
            }
            ConfigUpdate::IconCenter(p) => {
                cfg.icon.center = clamp_icon_center(p, &cfg.icon, cfg.canvas_size);
                Layer::Icon.into()
            }
            ConfigUpdate::IconDiameter(d) => {
                cfg.icon.diameter_px = non_negative(d).max(MIN_ICON_DIAMETER_PX);
                cfg.icon.ring_thickness_px =
                    cfg.icon.ring_thickness_px.min(cfg.icon.diameter_px / 2.0);
                Layer::Icon.into()
            }
            ConfigUpdate::IconRotation(deg) => {
                cfg.icon.rotation_deg = if deg.is_finite() { deg } else { 0.0 };
                Layer::Icon.into()
            }
            ConfigUpdate::RingThickness(t) => {
                cfg.icon.ring_thickness_px = non_negative(t).min(cfg.icon.diameter_px / 2.0);
                Layer::Icon.into()
            }
            ConfigUpdate::RingColor(c) => {
                cfg.icon.ring_color = c;
                Layer::Icon.into()
            }
            ConfigUpdate::IconShadow(mut s) => {
                s.blur_px = non_negative(s.blur_px);
                cfg.icon.shadow = s;
                Layer::Icon.into()
            }
            ConfigUpdate::Text(s) => {
                cfg.text.set_text(&s);
                Layer::Text.into()
            }
            ConfigUpdate::TextCenter(p) => {
                cfg.text.center = clamp_text_center(p, &cfg.text, cfg.canvas_size);
                Layer::Text.into()
            }
            ConfigUpdate::FontSize(px) => {
                cfg.text.font_size_px = non_negative(px).max(MIN_FONT_SIZE_PX);
                Layer::Text.into()
            }
            ConfigUpdate::LineHeight(m) => {
                cfg.text.line_height_multiplier = non_negative(m).max(MIN_LINE_HEIGHT);
                Layer::Text.into()
            }
            ConfigUpdate::TextColor(c) => {
                cfg.text.color = c;
                Layer::Text.into()
            }
            ConfigUpdate::ExtrusionDepth(d) => {
                cfg.text.extrusion_depth_px = non_negative(d);
                Layer::Text.into()
            }
            ConfigUpdate::WatermarkText(s) => {
                cfg.watermark.text = s;
                Layer::Watermark.into()
            }
            ConfigUpdate::WatermarkColor(c) => {
                cfg.watermark.color = c;
                Layer::Watermark.into()
            }
            ConfigUpdate::WatermarkMargin(m) => {
                cfg.watermark.margin_from_edge = m;
                Layer::Watermark.into()
            }
            ConfigUpdate::RecenterIcon => {
                cfg.icon.center = cfg.canvas_size.center();
                Layer::Icon.into()
            }
            ConfigUpdate::RecenterText => {
                cfg.text.center = cfg.canvas_size.center();
                Layer::Text.into()
            }
        };
        Ok(dirty)
    }

    /// Whether applying this update may change the raster size.
    pub fn resizes_canvas(&self) -> bool {
        matches!(
            self,
            ConfigUpdate::CanvasSize(_) | ConfigUpdate::AspectRatio(_)
        )
    }
}

fn resize(cfg: &mut CanvasConfig, size: CanvasSize) -> LayerSet {
    if cfg.canvas_size == size {
        return LayerSet::EMPTY;
    }
    cfg.canvas_size = size;
    cfg.icon.center = clamp_icon_center(cfg.icon.center, &cfg.icon, size);
    cfg.text.center = clamp_text_center(cfg.text.center, &cfg.text, size);
    LayerSet::ALL
}

#[cfg(test)]
#[path = "../../tests/unit/config/update.rs"]
mod tests;
