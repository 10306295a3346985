use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::decode::ImageResource;
use crate::foundation::core::{CanvasSize, Color, Point, Vec2};
use crate::foundation::error::{CoverError, CoverResult};

pub(crate) const MIN_FONT_SIZE_PX: f64 = 1.0;
pub(crate) const MIN_LINE_HEIGHT: f64 = 0.05;
pub(crate) const MIN_ICON_DIAMETER_PX: f64 = 1.0;

/// Mutable state driving every layer of the cover.
///
/// This is the single source of truth the renderers read from. Image handles are runtime-only and
/// never serialized; a JSON preset carries everything else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Current raster dimensions.
    pub canvas_size: CanvasSize,
    /// Background layer state.
    pub background: BackgroundConfig,
    /// Icon/emblem layer state.
    pub icon: IconConfig,
    /// Text layer state.
    pub text: TextConfig,
    /// Watermark layer state.
    pub watermark: WatermarkConfig,
}

/// Background photo, fill color, blur and tint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    /// Decoded background photo, if any.
    #[serde(skip)]
    pub image: Option<ImageResource>,
    /// Fill used when no photo is set (and underneath a photo).
    pub fill_color: Color,
    /// Gaussian blur applied to the photo, in pixels.
    pub blur_radius_px: f64,
    /// Multiplicative tint over the photo. White and `None` are both no-ops.
    pub tint_color: Option<Color>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: None,
            fill_color: Color::rgb(0x33, 0x41, 0x55),
            blur_radius_px: 0.0,
            tint_color: None,
        }
    }
}

impl BackgroundConfig {
    /// Tint that actually needs compositing, with white treated as absent.
    pub fn effective_tint(&self) -> Option<Color> {
        self.tint_color.filter(|c| !c.is_white())
    }
}

/// Drop shadow parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowSpec {
    /// Shadow color (alpha controls strength).
    pub color: Color,
    /// Gaussian blur of the shadow, in pixels.
    pub blur_px: f64,
    /// Offset of the shadow from the shape.
    pub offset: Vec2,
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self {
            color: Color::rgba(0, 0, 0, 90),
            blur_px: 20.0,
            offset: Vec2::new(0.0, 8.0),
        }
    }
}

impl ShadowSpec {
    /// Whether drawing this shadow would change any pixel.
    pub fn is_visible(&self) -> bool {
        self.color.a > 0
    }
}

/// Circular emblem with an optional ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Decoded emblem image, if any. Without one the icon layer is empty.
    #[serde(skip)]
    pub image: Option<ImageResource>,
    /// Center of the emblem in canvas pixels.
    pub center: Point,
    /// Outer diameter including the ring.
    pub diameter_px: f64,
    /// Clockwise rotation around the emblem's own center.
    pub rotation_deg: f64,
    /// Width of the colored ring; `0` disables the ring plate.
    pub ring_thickness_px: f64,
    /// Ring plate color.
    pub ring_color: Color,
    /// Drop shadow applied to the whole emblem.
    pub shadow: ShadowSpec,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            image: None,
            center: Point::new(300.0, 300.0),
            diameter_px: 200.0,
            rotation_deg: 0.0,
            ring_thickness_px: 8.0,
            ring_color: Color::WHITE,
            shadow: ShadowSpec::default(),
        }
    }
}

impl IconConfig {
    /// Half of the outer diameter.
    pub fn radius(&self) -> f64 {
        self.diameter_px / 2.0
    }

    /// Diameter of the image disc inside the ring.
    pub fn inner_diameter(&self) -> f64 {
        (self.diameter_px - 2.0 * self.ring_thickness_px).max(0.0)
    }
}

/// Multi-line title text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Literal lines of the user string, split on line breaks.
    pub lines: Vec<String>,
    /// Center of the text block in canvas pixels.
    pub center: Point,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Line advance as a multiple of the font size.
    pub line_height_multiplier: f64,
    /// Glyph color.
    pub color: Color,
    /// Depth of the embossed drop shadow; `0` disables it.
    pub extrusion_depth_px: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lines: vec!["Cover Title".to_string()],
            center: Point::new(750.0, 300.0),
            font_size_px: 72.0,
            line_height_multiplier: 1.2,
            color: Color::WHITE,
            extrusion_depth_px: 0.0,
        }
    }
}

impl TextConfig {
    /// Replace the text, splitting literally on line breaks (`\n` or `\r\n`).
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
    }

    /// The text joined back with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f64 {
        self.font_size_px * self.line_height_multiplier
    }

    /// Character count of the longest line.
    pub fn longest_line_chars(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Distance of the watermark anchor from the bottom-right canvas corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    /// Horizontal distance from the right edge.
    pub dx: f64,
    /// Vertical distance from the bottom edge.
    pub dy: f64,
}

/// Small italic label pinned to the bottom-right corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatermarkConfig {
    /// Label text; empty disables the watermark.
    pub text: String,
    /// Label color.
    pub color: Color,
    /// Offset of the anchor from the bottom-right corner.
    pub margin_from_edge: Margin,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color::rgba(255, 255, 255, 153),
            margin_from_edge: Margin { dx: 20.0, dy: 20.0 },
        }
    }
}

impl WatermarkConfig {
    /// Anchor position: right end of the label's baseline.
    pub fn anchor(&self, canvas: CanvasSize) -> Point {
        Point::new(
            f64::from(canvas.width) - self.margin_from_edge.dx,
            f64::from(canvas.height) - self.margin_from_edge.dy,
        )
    }
}

impl CanvasConfig {
    /// Parse a JSON preset from a reader and normalize it.
    pub fn from_reader<R: std::io::Read>(r: R) -> CoverResult<Self> {
        let mut cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CoverError::serde(format!("parse canvas config JSON: {e}")))?;
        if cfg.canvas_size.width == 0 || cfg.canvas_size.height == 0 {
            return Err(CoverError::validation("canvas_size must be > 0 on both axes"));
        }
        cfg.normalize();
        Ok(cfg)
    }

    /// Parse a JSON preset from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CoverResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CoverError::validation(format!("open canvas config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize the preset (images excluded) as pretty JSON.
    pub fn to_json(&self) -> CoverResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoverError::serde(format!("serialize canvas config: {e}")))
    }

    /// Clamp degenerate geometry to the nearest value the renderers can draw.
    pub fn normalize(&mut self) {
        self.background.blur_radius_px = non_negative(self.background.blur_radius_px);

        let icon = &mut self.icon;
        icon.diameter_px = finite_or(icon.diameter_px, MIN_ICON_DIAMETER_PX).max(MIN_ICON_DIAMETER_PX);
        icon.ring_thickness_px = non_negative(icon.ring_thickness_px).min(icon.diameter_px / 2.0);
        icon.rotation_deg = finite_or(icon.rotation_deg, 0.0);
        icon.shadow.blur_px = non_negative(icon.shadow.blur_px);
        icon.center = finite_point(icon.center, self.canvas_size.center());

        let text = &mut self.text;
        text.font_size_px = finite_or(text.font_size_px, MIN_FONT_SIZE_PX).max(MIN_FONT_SIZE_PX);
        text.line_height_multiplier =
            finite_or(text.line_height_multiplier, 1.0).max(MIN_LINE_HEIGHT);
        text.extrusion_depth_px = non_negative(text.extrusion_depth_px);
        text.center = finite_point(text.center, self.canvas_size.center());
        if text.lines.iter().any(|l| l.contains('\n')) {
            let joined = text.text();
            text.set_text(&joined);
        }
    }
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

fn finite_point(p: Point, fallback: Point) -> Point {
    if p.x.is_finite() && p.y.is_finite() {
        p
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
